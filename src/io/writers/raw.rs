use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a u8 tensor buffer as headerless bytes
pub fn write_raw_u8(output: &Path, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(data)?;
    writer.flush()?;
    Ok(())
}

/// Write an f32 tensor buffer as headerless little-endian bytes
pub fn write_raw_f32_le(output: &Path, data: &[f32]) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let mut bytes = Vec::with_capacity(data.len() * 4);
    for &v in data {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_u8_writes_bytes_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let data = [0u8, 1, 2, 254, 255];

        write_raw_u8(&path, &data).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), data);
    }

    #[test]
    fn raw_f32_is_little_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let data = [1.0f32, -0.5];

        write_raw_f32_le(&path, &data).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[0..4], 1.0f32.to_le_bytes());
        assert_eq!(&bytes[4..8], (-0.5f32).to_le_bytes());
    }
}
