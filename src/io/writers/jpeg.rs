use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Preview encodes are for eyeballing the resize, not for delivery
const PREVIEW_QUALITY: u8 = 100;

pub fn write_gray_jpeg(
    output: &Path,
    width: usize,
    height: usize,
    data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, PREVIEW_QUALITY);
    encoder.encode(data, width as u16, height as u16, ColorType::Luma)?;
    Ok(())
}

pub fn write_rgb_jpeg(
    output: &Path,
    width: usize,
    height: usize,
    rgb_data: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, PREVIEW_QUALITY);
    encoder.encode(rgb_data, width as u16, height as u16, ColorType::Rgb)?;
    Ok(())
}
