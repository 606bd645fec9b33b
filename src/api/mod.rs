//! High-level, ergonomic library API: preprocess images to files or in-memory
//! tensors, plus batch helpers for directories. Prefer using these entrypoints
//! over low-level processing modules when integrating TENSORPREP.
use std::path::Path;

use crate::core::params::PreprocessParams;
use crate::core::processing::pipeline::preprocess_pixel_pipeline;
use crate::core::processing::save::save_preprocessed_image;
use crate::error::{Error, Result};
use crate::io::reader::{ImageMetadata, ImageReader};
use crate::types::{ColorMode, DataType, OutputFormat, TensorLayout};

/// Result of in-memory preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessedTensor {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub layout: TensorLayout,
    pub dtype: DataType,
    pub data: Option<Vec<u8>>,      // U8 elements
    pub data_f32: Option<Vec<f32>>, // F32 elements
    pub metadata: ImageMetadata,
}

impl PreprocessedTensor {
    pub fn element_count(&self) -> usize {
        self.width * self.height * self.channels
    }

    /// Serialized length in bytes
    pub fn byte_len(&self) -> usize {
        self.element_count() * self.dtype.element_size()
    }

    /// Serialize the tensor elements to headerless bytes (f32 little-endian)
    pub fn into_bytes(self) -> Vec<u8> {
        match self.dtype {
            DataType::U8 => self.data.unwrap_or_default(),
            DataType::F32 => {
                let data = self.data_f32.unwrap_or_default();
                let mut bytes = Vec::with_capacity(data.len() * 4);
                for v in data {
                    bytes.extend_from_slice(&v.to_le_bytes());
                }
                bytes
            }
        }
    }
}

fn decode_plane(reader: &ImageReader, color: ColorMode) -> Vec<u8> {
    match color {
        ColorMode::Rgb => reader.rgb_data(),
        ColorMode::Gray => reader.gray_data(),
    }
}

/// Preprocess an image file to in-memory tensor buffers (no disk output)
pub fn preprocess_image_to_buffer(
    input: &Path,
    params: &PreprocessParams,
) -> Result<PreprocessedTensor> {
    let dtype = params.resolved_dtype()?;
    let reader = ImageReader::open_with_options(input, Some(params.color))?;
    let plane = decode_plane(&reader, params.color);

    let buffers = preprocess_pixel_pipeline(
        &plane,
        reader.width(),
        reader.height(),
        params,
        dtype,
    )
    .map_err(|e| Error::external(e))?;

    Ok(PreprocessedTensor {
        width: buffers.width,
        height: buffers.height,
        channels: buffers.channels,
        layout: params.layout,
        dtype,
        data: buffers.data_u8,
        data_f32: buffers.data_f32,
        metadata: reader.metadata.clone(),
    })
}

/// Preprocess an image file to an output path using `PreprocessParams`
pub fn preprocess_image_to_path(
    input: &Path,
    output: &Path,
    params: &PreprocessParams,
) -> Result<()> {
    params.resolved_dtype()?;

    let reader = ImageReader::open_with_options(input, Some(params.color))?;
    let plane = decode_plane(&reader, params.color);

    save_preprocessed_image(
        &plane,
        reader.width(),
        reader.height(),
        output,
        params,
        Some(reader.metadata()),
    )
    .map_err(|e| Error::external(e))
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Return an iterator over regular files in `input_dir` with a recognized
/// image extension, sorted by name
pub fn iterate_image_files(input_dir: &Path) -> Result<std::vec::IntoIter<std::path::PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(input_dir).map_err(Error::from)? {
        let entry = entry.map_err(Error::from)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
            .unwrap_or(false);
        if recognized {
            files.push(path);
        }
    }
    files.sort();
    Ok(files.into_iter())
}

/// Extension of the per-file output in batch mode
fn batch_output_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Raw => "bin",
        OutputFormat::Jpeg => "jpg",
    }
}

/// Preprocess every recognized image file from `input_dir` into `output_dir`
/// using `params`. If `continue_on_error` is true, errors are counted in the
/// report and processing continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &PreprocessParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    params.resolved_dtype()?;
    std::fs::create_dir_all(output_dir).map_err(Error::from)?;

    let mut report = BatchReport::default();

    let mut iter = iterate_image_files(input_dir)?;
    while let Some(path) = iter.next() {
        // Early viability check to allow skipping undecodable files
        match ImageReader::open_with_warnings(&path, Some(params.color))? {
            Some(_) => {
                let stem = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .ok_or_else(|| Error::Processing(format!("No file stem for {:?}", path)))?;
                let output_path = output_dir.join(format!(
                    "{}.{}",
                    stem,
                    batch_output_extension(params.format)
                ));

                match preprocess_image_to_path(&path, &output_path, params) {
                    Ok(()) => report.processed += 1,
                    Err(e) => {
                        report.errors += 1;
                        if !continue_on_error {
                            return Err(e);
                        }
                    }
                }
            }
            None => {
                report.skipped += 1;
                continue;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChannelOrder, DataTypeArg, ResizeFilter, ScalingMode};
    use image::{Rgb, RgbImage};
    use std::path::PathBuf;

    fn write_gradient_png(dir: &Path, name: &str, w: u32, h: u32) -> PathBuf {
        let mut img = RgbImage::new(w, h);
        for (x, y, px) in img.enumerate_pixels_mut() {
            *px = Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 64]);
        }
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    fn params_224() -> PreprocessParams {
        PreprocessParams::default()
    }

    #[test]
    fn buffer_length_matches_width_height_channels() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_gradient_png(dir.path(), "in.png", 64, 48);

        let tensor = preprocess_image_to_buffer(&input, &params_224()).unwrap();
        assert_eq!((tensor.width, tensor.height, tensor.channels), (224, 224, 3));
        assert_eq!(tensor.byte_len(), 224 * 224 * 3);
        assert_eq!(tensor.data.as_ref().unwrap().len(), 224 * 224 * 3);
    }

    #[test]
    fn preprocessing_twice_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_gradient_png(dir.path(), "in.png", 100, 80);
        let out_a = dir.path().join("a.bin");
        let out_b = dir.path().join("b.bin");

        preprocess_image_to_path(&input, &out_a, &params_224()).unwrap();
        preprocess_image_to_path(&input, &out_b, &params_224()).unwrap();

        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn f32_chw_buffer_has_full_element_count() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_gradient_png(dir.path(), "in.png", 32, 32);

        let params = PreprocessParams {
            layout: TensorLayout::Chw,
            channel_order: ChannelOrder::Bgr,
            scaling: ScalingMode::Vgg,
            dtype: DataTypeArg::F32,
            filter: ResizeFilter::Bilinear,
            ..Default::default()
        };
        let tensor = preprocess_image_to_buffer(&input, &params).unwrap();
        assert_eq!(tensor.dtype, DataType::F32);
        assert_eq!(tensor.data_f32.as_ref().unwrap().len(), 3 * 224 * 224);
        assert_eq!(tensor.into_bytes().len(), 3 * 224 * 224 * 4);
    }

    #[test]
    fn directory_batch_counts_processed_and_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input_dir = dir.path().join("in");
        let output_dir = dir.path().join("out");
        std::fs::create_dir_all(&input_dir).unwrap();

        write_gradient_png(&input_dir, "a.png", 16, 16);
        write_gradient_png(&input_dir, "b.png", 20, 12);
        // Wrong bytes behind an image extension: counted as skipped
        std::fs::write(input_dir.join("c.jpg"), b"junk").unwrap();
        // Not an image extension: ignored entirely
        std::fs::write(input_dir.join("notes.txt"), b"hello").unwrap();

        let params = PreprocessParams {
            width: 8,
            height: 8,
            ..Default::default()
        };
        let report = process_directory_to_path(&input_dir, &output_dir, &params, true).unwrap();
        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors, 0);

        assert!(output_dir.join("a.bin").exists());
        assert!(output_dir.join("b.bin").exists());
        assert_eq!(
            std::fs::read(output_dir.join("a.bin")).unwrap().len(),
            8 * 8 * 3
        );
    }
}
