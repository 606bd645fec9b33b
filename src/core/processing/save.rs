use std::path::Path;
use tracing::info;

use crate::core::params::PreprocessParams;
use crate::core::processing::pipeline::preprocess_pixel_pipeline;
use crate::core::processing::resize::resize_image_data;
use crate::io::reader::ImageMetadata;
use crate::io::writers::jpeg::{write_gray_jpeg, write_rgb_jpeg};
use crate::io::writers::metadata::{build_tensor_sidecar, create_raw_metadata_sidecar};
use crate::io::writers::raw::{write_raw_f32_le, write_raw_u8};
use crate::types::{ColorMode, DataType, OutputFormat};

/// Preprocess a decoded interleaved plane and write it to `output` in the
/// requested format. `Raw` dumps the tensor elements headerless (with an
/// optional sidecar); `Jpeg` encodes the resized plane for inspection.
pub fn save_preprocessed_image(
    plane: &[u8],
    original_cols: usize,
    original_rows: usize,
    output: &Path,
    params: &PreprocessParams,
    metadata: Option<&ImageMetadata>,
) -> Result<(), Box<dyn std::error::Error>> {
    match params.format {
        OutputFormat::Raw => {
            let dtype = params.resolved_dtype()?;
            let buffers =
                preprocess_pixel_pipeline(plane, original_cols, original_rows, params, dtype)?;

            let byte_len = match dtype {
                DataType::U8 => {
                    let data = buffers
                        .data_u8
                        .as_deref()
                        .ok_or("pipeline produced no u8 buffer")?;
                    write_raw_u8(output, data)?;
                    data.len()
                }
                DataType::F32 => {
                    let data = buffers
                        .data_f32
                        .as_deref()
                        .ok_or("pipeline produced no f32 buffer")?;
                    write_raw_f32_le(output, data)?;
                    data.len() * 4
                }
            };

            if params.sidecar {
                if let Some(meta) = metadata {
                    let sidecar = build_tensor_sidecar(
                        buffers.width,
                        buffers.height,
                        buffers.channels,
                        params.layout,
                        dtype,
                        params.channel_order,
                        params.scaling,
                        params.filter,
                        byte_len,
                        meta,
                    );
                    create_raw_metadata_sidecar(output, &sidecar)?;
                }
            }

            info!(
                "save_preprocessed_image: raw {} tensor saved ({} bytes)",
                dtype, byte_len
            );
        }
        OutputFormat::Jpeg => {
            let (cols, rows, resized) = resize_image_data(
                plane,
                original_cols,
                original_rows,
                params.width,
                params.height,
                params.color,
                params.filter,
                params.letterbox,
            )?;

            match params.color {
                ColorMode::Rgb => write_rgb_jpeg(output, cols, rows, &resized)?,
                ColorMode::Gray => write_gray_jpeg(output, cols, rows, &resized)?,
            }
            info!("save_preprocessed_image: JPEG preview saved");
        }
    }

    Ok(())
}
