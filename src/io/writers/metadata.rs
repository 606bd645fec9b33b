use serde::{Deserialize, Serialize};
use serde_json;
use std::path::Path;
use tracing::info;

use crate::io::reader::ImageMetadata;
use crate::types::{ChannelOrder, DataType, ResizeFilter, ScalingMode, TensorLayout};

/// Sidecar description of a raw tensor dump. The dump itself is headerless,
/// so this is the only record of its shape and element type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensorSidecar {
    /// Tensor shape in layout order: [h, w, c] for HWC, [c, h, w] for CHW
    pub shape: Vec<usize>,
    pub layout: TensorLayout,
    pub dtype: DataType,
    pub channel_order: ChannelOrder,
    pub scaling: ScalingMode,
    pub filter: ResizeFilter,
    pub byte_len: usize,

    // Source image provenance
    pub source_path: String,
    pub source_format: String,
    pub source_width: usize,
    pub source_height: usize,
    pub source_color_type: String,

    // Conversion provenance
    pub conversion_tool: String,
    pub conversion_version: String,
    pub conversion_timestamp: String,
}

/// Build a sidecar record for a finished tensor
pub fn build_tensor_sidecar(
    width: usize,
    height: usize,
    channels: usize,
    layout: TensorLayout,
    dtype: DataType,
    channel_order: ChannelOrder,
    scaling: ScalingMode,
    filter: ResizeFilter,
    byte_len: usize,
    source: &ImageMetadata,
) -> TensorSidecar {
    let shape = match layout {
        TensorLayout::Hwc => vec![height, width, channels],
        TensorLayout::Chw => vec![channels, height, width],
    };

    TensorSidecar {
        shape,
        layout,
        dtype,
        channel_order,
        scaling,
        filter,
        byte_len,
        source_path: source.source_path.display().to_string(),
        source_format: source.container_format.clone(),
        source_width: source.width,
        source_height: source.height,
        source_color_type: source.color_type.clone(),
        conversion_tool: "TENSORPREP".to_string(),
        conversion_version: env!("CARGO_PKG_VERSION").to_string(),
        conversion_timestamp: chrono::Utc::now().to_rfc3339(),
    }
}

/// Write the sidecar next to the raw dump as `<output>.json`
pub fn create_raw_metadata_sidecar(
    output_path: &Path,
    sidecar: &TensorSidecar,
) -> Result<(), Box<dyn std::error::Error>> {
    let sidecar_path = output_path.with_extension("json");

    let json_string = serde_json::to_string_pretty(sidecar)?;
    std::fs::write(&sidecar_path, json_string)?;

    info!("Created raw tensor metadata sidecar: {:?}", sidecar_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fake_source() -> ImageMetadata {
        ImageMetadata {
            source_path: PathBuf::from("/data/mug.jpg"),
            container_format: "jpeg".to_string(),
            width: 640,
            height: 480,
            color_type: "Rgb8".to_string(),
            file_size_bytes: 12345,
            decode_timestamp: "2020-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn sidecar_shape_follows_layout() {
        let hwc = build_tensor_sidecar(
            224,
            224,
            3,
            TensorLayout::Hwc,
            DataType::U8,
            ChannelOrder::Rgb,
            ScalingMode::None,
            ResizeFilter::Bilinear,
            224 * 224 * 3,
            &fake_source(),
        );
        assert_eq!(hwc.shape, vec![224, 224, 3]);

        let chw = build_tensor_sidecar(
            224,
            224,
            3,
            TensorLayout::Chw,
            DataType::F32,
            ChannelOrder::Bgr,
            ScalingMode::Vgg,
            ResizeFilter::Bilinear,
            224 * 224 * 3 * 4,
            &fake_source(),
        );
        assert_eq!(chw.shape, vec![3, 224, 224]);
        assert_eq!(chw.byte_len, 224 * 224 * 3 * 4);
    }

    #[test]
    fn sidecar_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("tensor.bin");

        let sidecar = build_tensor_sidecar(
            4,
            2,
            3,
            TensorLayout::Hwc,
            DataType::U8,
            ChannelOrder::Rgb,
            ScalingMode::None,
            ResizeFilter::Bilinear,
            24,
            &fake_source(),
        );
        create_raw_metadata_sidecar(&out, &sidecar).unwrap();

        let text = std::fs::read_to_string(dir.path().join("tensor.json")).unwrap();
        let parsed: TensorSidecar = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.shape, vec![2, 4, 3]);
        assert_eq!(parsed.source_format, "jpeg");
    }
}
