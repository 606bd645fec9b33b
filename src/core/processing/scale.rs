use tracing::debug;

use crate::types::{ColorMode, DataType, ScalingMode};

/// Caffe-era VGG channel means in BGR-agnostic RGB order, no std division
pub const VGG_MEAN_RGB: [f32; 3] = [123.0, 117.0, 104.0];
pub const VGG_MEAN_GRAY: f32 = 117.0;

/// torchvision normalization constants
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];
pub const IMAGENET_MEAN_GRAY: f32 = 0.449;
pub const IMAGENET_STD_GRAY: f32 = 0.226;

fn scale_inception(data: &[u8]) -> Vec<f32> {
    data.iter().map(|&v| v as f32 / 128.0 - 1.0).collect()
}

fn scale_vgg(data: &[u8], color: ColorMode) -> Vec<f32> {
    match color {
        ColorMode::Rgb => data
            .iter()
            .enumerate()
            .map(|(i, &v)| v as f32 - VGG_MEAN_RGB[i % 3])
            .collect(),
        ColorMode::Gray => data.iter().map(|&v| v as f32 - VGG_MEAN_GRAY).collect(),
    }
}

fn scale_imagenet(data: &[u8], color: ColorMode) -> Vec<f32> {
    match color {
        ColorMode::Rgb => data
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let c = i % 3;
                (v as f32 / 255.0 - IMAGENET_MEAN[c]) / IMAGENET_STD[c]
            })
            .collect(),
        ColorMode::Gray => data
            .iter()
            .map(|&v| (v as f32 / 255.0 - IMAGENET_MEAN_GRAY) / IMAGENET_STD_GRAY)
            .collect(),
    }
}

/// Apply the pixel scaling mode to a resized interleaved plane, yielding the
/// final element buffer as `(u8, f32)` options. Exactly one side is `Some`,
/// decided by the resolved `DataType`. The channel index of element `i` in an
/// interleaved HWC buffer is `i % channels`, so scaling runs before any
/// layout permutation.
pub fn scale_pixels(
    data: &[u8],
    color: ColorMode,
    mode: ScalingMode,
    dtype: DataType,
) -> (Option<Vec<u8>>, Option<Vec<f32>>) {
    debug!(
        "Scaling {} elements: mode={}, dtype={}",
        data.len(),
        mode,
        dtype
    );

    match (mode, dtype) {
        (ScalingMode::None, DataType::U8) => (Some(data.to_vec()), None),
        (ScalingMode::None, DataType::F32) => {
            (None, Some(data.iter().map(|&v| v as f32).collect()))
        }
        (ScalingMode::Inception, _) => (None, Some(scale_inception(data))),
        (ScalingMode::Vgg, _) => (None, Some(scale_vgg(data, color))),
        (ScalingMode::Imagenet, _) => (None, Some(scale_imagenet(data, color))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn none_u8_is_a_passthrough() {
        let data = [0u8, 127, 255];
        let (u8v, f32v) = scale_pixels(&data, ColorMode::Rgb, ScalingMode::None, DataType::U8);
        assert_eq!(u8v.unwrap(), data);
        assert!(f32v.is_none());
    }

    #[test]
    fn none_f32_is_a_plain_cast() {
        let data = [0u8, 255];
        let (_, f32v) = scale_pixels(&data, ColorMode::Gray, ScalingMode::None, DataType::F32);
        assert_eq!(f32v.unwrap(), vec![0.0, 255.0]);
    }

    #[test]
    fn inception_maps_into_minus_one_one() {
        let data = [0u8, 128, 255];
        let (_, f32v) = scale_pixels(&data, ColorMode::Gray, ScalingMode::Inception, DataType::F32);
        let out = f32v.unwrap();
        assert!(close(out[0], -1.0));
        assert!(close(out[1], 0.0));
        assert!(close(out[2], 255.0 / 128.0 - 1.0));
    }

    #[test]
    fn vgg_subtracts_per_channel_means() {
        let data = [123u8, 117, 104, 0, 0, 0];
        let (_, f32v) = scale_pixels(&data, ColorMode::Rgb, ScalingMode::Vgg, DataType::F32);
        let out = f32v.unwrap();
        assert!(close(out[0], 0.0));
        assert!(close(out[1], 0.0));
        assert!(close(out[2], 0.0));
        assert!(close(out[3], -123.0));
        assert!(close(out[5], -104.0));
    }

    #[test]
    fn imagenet_normalizes_with_mean_and_std() {
        let data = [255u8, 0, 0];
        let (_, f32v) = scale_pixels(&data, ColorMode::Rgb, ScalingMode::Imagenet, DataType::F32);
        let out = f32v.unwrap();
        assert!(close(out[0], (1.0 - 0.485) / 0.229));
        assert!(close(out[1], (0.0 - 0.456) / 0.224));
        assert!(close(out[2], (0.0 - 0.406) / 0.225));
    }
}
