use crate::core::params::PreprocessParams;
use crate::core::processing::layout::{hwc_to_chw_f32, hwc_to_chw_u8, swap_channel_order};
use crate::core::processing::resize::resize_image_data;
use crate::core::processing::scale::scale_pixels;
use crate::types::{ChannelOrder, ColorMode, DataType, TensorLayout};

/// Final element buffers produced by the pixel pipeline. Exactly one of
/// `data_u8`/`data_f32` is `Some`; `resized_hwc` keeps the resized,
/// pre-normalization plane in RGB order for previews.
#[derive(Debug, Clone)]
pub struct TensorBuffers {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub data_u8: Option<Vec<u8>>,
    pub data_f32: Option<Vec<f32>>,
    pub resized_hwc: Vec<u8>,
}

/// Run the full pixel pipeline over a decoded interleaved plane:
/// resize, channel order, scaling, layout.
pub fn preprocess_pixel_pipeline(
    plane: &[u8],
    original_cols: usize,
    original_rows: usize,
    params: &PreprocessParams,
    dtype: DataType,
) -> Result<TensorBuffers, Box<dyn std::error::Error>> {
    let channels = params.color.channels();

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

    let mut ordered = resized.clone();
    if params.color == ColorMode::Rgb && params.channel_order == ChannelOrder::Bgr {
        swap_channel_order(&mut ordered, channels);
    }

    let (scaled_u8, scaled_f32) = scale_pixels(&ordered, params.color, params.scaling, dtype);

    let (data_u8, data_f32) = match params.layout {
        TensorLayout::Hwc => (scaled_u8, scaled_f32),
        TensorLayout::Chw => (
            scaled_u8
                .map(|v| hwc_to_chw_u8(v, rows, cols, channels))
                .transpose()?,
            scaled_f32
                .map(|v| hwc_to_chw_f32(v, rows, cols, channels))
                .transpose()?,
        ),
    };

    Ok(TensorBuffers {
        width: cols,
        height: rows,
        channels,
        data_u8,
        data_f32,
        resized_hwc: resized,
    })
}
