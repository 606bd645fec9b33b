use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{
    ChannelOrder, ColorMode, DataType, DataTypeArg, OutputFormat, ResizeFilter, ScalingMode,
    TensorLayout,
};

/// Preprocessing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessParams {
    /// Target tensor width in pixels
    pub width: usize,
    /// Target tensor height in pixels
    pub height: usize,
    pub color: ColorMode,
    pub channel_order: ChannelOrder,
    pub layout: TensorLayout,
    pub scaling: ScalingMode,
    pub dtype: DataTypeArg,
    pub filter: ResizeFilter,
    /// If true, preserve aspect ratio and zero-pad to the target box
    pub letterbox: bool,
    pub format: OutputFormat,
    /// If true, write a JSON sidecar describing the raw dump
    pub sidecar: bool,
}

impl Default for PreprocessParams {
    fn default() -> Self {
        Self {
            width: 224,
            height: 224,
            color: ColorMode::Rgb,
            channel_order: ChannelOrder::Rgb,
            layout: TensorLayout::Hwc,
            scaling: ScalingMode::None,
            dtype: DataTypeArg::U8,
            filter: ResizeFilter::Bilinear,
            letterbox: false,
            format: OutputFormat::Raw,
            sidecar: false,
        }
    }
}

impl PreprocessParams {
    /// Validate the parameter combination and resolve the effective element type.
    /// Normalizing scaling modes produce fractional values, so they refuse `U8`.
    pub fn resolved_dtype(&self) -> Result<DataType> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::ZeroSize {
                width: self.width,
                height: self.height,
            });
        }

        match (self.dtype, self.scaling.requires_f32()) {
            (DataTypeArg::U8, true) => Err(Error::InvalidArgument {
                arg: "dtype",
                value: format!("u8 is incompatible with scaling mode {}", self.scaling),
            }),
            (DataTypeArg::U8, false) => Ok(DataType::U8),
            (DataTypeArg::F32, _) => Ok(DataType::F32),
        }
    }
}
