//! Shared types and enums used across TENSORPREP.
//! Includes `ColorMode`, `ChannelOrder`, `TensorLayout`, `ScalingMode`,
//! data types (`DataType`, `DataTypeArg`), `ResizeFilter`, and `OutputFormat`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    Rgb,
    Gray,
}

impl ColorMode {
    /// Interleaved channel count of a decoded plane in this mode
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Gray => 1,
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColorMode::Rgb => "Rgb",
            ColorMode::Gray => "Gray",
        };
        write!(f, "{}", s)
    }
}

/// Channel order of the interleaved output tensor. Caffe-lineage models
/// expect BGR; everything else wants RGB. Ignored for grayscale.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

impl std::fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChannelOrder::Rgb => "Rgb",
            ChannelOrder::Bgr => "Bgr",
        };
        write!(f, "{}", s)
    }
}

/// Element ordering of the serialized tensor: HWC (channels-last, NHWC)
/// or CHW (channels-first, NCHW).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum TensorLayout {
    Hwc,
    Chw,
}

impl std::fmt::Display for TensorLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TensorLayout::Hwc => "Hwc",
            TensorLayout::Chw => "Chw",
        };
        write!(f, "{}", s)
    }
}

/// Pixel normalization applied after resizing. Every mode except `None`
/// produces f32 elements.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ScalingMode {
    None,
    Inception,
    Vgg,
    Imagenet,
}

impl ScalingMode {
    /// Whether this mode requires floating-point output elements
    pub fn requires_f32(&self) -> bool {
        !matches!(self, ScalingMode::None)
    }
}

impl std::fmt::Display for ScalingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ScalingMode::None => "None",
            ScalingMode::Inception => "Inception",
            ScalingMode::Vgg => "Vgg",
            ScalingMode::Imagenet => "Imagenet",
        };
        write!(f, "{}", s)
    }
}

/// Resampling kernel used for resizing
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ResizeFilter {
    Nearest,
    Bilinear,
    Cubic,
    Lanczos3,
}

impl std::fmt::Display for ResizeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ResizeFilter::Nearest => "Nearest",
            ResizeFilter::Bilinear => "Bilinear",
            ResizeFilter::Cubic => "Cubic",
            ResizeFilter::Lanczos3 => "Lanczos3",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum DataTypeArg {
    U8,
    F32,
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, serde::Serialize, serde::Deserialize,
)]
pub enum DataType {
    U8,
    F32,
}

impl DataType {
    /// Serialized size of one element in bytes
    pub fn element_size(&self) -> usize {
        match self {
            DataType::U8 => 1,
            DataType::F32 => 4,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DataType::U8 => "U8",
            DataType::F32 => "F32",
        };
        write!(f, "{}", s)
    }
}

#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Debug,
    ValueEnum,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum OutputFormat {
    Raw,
    Jpeg, // Lossy, inspection only
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OutputFormat::Raw => "Raw",
            OutputFormat::Jpeg => "Jpeg",
        };
        write!(f, "{}", s)
    }
}
