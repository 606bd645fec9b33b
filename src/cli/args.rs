use clap::Parser;
use std::path::PathBuf;

use tensorprep::types::OutputFormat;
use tensorprep::{ChannelOrder, ColorMode, DataTypeArg, ResizeFilter, ScalingMode, TensorLayout};

#[derive(Parser)]
#[command(name = "tensorprep", version, about = "TENSORPREP CLI")]
pub struct CliArgs {
    /// Input image file (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Input directory containing image files (batch mode)
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Output filename (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output directory for batch processing (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format (raw tensor bytes or jpeg preview)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Raw)]
    pub format: OutputFormat,

    /// Target tensor width in pixels
    #[arg(long, default_value_t = 224)]
    pub width: usize,

    /// Target tensor height in pixels
    #[arg(long, default_value_t = 224)]
    pub height: usize,

    /// Color mode of the tensor (rgb or gray)
    #[arg(long, value_enum, default_value_t = ColorMode::Rgb)]
    pub color: ColorMode,

    /// Channel order of the interleaved tensor (rgb or bgr)
    #[arg(long, value_enum, default_value_t = ChannelOrder::Rgb)]
    pub channel_order: ChannelOrder,

    /// Tensor element ordering (hwc for NHWC models, chw for NCHW)
    #[arg(long, value_enum, default_value_t = TensorLayout::Hwc)]
    pub layout: TensorLayout,

    /// Pixel scaling mode (none, inception, vgg, imagenet)
    #[arg(short = 's', long, value_enum, default_value_t = ScalingMode::None)]
    pub scaling: ScalingMode,

    /// Output element type (u8 or f32); scaling modes other than none need f32
    #[arg(long, value_enum, default_value_t = DataTypeArg::U8)]
    pub dtype: DataTypeArg,

    /// Resampling filter (nearest, bilinear, cubic, lanczos3)
    #[arg(long, value_enum, default_value_t = ResizeFilter::Bilinear)]
    pub filter: ResizeFilter,

    /// Preserve aspect ratio and zero-pad to the target box instead of
    /// stretching to it
    #[arg(long, default_value_t = false)]
    pub letterbox: bool,

    /// Write a JSON sidecar describing the raw dump (shape, dtype, provenance)
    #[arg(long, default_value_t = false)]
    pub sidecar: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,

    /// Batch mode: continue processing other files when encountering
    /// undecodable inputs
    #[arg(long, default_value_t = false)]
    pub batch: bool,
}
