use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Target dimensions must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: usize, height: usize },

    #[error("dtype u8 is incompatible with scaling mode {scaling}; use --dtype f32")]
    DtypeScalingMismatch { scaling: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image reader error: {0}")]
    Read(#[from] tensorprep::io::ReadError),
}
