use chrono;
use image::DynamicImage;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use tracing::warn;

use crate::types::ColorMode;

/// Errors encountered when reading image files
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Unrecognized image format: {0}")]
    UnsupportedFormat(String),
    #[error("Image has no pixels: {0}")]
    EmptyImage(String),
}

/// Metadata captured while decoding the source image
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub source_path: PathBuf,
    /// Container format the decoder detected (e.g. "jpeg", "png")
    pub container_format: String,
    pub width: usize,
    pub height: usize,
    /// Color type of the decoded pixels as reported by the decoder
    pub color_type: String,
    pub file_size_bytes: u64,
    pub decode_timestamp: String,
}

/// Reader for raster image files backed by the `image` crate decoders
#[derive(Debug)]
pub struct ImageReader {
    pub source_path: PathBuf,
    pub metadata: ImageMetadata,
    image: DynamicImage,
}

impl ImageReader {
    /// Open and decode an image file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReadError> {
        Self::open_with_options(path, None)
    }

    /// Open and decode an image file with an optional color mode hint.
    /// The hint only affects logging; plane conversion happens on access.
    pub fn open_with_options<P: AsRef<Path>>(
        path: P,
        color_mode: Option<ColorMode>,
    ) -> Result<Self, ReadError> {
        let source_path = path.as_ref().to_path_buf();
        let file_size_bytes = fs::metadata(&source_path)?.len();

        let reader = image::ImageReader::open(&source_path)?.with_guessed_format()?;
        let container_format = match reader.format() {
            Some(fmt) => format!("{:?}", fmt).to_lowercase(),
            None => {
                return Err(ReadError::UnsupportedFormat(
                    source_path.display().to_string(),
                ));
            }
        };

        let image = reader.decode()?;
        if image.width() == 0 || image.height() == 0 {
            return Err(ReadError::EmptyImage(source_path.display().to_string()));
        }

        let metadata = ImageMetadata {
            source_path: source_path.clone(),
            container_format,
            width: image.width() as usize,
            height: image.height() as usize,
            color_type: format!("{:?}", image.color()),
            file_size_bytes,
            decode_timestamp: chrono::Utc::now().to_rfc3339(),
        };

        info!(
            "Decoded {:?}: {}x{} {} ({} bytes on disk)",
            source_path, metadata.width, metadata.height, metadata.color_type, file_size_bytes
        );
        if let Some(mode) = color_mode {
            info!("Requested color mode: {}", mode);
        }

        Ok(Self {
            source_path,
            metadata,
            image,
        })
    }

    /// Open an image, downgrading decode failures to `Ok(None)` with a warning.
    /// Used by batch mode to step over non-image files in a directory.
    pub fn open_with_warnings<P: AsRef<Path>>(
        path: P,
        color_mode: Option<ColorMode>,
    ) -> Result<Option<Self>, ReadError> {
        match Self::open_with_options(path.as_ref(), color_mode) {
            Ok(reader) => Ok(Some(reader)),
            Err(e @ (ReadError::Decode(_) | ReadError::UnsupportedFormat(_))) => {
                warn!("Skipping undecodable file {:?}: {}", path.as_ref(), e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub fn width(&self) -> usize {
        self.metadata.width
    }

    pub fn height(&self) -> usize {
        self.metadata.height
    }

    /// Interleaved RGB plane of the decoded image. Alpha, if present, is dropped.
    pub fn rgb_data(&self) -> Vec<u8> {
        self.image.to_rgb8().into_raw()
    }

    /// Single-plane luma conversion of the decoded image
    pub fn gray_data(&self) -> Vec<u8> {
        self.image.to_luma8().into_raw()
    }

    pub fn metadata(&self) -> &ImageMetadata {
        &self.metadata
    }
}
