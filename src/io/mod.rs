//! I/O layer for decoding source images and emitting preprocessed tensors.
//! Provides the `reader` around the `image` crate decoders and `writers`
//! for raw tensor dumps, JPEG previews, and metadata sidecars.
pub mod reader;
pub use reader::{ImageMetadata, ImageReader, ReadError};

pub mod writers;
