//! Output writers: headerless raw tensor dumps, JPEG previews of the
//! resized image, and JSON metadata sidecars describing the tensor.
pub mod jpeg;
pub mod metadata;
pub mod raw;
