#![doc = r#"
TENSORPREP — a fast image-to-tensor preprocessor for ML inference inputs.

This crate turns ordinary raster images (JPEG, PNG) into raw model-input
tensors: decoded, resized to an exact target resolution, optionally
normalized, laid out as HWC or CHW, and dumped as headerless bytes ready to
feed an inference runtime. It powers the TENSORPREP CLI and can be embedded
in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on top
of a working MVP used by the CLI and is robust, but may evolve as the crate
stabilizes. Breaking changes can occur.

Add dependency
--------------
```toml
[dependencies]
tensorprep = "0.1"
```

Quick start: preprocess an image to a file
------------------------------------------
```rust,no_run
use std::path::Path;
use tensorprep::{
    preprocess_image_to_path,
    PreprocessParams,
    ChannelOrder, ColorMode, DataTypeArg, OutputFormat, ResizeFilter, ScalingMode, TensorLayout,
};

fn main() -> tensorprep::Result<()> {
    let params = PreprocessParams {
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
    };

    preprocess_image_to_path(
        Path::new("/data/mug.jpg"),
        Path::new("/out/mug_input.bin"),
        &params,
    )
}
```

The defaults reproduce exactly that: a 224×224 bilinear resize of the RGB
plane, serialized as headerless HWC u8 bytes, so
`PreprocessParams::default()` is usually all you need.

Preprocess in-memory to `PreprocessedTensor`
--------------------------------------------
```rust,no_run
use std::path::Path;
use tensorprep::{
    preprocess_image_to_buffer,
    PreprocessParams, ScalingMode, TensorLayout, DataTypeArg,
};

fn main() -> tensorprep::Result<()> {
    let params = PreprocessParams {
        layout: TensorLayout::Chw,
        scaling: ScalingMode::Imagenet,
        dtype: DataTypeArg::F32,
        ..Default::default()
    };

    let tensor = preprocess_image_to_buffer(Path::new("/data/mug.jpg"), &params)?;

    // Feed `tensor.data_f32` to your inference runtime, or serialize with
    // `tensor.into_bytes()`; `tensor.metadata` records the source image.
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use tensorprep::{process_directory_to_path, PreprocessParams};

fn main() -> tensorprep::Result<()> {
    let params = PreprocessParams::default();

    let report = process_directory_to_path(
        Path::new("/data/images"),
        Path::new("/out"),
        &params,
        true, // continue_on_error
    )?;

    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `tensorprep::Result<T>`; match on
`tensorprep::Error` to handle specific cases, e.g. reader or argument errors.

```rust,no_run
use std::path::Path;
use tensorprep::{preprocess_image_to_path, Error, PreprocessParams};

fn main() {
    let params = PreprocessParams::default();

    match preprocess_image_to_path(Path::new("/bad/path.jpg"), Path::new("/out.bin"), &params) {
        Ok(()) => {}
        Err(Error::Read(e)) => eprintln!("Reader error: {e}"),
        Err(Error::InvalidArgument { arg, value }) => eprintln!("Bad argument {arg}: {value}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `ScalingMode`, `TensorLayout`, `ResizeFilter`).
- [`io`] — image reader and raw/JPEG/sidecar writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::PreprocessParams;
pub use error::{Error, Result};
pub use types::{
    ChannelOrder, ColorMode, DataType, DataTypeArg, OutputFormat, ResizeFilter, ScalingMode,
    TensorLayout,
};

// Readers
pub use io::reader::{ImageMetadata, ImageReader, ReadError};

// Selected writer helpers (keep low-level sidecar helpers public)
pub use io::writers::metadata::{TensorSidecar, build_tensor_sidecar, create_raw_metadata_sidecar};

// High-level API re-exports
pub use api::{
    BatchReport, PreprocessedTensor, iterate_image_files, preprocess_image_to_buffer,
    preprocess_image_to_path, process_directory_to_path,
};
