use tracing::info;

use tensorprep::api::{preprocess_image_to_path, process_directory_to_path};
use tensorprep::core::params::PreprocessParams;
use tensorprep::Error;

use super::args::CliArgs;
use super::errors::AppError;

fn params_from_args(args: &CliArgs) -> PreprocessParams {
    PreprocessParams {
        width: args.width,
        height: args.height,
        color: args.color,
        channel_order: args.channel_order,
        layout: args.layout,
        scaling: args.scaling,
        dtype: args.dtype,
        filter: args.filter,
        letterbox: args.letterbox,
        format: args.format,
        sidecar: args.sidecar,
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let params = params_from_args(&args);

    // Surface argument mistakes before touching the filesystem
    if let Err(e) = params.resolved_dtype() {
        return Err(match e {
            Error::ZeroSize { width, height } => AppError::ZeroSize { width, height }.into(),
            Error::InvalidArgument { .. } => AppError::DtypeScalingMismatch {
                scaling: params.scaling.to_string(),
            }
            .into(),
            other => Box::<dyn std::error::Error>::from(other),
        });
    }

    let batch_mode = args.batch || args.input_dir.is_some();

    if batch_mode {
        let input_dir = args.input_dir.ok_or(AppError::MissingArgument {
            arg: "--input-dir".to_string(),
        })?;
        let output_dir = args.output_dir.ok_or(AppError::MissingArgument {
            arg: "--output-dir".to_string(),
        })?;

        info!("Starting batch preprocessing from directory: {:?}", input_dir);
        info!("Output directory: {:?}", output_dir);

        let report = process_directory_to_path(&input_dir, &output_dir, &params, true)?;

        info!("Batch preprocessing complete!");
        info!("Processed: {}", report.processed);
        info!("Skipped: {}", report.skipped);
        info!("Errors: {}", report.errors);
    } else {
        let input = args.input.ok_or(AppError::MissingArgument {
            arg: "--input".to_string(),
        })?;
        let output = args.output.ok_or(AppError::MissingArgument {
            arg: "--output".to_string(),
        })?;

        preprocess_image_to_path(&input, &output, &params)?;
        info!("Successfully processed: {:?} -> {:?}\n", input, output);
    }

    Ok(())
}
