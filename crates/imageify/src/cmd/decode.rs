use imageify_pipeline::{decode_file, PipelineConfig};
use imageify_raster::PngCodec;

use crate::cmd::DecodeArgs;
use crate::exit::{pipeline_error, CliResult, SUCCESS};
use crate::output::{print_raw, print_report, OutputFormat};

/// With `--show` the payload goes to stdout in place of the report.
pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let outcome = decode_file(
        &args.input,
        &args.output,
        &PngCodec::new(),
        &PipelineConfig::default(),
    )
    .map_err(pipeline_error)?;

    if args.show {
        print_raw(&outcome.payload);
    } else {
        print_report(&outcome.report, format);
    }
    Ok(SUCCESS)
}
