use imageify_pipeline::{encode_file, PipelineConfig};
use imageify_raster::{PngCodec, PngConfig};
use tracing::warn;

use crate::cmd::EncodeArgs;
use crate::exit::{pipeline_error, CliResult, SUCCESS};
use crate::output::{print_report, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    if args.show {
        warn!("--show only applies when decoding");
    }

    let codec = PngCodec::with_config(PngConfig {
        compression: args.compression,
        ..PngConfig::default()
    });
    let report = encode_file(&args.input, &args.output, &codec, &PipelineConfig::default())
        .map_err(pipeline_error)?;

    print_report(&report, format);
    Ok(SUCCESS)
}
