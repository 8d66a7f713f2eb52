use std::path::PathBuf;

use clap::{Args, ValueEnum};
use imageify_raster::CompressionLevel;

use crate::config::{self, Defaults};
use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;

/// Exactly one of `-e` and `-d`.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ModeArgs {
    /// Encode a file into an image.
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = config::ENCODE_INPUT
    )]
    pub encode: Option<PathBuf>,

    /// Decode an image back into a file.
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = config::DECODE_INPUT
    )]
    pub decode: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    Fast,
    Default,
    Best,
}

impl From<CompressionArg> for CompressionLevel {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Fast => CompressionLevel::Fast,
            CompressionArg::Default => CompressionLevel::Default,
            CompressionArg::Best => CompressionLevel::Best,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Encode(EncodeArgs),
    Decode(DecodeArgs),
}

#[derive(Debug, PartialEq, Eq)]
pub struct EncodeArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub compression: CompressionLevel,
    pub show: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DecodeArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub show: bool,
}

impl Command {
    /// Fill in default paths for whichever mode was selected.
    pub fn resolve(
        mode: ModeArgs,
        output: Option<PathBuf>,
        show: bool,
        compression: CompressionArg,
        defaults: &Defaults,
    ) -> CliResult<Self> {
        match (mode.encode, mode.decode) {
            (Some(input), None) => Ok(Command::Encode(EncodeArgs {
                input,
                output: output.unwrap_or_else(|| defaults.encode_output.clone()),
                compression: compression.into(),
                show,
            })),
            (None, Some(input)) => Ok(Command::Decode(DecodeArgs {
                input,
                output: output.unwrap_or_else(|| defaults.decode_output.clone()),
                show,
            })),
            (Some(_), Some(_)) => Err(CliError::new(USAGE, "-e and -d cannot be used together")),
            (None, None) => Err(CliError::new(USAGE, "one of -e or -d is required")),
        }
    }
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Encode(args) => encode::run(args, format),
        Command::Decode(args) => decode::run(args, format),
    }
}
