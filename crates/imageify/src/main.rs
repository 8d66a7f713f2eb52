mod cmd;
mod config;
mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;

use crate::cmd::{Command, CompressionArg, ModeArgs};
use crate::config::Defaults;
use crate::exit::{SUCCESS, USAGE};
use crate::logging::LogArgs;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "imageify",
    version,
    about = "Store any file losslessly inside an RGBA PNG image",
    arg_required_else_help = true
)]
struct Cli {
    #[command(flatten)]
    mode: ModeArgs,

    /// Output path. Default: outputImage.png (encode) or outputText.txt (decode).
    #[arg(short, long, value_name = "PATH", env = "IMAGEIFY_OUTPUT")]
    output: Option<PathBuf>,

    /// Print the decoded payload to stdout.
    #[arg(short, long)]
    show: bool,

    /// PNG compression effort.
    #[arg(long, value_name = "LEVEL", default_value = "default")]
    compression: CompressionArg,

    /// Report format on stdout.
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    #[command(flatten)]
    logs: LogArgs,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => SUCCESS,
                _ => USAGE,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    cli.logs.init();

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = Command::resolve(
        cli.mode,
        cli.output,
        cli.show,
        cli.compression,
        &Defaults::default(),
    )
    .and_then(|command| cmd::run(command, format));

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("imageify").chain(args.iter().copied()))
    }

    #[test]
    fn bare_encode_flag_uses_default_input() {
        let cli = parse(&["-e"]).expect("-e alone should parse");
        assert_eq!(cli.mode.encode, Some(PathBuf::from("testFile.txt")));
        assert!(cli.mode.decode.is_none());
    }

    #[test]
    fn bare_decode_flag_uses_default_input() {
        let cli = parse(&["-d", "-s"]).expect("-d -s should parse");
        assert_eq!(cli.mode.decode, Some(PathBuf::from("outputImage.png")));
        assert!(cli.show);
    }

    #[test]
    fn encode_with_paths() {
        let cli = parse(&["-e", "in.bin", "-o", "out.png", "--compression", "best"])
            .expect("encode args should parse");
        assert_eq!(cli.mode.encode, Some(PathBuf::from("in.bin")));
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.compression, CompressionArg::Best);
    }

    #[test]
    fn rejects_encode_and_decode_together() {
        let err = parse(&["-e", "a", "-d", "b"]).expect_err("both modes should fail");
        assert_eq!(err.kind(), ClapErrorKind::ArgumentConflict);
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse(&["-e", "-x"]).expect_err("unknown flag should fail");
        assert_eq!(err.kind(), ClapErrorKind::UnknownArgument);
    }

    #[test]
    fn missing_mode_shows_help() {
        let err = parse(&[]).expect_err("no args should fail");
        assert_eq!(
            err.kind(),
            ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn help_flag_is_not_a_failure() {
        let err = parse(&["-h"]).expect_err("help short-circuits parsing");
        assert_eq!(err.kind(), ClapErrorKind::DisplayHelp);
    }
}
