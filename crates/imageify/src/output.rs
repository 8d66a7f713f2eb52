use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use imageify_pipeline::{Direction, Report};

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_report(report: &Report, format: OutputFormat) {
    println!("{}", render_report(report, format));
}

fn render_report(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["DIRECTION", "INPUT", "OUTPUT", "PAYLOAD", "GRID", "PADDING"])
                .add_row(vec![
                    direction_name(report.direction).to_string(),
                    report.input.display().to_string(),
                    report.output.display().to_string(),
                    report.payload_bytes.to_string(),
                    format!("{}x{}", report.width, report.height),
                    report.padding_bytes.to_string(),
                ]);
            table.to_string()
        }
        OutputFormat::Pretty => format!(
            "{} {} -> {} payload={}B grid={}x{} padding={}B codec={} elapsed={}ms",
            direction_name(report.direction),
            report.input.display(),
            report.output.display(),
            report.payload_bytes,
            report.width,
            report.height,
            report.padding_bytes,
            report.codec,
            report.elapsed_ms
        ),
    }
}

/// Write payload bytes to stdout unchanged.
pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Encode => "encode",
        Direction::Decode => "decode",
    }
}
