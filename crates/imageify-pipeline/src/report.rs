use std::path::{Path, PathBuf};
use std::time::Duration;

use imageify_frame::FrameLayout;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// Summary of one completed encode or decode run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub direction: Direction,
    pub codec: &'static str,
    pub input: PathBuf,
    pub output: PathBuf,
    pub payload_bytes: usize,
    pub width: u32,
    pub height: u32,
    pub capacity_bytes: usize,
    pub padding_bytes: usize,
    pub elapsed_ms: u64,
}

impl Report {
    pub(crate) fn new(
        direction: Direction,
        codec: &'static str,
        input: &Path,
        output: &Path,
        layout: &FrameLayout,
        elapsed: Duration,
    ) -> Self {
        Self {
            direction,
            codec,
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            payload_bytes: layout.payload_len,
            width: layout.dimensions.width,
            height: layout.dimensions.height,
            capacity_bytes: layout.capacity,
            padding_bytes: layout.padding(),
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }
}
