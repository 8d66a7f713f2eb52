use std::fmt;

use imageify_pipeline::{ErrorKind, PipelineError};

// Exit codes follow sysexits-style ranges.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const NOT_FOUND: i32 = 2;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn kind_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::FileNotFound => NOT_FOUND,
        ErrorKind::FileNotReadable | ErrorKind::FileNotWritable => PERMISSION_DENIED,
        ErrorKind::InvalidFileFormat | ErrorKind::EncodingError | ErrorKind::DecodingError => {
            DATA_INVALID
        }
        ErrorKind::MemoryAllocationError => INTERNAL,
        ErrorKind::UnknownError => FAILURE,
    }
}

/// Render a pipeline failure as `<kind>: <message>` with its exit code.
pub fn pipeline_error(err: PipelineError) -> CliError {
    let kind = err.kind();
    tracing::error!(stage = %err.stage(), kind = %kind, "{err}");
    CliError::new(kind_code(kind), format!("{kind}: {err}"))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use imageify_pipeline::Stage;

    use super::*;

    #[test]
    fn every_kind_has_a_code() {
        assert_eq!(kind_code(ErrorKind::FileNotFound), 2);
        assert_eq!(kind_code(ErrorKind::FileNotReadable), 50);
        assert_eq!(kind_code(ErrorKind::FileNotWritable), 50);
        assert_eq!(kind_code(ErrorKind::InvalidFileFormat), 60);
        assert_eq!(kind_code(ErrorKind::EncodingError), 60);
        assert_eq!(kind_code(ErrorKind::DecodingError), 60);
        assert_eq!(kind_code(ErrorKind::MemoryAllocationError), 125);
        assert_eq!(kind_code(ErrorKind::UnknownError), 1);
    }

    #[test]
    fn pipeline_error_message_leads_with_kind() {
        let err = pipeline_error(PipelineError::NotFound {
            stage: Stage::ValidateInput,
            path: PathBuf::from("testFile.txt"),
        });
        assert_eq!(err.code, NOT_FOUND);
        assert_eq!(err.message, "File Not Found: testFile.txt: no such file");
    }
}
