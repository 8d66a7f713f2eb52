use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use imageify_frame::FrameError;
use imageify_raster::RasterError;
use serde::Serialize;

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    FileNotFound,
    FileNotReadable,
    FileNotWritable,
    InvalidFileFormat,
    EncodingError,
    DecodingError,
    MemoryAllocationError,
    UnknownError,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::FileNotFound => "File Not Found",
            ErrorKind::FileNotReadable => "File Not Readable",
            ErrorKind::FileNotWritable => "File Not Writable",
            ErrorKind::InvalidFileFormat => "Invalid File Format",
            ErrorKind::EncodingError => "Encoding Error",
            ErrorKind::DecodingError => "Decoding Error",
            ErrorKind::MemoryAllocationError => "Memory Allocation Error",
            ErrorKind::UnknownError => "Unknown Error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline states, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stage {
    ValidateInput,
    BuildFrame,
    PlanDimensions,
    PadFrame,
    PackPixels,
    EmitRaster,
    LoadRaster,
    UnpackPixels,
    ParseFrame,
    EmitPayload,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::ValidateInput => "ValidateInput",
            Stage::BuildFrame => "BuildFrame",
            Stage::PlanDimensions => "PlanDimensions",
            Stage::PadFrame => "PadFrame",
            Stage::PackPixels => "PackPixels",
            Stage::EmitRaster => "EmitRaster",
            Stage::LoadRaster => "LoadRaster",
            Stage::UnpackPixels => "UnpackPixels",
            Stage::ParseFrame => "ParseFrame",
            Stage::EmitPayload => "EmitPayload",
        }
    }

    /// True for states that only run on the decode path.
    pub fn is_decode(self) -> bool {
        matches!(
            self,
            Stage::LoadRaster | Stage::UnpackPixels | Stage::ParseFrame | Stage::EmitPayload
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort an encode or decode run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The input path does not exist.
    #[error("{}: no such file", .path.display())]
    NotFound { stage: Stage, path: PathBuf },

    /// The input exists but cannot be read.
    #[error("cannot read {}: {source}", .path.display())]
    NotReadable {
        stage: Stage,
        path: PathBuf,
        source: io::Error,
    },

    /// The output cannot be created or written.
    #[error("cannot write {}: {source}", .path.display())]
    NotWritable {
        stage: Stage,
        path: PathBuf,
        source: io::Error,
    },

    /// An I/O failure that fits no other category.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        stage: Stage,
        path: PathBuf,
        source: io::Error,
    },

    /// Framing, planning, or packing failed.
    #[error("{stage}: {source}")]
    Frame { stage: Stage, source: FrameError },

    /// The raster codec failed.
    #[error("{stage}: {source}")]
    Raster { stage: Stage, source: RasterError },

    /// The payload exceeds the configured limit.
    #[error("{stage}: payload too large ({size} bytes, max {max})")]
    PayloadLimit {
        stage: Stage,
        size: usize,
        max: usize,
    },
}

impl PipelineError {
    /// The pipeline state that failed.
    pub fn stage(&self) -> Stage {
        match self {
            PipelineError::NotFound { stage, .. }
            | PipelineError::NotReadable { stage, .. }
            | PipelineError::NotWritable { stage, .. }
            | PipelineError::Io { stage, .. }
            | PipelineError::Frame { stage, .. }
            | PipelineError::Raster { stage, .. }
            | PipelineError::PayloadLimit { stage, .. } => *stage,
        }
    }

    /// Map onto the user-facing taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::NotFound { .. } => ErrorKind::FileNotFound,
            PipelineError::NotReadable { .. } => ErrorKind::FileNotReadable,
            PipelineError::NotWritable { .. } => ErrorKind::FileNotWritable,
            PipelineError::Io { .. } => ErrorKind::UnknownError,
            PipelineError::Frame { stage, source } => frame_kind(*stage, source),
            PipelineError::Raster { stage, source } => match source {
                RasterError::NotPng | RasterError::UnsupportedLayout { .. } => {
                    ErrorKind::InvalidFileFormat
                }
                RasterError::Encode(_) => ErrorKind::EncodingError,
                RasterError::Decode(_) => ErrorKind::DecodingError,
                RasterError::Io(_) if stage.is_decode() => ErrorKind::FileNotReadable,
                RasterError::Io(_) => ErrorKind::FileNotWritable,
                RasterError::Grid(err) => frame_kind(*stage, err),
            },
            PipelineError::PayloadLimit { stage, .. } => direction_kind(*stage),
        }
    }

    pub(crate) fn read(stage: Stage, path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => PipelineError::NotFound { stage, path },
            io::ErrorKind::PermissionDenied | io::ErrorKind::IsADirectory => {
                PipelineError::NotReadable {
                    stage,
                    path,
                    source,
                }
            }
            _ => PipelineError::Io {
                stage,
                path,
                source,
            },
        }
    }

    pub(crate) fn write(stage: Stage, path: &Path, source: io::Error) -> Self {
        PipelineError::NotWritable {
            stage,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn frame(stage: Stage) -> impl FnOnce(FrameError) -> Self {
        move |source| PipelineError::Frame { stage, source }
    }

    pub(crate) fn raster(stage: Stage) -> impl FnOnce(RasterError) -> Self {
        move |source| PipelineError::Raster { stage, source }
    }
}

fn frame_kind(stage: Stage, err: &FrameError) -> ErrorKind {
    match err {
        FrameError::Allocation { .. } => ErrorKind::MemoryAllocationError,
        _ => direction_kind(stage),
    }
}

fn direction_kind(stage: Stage) -> ErrorKind {
    if stage.is_decode() {
        ErrorKind::DecodingError
    } else {
        ErrorKind::EncodingError
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
