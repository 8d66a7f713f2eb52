use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::{PipelineError, Result, Stage};

/// Check that `path` is an existing regular file this process can open.
pub fn check_readable(path: &Path) -> Result<()> {
    let stage = Stage::ValidateInput;
    let metadata = fs::metadata(path).map_err(|err| PipelineError::read(stage, path, err))?;
    if metadata.is_dir() {
        return Err(PipelineError::NotReadable {
            stage,
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "path is a directory"),
        });
    }
    File::open(path).map_err(|err| PipelineError::read(stage, path, err))?;
    Ok(())
}

/// Check that `path` can be created or overwritten, without touching it.
pub fn check_writable(path: &Path) -> Result<()> {
    let not_writable = |kind: io::ErrorKind, msg: &str| {
        PipelineError::write(Stage::ValidateInput, path, io::Error::new(kind, msg.to_string()))
    };

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            return Err(not_writable(io::ErrorKind::InvalidInput, "path is a directory"));
        }
        Ok(metadata) if metadata.permissions().readonly() => {
            return Err(not_writable(io::ErrorKind::PermissionDenied, "file is read-only"));
        }
        Ok(_) => return Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(PipelineError::write(Stage::ValidateInput, path, err)),
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    match fs::metadata(parent) {
        Ok(metadata) if !metadata.is_dir() => Err(not_writable(
            io::ErrorKind::InvalidInput,
            "parent is not a directory",
        )),
        Ok(metadata) if metadata.permissions().readonly() => Err(not_writable(
            io::ErrorKind::PermissionDenied,
            "parent directory is read-only",
        )),
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(not_writable(
            io::ErrorKind::NotFound,
            "parent directory does not exist",
        )),
        Err(err) => Err(PipelineError::write(Stage::ValidateInput, path, err)),
    }
}
