use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

/// An output written beside its destination and moved into place on
/// [`OutputFile::commit`].
///
/// Bytes go to a hidden sibling file first. A run that fails before commit
/// removes that file and leaves whatever was already at the destination
/// untouched. A process killed before commit can leave the sibling behind,
/// since no cleanup code runs in that case.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    staging: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl OutputFile {
    /// Start writing an output that will replace `path` on commit.
    pub fn create(path: &Path) -> io::Result<Self> {
        let staging = staging_path(path)?;
        let file = File::create(&staging)?;
        Ok(Self {
            path: path.to_path_buf(),
            staging,
            writer: Some(BufWriter::new(file)),
        })
    }

    /// Final destination.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush buffered data to disk, then move it over the destination.
    pub fn commit(mut self) -> io::Result<()> {
        let Some(writer) = self.writer.take() else {
            return Ok(());
        };
        let result = writer
            .into_inner()
            .map_err(|err| err.into_error())
            .and_then(|file| file.sync_all())
            .and_then(|()| fs::rename(&self.staging, &self.path));
        if result.is_err() {
            self.discard();
        }
        result
    }

    fn discard(&mut self) {
        self.writer = None;
        if let Err(err) = fs::remove_file(&self.staging) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.staging.display(), error = %err, "failed to remove staged output");
            }
        }
    }

    fn writer(&mut self) -> io::Result<&mut BufWriter<File>> {
        self.writer
            .as_mut()
            .ok_or_else(|| io::Error::other("output already closed"))
    }
}

fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(format!(".imageify-{}.part", std::process::id()));
    Ok(path.with_file_name(staged))
}

impl Write for OutputFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer()?.flush()
    }
}

impl Drop for OutputFile {
    fn drop(&mut self) {
        if self.writer.is_some() {
            self.discard();
        }
    }
}
