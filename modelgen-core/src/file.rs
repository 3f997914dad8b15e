use std::path::{Path, PathBuf};

use crate::{
    checksum::apply_checksum,
    error::{Error, Result},
};

/// Trait for types that represent a generated source file
pub trait GeneratedFile {
    /// Get the file path relative to the output directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content, including the checksum placeholder
    fn render(&self) -> String;

    /// Checksum the rendered content and write it below `base`
    fn write(&self, base: &Path) -> Result<WrittenFile> {
        write_with_checksum(&self.path(base), &self.render())
    }
}

/// Outcome of a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub checksum: i32,
}

impl WrittenFile {
    /// Size of the written file in kB, rounded up
    pub fn size_kb(&self) -> usize {
        self.bytes.div_ceil(1024)
    }
}

/// Substitute the checksum placeholder in `content` and write the result to
/// `path`, replacing any existing file.
pub fn write_with_checksum(path: &Path, content: &str) -> Result<WrittenFile> {
    let (content, checksum) =
        apply_checksum(content).map_err(|count| Error::ChecksumPlaceholder {
            path: path.to_path_buf(),
            count,
        })?;

    if let Err(source) = write_file(path, &content) {
        tracing::error!(path = %path.display(), error = %source, "failed to write generated file");
        return Err(Error::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let written = WrittenFile {
        path,
        bytes: content.len(),
        checksum,
    };
    tracing::info!(
        path = %written.path.display(),
        size_kb = written.size_kb(),
        "wrote {}",
        written.path.display()
    );
    Ok(written)
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}
