//! File system utilities for the AI Control Plane project generator.
//!
//! These are the building blocks the generation step will use once it is
//! populated with file contents: write a text file with its parent
//! directories guaranteed to exist, and write a script file that ends up
//! executable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from filesystem helper operations.
///
/// Each variant carries the path the operation was acting on so callers can
/// report which file the generator tripped over.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to create directory: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to set permissions for: {path}")]
    SetPermissions {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// The path the failing operation was acting on.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::SetPermissions { path, .. } => path,
        }
    }
}

/// Result alias for filesystem helper operations.
pub type Result<T> = std::result::Result<T, FsError>;

/// Ensure a directory exists, creating missing ancestors.
///
/// A non-directory occupying the path is reported as a `CreateDir` error at
/// that path, not deferred to whatever touches the path next.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|e| FsError::CreateDir {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    Ok(())
}

/// Write UTF-8 text content to a file, overwriting any existing file.
///
/// Missing parent directories are created first. The file handle is scoped
/// inside `fs::write`, so it is closed on every exit path.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::write(path, content).map_err(|e| FsError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write UTF-8 text content to a file and mark it executable (mode 0755).
///
/// On non-Unix platforms the permission step is a no-op.
pub fn write_executable(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    write_file(path, content)?;
    set_permissions(path, 0o755)
}

/// Set file permission bits.
#[cfg(unix)]
pub fn set_permissions(path: impl AsRef<Path>, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let path = path.as_ref();
    let permissions = fs::Permissions::from_mode(mode);
    fs::set_permissions(path, permissions).map_err(|e| FsError::SetPermissions {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Set file permission bits (no-op on Windows).
#[cfg(not(unix))]
pub fn set_permissions(_path: impl AsRef<Path>, _mode: u32) -> Result<()> {
    Ok(())
}
