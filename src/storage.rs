//! File storage behind the `/files` endpoint.
//!
//! Files are opaque byte blobs addressed by a relative name under a single
//! root directory. Names that could escape the root are rejected before
//! any filesystem call is made.
//!
//! Writes are not coordinated: two connections writing the same name at
//! once may interleave, and the last one to finish wins.

use std::fmt;
use std::path::{Component, Path, PathBuf};

#[derive(Debug)]
pub enum StorageError {
    /// Name is empty or would resolve outside the root.
    InvalidName(String),
    NotFound,
    Io(std::io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidName(name) => write!(f, "invalid file name: {:?}", name),
            StorageError::NotFound => write!(f, "file not found"),
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound
        } else {
            StorageError::Io(e)
        }
    }
}

/// Checks that `name` is a relative path made only of normal components.
pub fn validate_name(name: &str) -> Result<&Path, StorageError> {
    let path = Path::new(name);

    let valid = !name.is_empty()
        && !name.contains('\\')
        && path.components().all(|c| matches!(c, Component::Normal(_)));

    if valid {
        Ok(path)
    } else {
        Err(StorageError::InvalidName(name.to_string()))
    }
}

/// Filesystem-backed storage rooted at a directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a name to its path under the root.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StorageError> {
        Ok(self.root.join(validate_name(name)?))
    }

    pub async fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.resolve(name)?;
        Ok(tokio::fs::read(&path).await?)
    }

    /// Creates or truncates the named file and writes `contents`.
    ///
    /// Missing parent directories are not created.
    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), StorageError> {
        let path = self.resolve(name)?;
        tokio::fs::write(&path, contents)
            .await
            .map_err(StorageError::Io)
    }
}
