//! Disk-backed avatar storage
//!
//! Uploads land in a temporary directory first; saving moves the file into
//! the permanent uploads directory and returns its file name.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::domain::ports::StorageProvider;
use crate::error::StorageError;

pub struct DiskStorageProvider {
    tmp_dir: PathBuf,
    uploads_dir: PathBuf,
}

impl DiskStorageProvider {
    pub fn new(tmp_dir: impl Into<PathBuf>, uploads_dir: impl Into<PathBuf>) -> Self {
        Self {
            tmp_dir: tmp_dir.into(),
            uploads_dir: uploads_dir.into(),
        }
    }
}

/// Only bare file names are accepted; anything that could escape the
/// configured directories is rejected
fn validate_file_name(file: &str) -> Result<&str, StorageError> {
    let mut components = Path::new(file).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !file.contains(['/', '\\']) => Ok(file),
        _ => Err(StorageError::InvalidReference(file.to_string())),
    }
}

#[async_trait]
impl StorageProvider for DiskStorageProvider {
    async fn save_file(&self, file: &str) -> Result<String, StorageError> {
        let file = validate_file_name(file)?;
        let source = self.tmp_dir.join(file);

        if !tokio::fs::try_exists(&source).await? {
            return Err(StorageError::FileNotFound(file.to_string()));
        }

        tokio::fs::create_dir_all(&self.uploads_dir).await?;
        let destination = self.uploads_dir.join(file);
        tokio::fs::rename(&source, &destination).await?;

        tracing::debug!(file = %file, "Stored uploaded file");

        Ok(file.to_string())
    }
}
