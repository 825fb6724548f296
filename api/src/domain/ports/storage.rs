//! Storage port
//!
//! Persists uploaded assets (business avatars).

use async_trait::async_trait;

use crate::error::StorageError;

#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Persist a previously uploaded file and return its stored reference
    async fn save_file(&self, file: &str) -> Result<String, StorageError>;
}
