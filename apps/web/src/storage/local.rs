use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::info;

use super::{ResumeStore, StoreError};

/// Filesystem-backed resume store for local development.
#[derive(Clone)]
pub struct LocalResumeStore {
    base_path: PathBuf,
}

impl LocalResumeStore {
    /// Creates the base directory if it does not exist yet.
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path).await.map_err(|e| {
            StoreError::Backend(format!(
                "failed to create storage directory {}: {e}",
                base_path.display()
            ))
        })?;
        Ok(LocalResumeStore { base_path })
    }

    /// Rejects keys that could escape the base directory.
    fn key_to_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let relative = Path::new(key);
        let safe = !key.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !safe {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait]
impl ResumeStore for LocalResumeStore {
    async fn store(
        &self,
        key: &str,
        body: Bytes,
        _content_type: Option<&str>,
    ) -> Result<String, StoreError> {
        let path = self.key_to_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        fs::write(&path, &body)
            .await
            .map_err(|e| StoreError::Backend(format!("{}: {e}", path.display())))?;

        let location = format!("file://{}", path.display());
        info!(%location, size = body.len(), "Stored resume on local disk");
        Ok(location)
    }
}
