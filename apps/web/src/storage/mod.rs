//! Resume Store: durable object storage for uploaded resumes, addressed by key.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; the backend is chosen at
//! startup from `STORAGE_BACKEND`.

pub mod keys;
pub mod local;
pub mod s3;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use local::LocalResumeStore;
pub use s3::S3ResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage credentials are not available")]
    CredentialsUnavailable,

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("upload failed: {0}")]
    Backend(String),
}

/// Writes resume bytes under a key. Writing to an existing key replaces it.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Persists `body` under `key` and returns the location identifier
    /// recorded in the ledger (e.g. `s3://bucket/01052024/Jane_Doe.pdf`).
    async fn store(
        &self,
        key: &str,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, StoreError>;
}
