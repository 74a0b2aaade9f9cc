//! In-memory collaborators for handler and submission tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::ledger::{ApplicationLedger, LedgerError};
use crate::models::application::NewApplication;
use crate::storage::{ResumeStore, StoreError};

/// Ledger that keeps committed rows in a vector.
#[derive(Default)]
pub struct InMemoryLedger {
    rows: Mutex<Vec<NewApplication>>,
    attempts: AtomicUsize,
    fail: bool,
}

impl InMemoryLedger {
    /// Every insert fails as if the database rejected it.
    pub fn failing() -> Self {
        InMemoryLedger {
            fail: true,
            ..Default::default()
        }
    }

    pub fn rows(&self) -> Vec<NewApplication> {
        self.rows.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationLedger for InMemoryLedger {
    async fn record(&self, application: &NewApplication) -> Result<i32, LedgerError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(LedgerError::Database(sqlx::Error::Protocol(
                "connection reset".to_string(),
            )));
        }
        let mut rows = self.rows.lock().unwrap();
        rows.push(application.clone());
        Ok(rows.len() as i32)
    }
}

/// Store whose every upload fails.
pub struct FailingStore {
    credentials: bool,
    calls: AtomicUsize,
}

impl FailingStore {
    pub fn backend() -> Self {
        FailingStore {
            credentials: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn credentials() -> Self {
        FailingStore {
            credentials: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeStore for FailingStore {
    async fn store(
        &self,
        _key: &str,
        _body: Bytes,
        _content_type: Option<&str>,
    ) -> Result<String, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.credentials {
            Err(StoreError::CredentialsUnavailable)
        } else {
            Err(StoreError::Backend("bucket unreachable".to_string()))
        }
    }
}

/// Configuration for router tests: local storage under `dir`, phone required.
pub fn test_config(dir: &std::path::Path) -> crate::config::Config {
    use crate::config::{Config, DatabaseConfig, StorageBackend};

    Config {
        s3_bucket: "careers-test".to_string(),
        aws_region: "us-east-2".to_string(),
        s3_endpoint: None,
        storage_backend: StorageBackend::Local,
        local_storage_dir: dir.to_path_buf(),
        database: DatabaseConfig {
            host: "localhost".to_string(),
            port: 5432,
            user: "careers".to_string(),
            name: "polypop".to_string(),
            ssl_mode: sqlx::postgres::PgSslMode::Disable,
        },
        secret_name: "careers/db".to_string(),
        require_phone: true,
        max_upload_bytes: 1024 * 1024,
        port: 8000,
        rust_log: "info".to_string(),
    }
}
