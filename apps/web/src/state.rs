use std::sync::Arc;

use crate::config::Config;
use crate::ledger::ApplicationLedger;
use crate::storage::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// S3 in production, local disk when `STORAGE_BACKEND=local`.
    pub store: Arc<dyn ResumeStore>,
    /// Owns the Postgres pool; each submission takes its own transaction.
    pub ledger: Arc<dyn ApplicationLedger>,
    pub config: Config,
}
