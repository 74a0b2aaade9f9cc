//! Application Ledger: one `careers` row per successful submission.

pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::application::{CoercionError, NewApplication};

pub use postgres::PgApplicationLedger;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Coercion(#[from] CoercionError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait ApplicationLedger: Send + Sync {
    /// Inserts one row and returns its id. Nothing is visible on failure.
    async fn record(&self, application: &NewApplication) -> Result<i32, LedgerError>;
}
