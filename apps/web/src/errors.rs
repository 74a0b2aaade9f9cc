use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::ledger::LedgerError;
use crate::storage::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Bodies are plain text, shown to the applicant as-is.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingInput(String),

    #[error("Credentials not available")]
    CredentialsUnavailable,

    #[error("{0}")]
    Store(StoreError),

    #[error("{0}")]
    Ledger(#[from] LedgerError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CredentialsUnavailable => AppError::CredentialsUnavailable,
            other => AppError::Store(other),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) | AppError::CredentialsUnavailable => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) | AppError::Ledger(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::MissingInput(msg) => msg.clone(),
            AppError::CredentialsUnavailable => {
                tracing::warn!("Resume upload rejected: storage credentials unavailable");
                self.to_string()
            }
            AppError::Store(e) => {
                tracing::error!("Storage error: {e}");
                format!("An error occurred: {e}")
            }
            AppError::Ledger(e) => {
                tracing::error!("Ledger error: {e}");
                format!("An error occurred: {e}")
            }
        };

        (status, body).into_response()
    }
}
