//! Database password bootstrap from AWS Secrets Manager.
//!
//! Runs exactly once before the pool is opened. Any failure here is fatal:
//! the server never binds its listener without a resolved password.

use aws_sdk_secretsmanager::Client as SecretsClient;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("failed to retrieve secret '{secret_id}': {message}")]
    Retrieval { secret_id: String, message: String },

    #[error("secret '{0}' has no SecretString")]
    NotAString(String),

    #[error("secret is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("secret contains an empty password")]
    EmptyPassword,
}

#[derive(Deserialize)]
struct DatabaseSecret {
    password: String,
}

/// Fetches the secret named `secret_id` and returns its `password` member.
pub async fn fetch_database_password(
    client: &SecretsClient,
    secret_id: &str,
) -> Result<String, SecretError> {
    let output = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| SecretError::Retrieval {
            secret_id: secret_id.to_string(),
            message: aws_sdk_secretsmanager::error::DisplayErrorContext(&e).to_string(),
        })?;

    let secret_string = output
        .secret_string()
        .ok_or_else(|| SecretError::NotAString(secret_id.to_string()))?;

    let password = parse_password(secret_string)?;
    info!(secret_id, "Database password resolved from Secrets Manager");
    Ok(password)
}

/// Extracts the password from a JSON secret of the form `{"password": "..."}`.
/// Other members (username, host, ...) are ignored.
pub fn parse_password(secret_string: &str) -> Result<String, SecretError> {
    let secret: DatabaseSecret = serde_json::from_str(secret_string)?;
    if secret.password.is_empty() {
        return Err(SecretError::EmptyPassword);
    }
    Ok(secret.password)
}
