use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use sqlx::postgres::PgSslMode;

/// Application configuration loaded from environment variables.
/// Built once at startup and cloned into whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
    pub s3_bucket: String,
    pub aws_region: String,
    /// S3-compatible endpoint override (MinIO in local setups).
    pub s3_endpoint: Option<String>,
    pub storage_backend: StorageBackend,
    pub local_storage_dir: PathBuf,
    pub database: DatabaseConfig,
    /// Secrets Manager id of the secret holding the database password.
    pub secret_name: String,
    pub require_phone: bool,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Everything needed to open the Postgres pool except the password,
/// which is resolved from Secrets Manager at startup.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Local,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StorageBackend::S3),
            "local" => Ok(StorageBackend::Local),
            other => bail!("STORAGE_BACKEND must be 's3' or 'local', got '{other}'"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb: usize = optional_env("MAX_UPLOAD_MB", "10")
            .parse()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            s3_bucket: require_env("S3_BUCKET_NAME")?,
            aws_region: optional_env("AWS_REGION", "us-east-2"),
            s3_endpoint: std::env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),
            storage_backend: optional_env("STORAGE_BACKEND", "s3").parse()?,
            local_storage_dir: PathBuf::from(optional_env("LOCAL_STORAGE_DIR", "data")),
            database: DatabaseConfig {
                host: require_env("RDS_HOST")?,
                port: optional_env("RDS_PORT", "5432")
                    .parse::<u16>()
                    .context("RDS_PORT must be a valid port number")?,
                user: require_env("RDS_USER")?,
                name: optional_env("RDS_DB_NAME", "polypop"),
                ssl_mode: optional_env("RDS_SSL_MODE", "require")
                    .parse::<PgSslMode>()
                    .context("RDS_SSL_MODE must be a valid Postgres sslmode")?,
            },
            secret_name: require_env("SECRET_NAME")?,
            require_phone: parse_bool(&optional_env("CAREERS_REQUIRE_PHONE", "true"))
                .context("CAREERS_REQUIRE_PHONE must be true or false")?,
            max_upload_bytes: max_upload_mb * 1024 * 1024,
            port: optional_env("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("not a boolean: '{other}'"),
    }
}
