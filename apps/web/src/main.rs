mod careers;
mod config;
mod db;
mod errors;
mod ledger;
mod models;
mod pages;
mod routes;
mod secrets;
mod state;
mod storage;
#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use aws_config::{BehaviorVersion, Region};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, StorageBackend};
use crate::db::{create_pool, ensure_schema};
use crate::ledger::PgApplicationLedger;
use crate::routes::build_router;
use crate::secrets::fetch_database_password;
use crate::state::AppState;
use crate::storage::{LocalResumeStore, ResumeStore, S3ResumeStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting careers site v{}", env!("CARGO_PKG_VERSION"));

    let aws = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.aws_region.clone()))
        .load()
        .await;

    // No password, no server.
    let secrets = aws_sdk_secretsmanager::Client::new(&aws);
    let password = fetch_database_password(&secrets, &config.secret_name)
        .await
        .context("Unable to retrieve the database password from Secrets Manager")?;

    let db = create_pool(&config.database, &password).await?;
    ensure_schema(&db).await?;

    let store = build_resume_store(&config, &aws).await?;

    let state = AppState {
        store,
        ledger: Arc::new(PgApplicationLedger::new(db)),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_resume_store(
    config: &Config,
    aws: &aws_config::SdkConfig,
) -> Result<Arc<dyn ResumeStore>> {
    match config.storage_backend {
        StorageBackend::S3 => {
            info!(bucket = %config.s3_bucket, "Resume store: S3");
            Ok(Arc::new(S3ResumeStore::new(
                aws,
                config.s3_bucket.clone(),
                config.s3_endpoint.as_deref(),
            )))
        }
        StorageBackend::Local => {
            info!(dir = %config.local_storage_dir.display(), "Resume store: local disk");
            let store = LocalResumeStore::new(&config.local_storage_dir).await?;
            Ok(Arc::new(store))
        }
    }
}
