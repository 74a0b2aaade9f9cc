use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(config: &DatabaseConfig, password: &str) -> Result<PgPool> {
    info!(host = %config.host, database = %config.name, "Connecting to PostgreSQL...");

    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(password)
        .database(&config.name)
        .ssl_mode(config.ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

const CREATE_CAREERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS careers (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255),
        experience INT,
        position VARCHAR(255),
        salary INT,
        resume_url VARCHAR(255),
        phone_number VARCHAR(20),
        expected_salary INT,
        timestamp TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Columns added after the table first shipped. Older deployments are
/// brought up to date by `ensure_schema`.
pub const OPTIONAL_COLUMNS: &[(&str, &str)] = &[
    ("phone_number", "VARCHAR(20)"),
    ("expected_salary", "INT"),
];

/// Creates the `careers` table if needed and adds any missing optional column.
/// Safe to run repeatedly.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_CAREERS_TABLE).execute(pool).await?;

    for (column, sql_type) in OPTIONAL_COLUMNS {
        sqlx::query(&add_column_sql(column, sql_type))
            .execute(pool)
            .await?;
    }

    info!("careers table schema verified");
    Ok(())
}

fn add_column_sql(column: &str, sql_type: &str) -> String {
    format!("ALTER TABLE careers ADD COLUMN IF NOT EXISTS {column} {sql_type}")
}
