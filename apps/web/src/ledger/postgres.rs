use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};

use super::{ApplicationLedger, LedgerError};
use crate::models::application::{ApplicationRow, NewApplication};

const INSERT_APPLICATION: &str = r#"
    INSERT INTO careers
        (name, experience, position, salary, resume_url, phone_number, expected_salary)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id, name, phone_number, experience, position, salary,
              expected_salary, resume_url, timestamp
"#;

#[derive(Clone)]
pub struct PgApplicationLedger {
    pool: PgPool,
}

impl PgApplicationLedger {
    pub fn new(pool: PgPool) -> Self {
        PgApplicationLedger { pool }
    }
}

#[async_trait]
impl ApplicationLedger for PgApplicationLedger {
    async fn record(&self, application: &NewApplication) -> Result<i32, LedgerError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, ApplicationRow>(INSERT_APPLICATION)
            .bind(&application.name)
            .bind(application.experience)
            .bind(&application.position)
            .bind(application.salary)
            .bind(&application.resume_location)
            .bind(&application.phone_number)
            .bind(application.expected_salary)
            .fetch_one(&mut *tx)
            .await;

        let row = match inserted {
            Ok(row) => row,
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    warn!("Rollback after failed insert also failed: {rollback_err}");
                }
                return Err(e.into());
            }
        };

        tx.commit().await?;

        info!(
            record_id = row.id,
            submitted_at = ?row.submitted_at,
            "Recorded application for {}",
            application.position
        );
        Ok(row.id)
    }
}
