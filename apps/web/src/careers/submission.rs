//! Submission Handler: validate, store the resume, record the application.
//!
//! The two writes are not transactional with each other. A ledger failure
//! after a successful upload leaves the stored file in place; only the
//! ledger transaction is rolled back.

use bytes::Bytes;
use chrono::NaiveDate;
use tracing::debug;

use crate::errors::AppError;
use crate::ledger::{ApplicationLedger, LedgerError};
use crate::models::application::ApplicationForm;
use crate::storage::keys::{date_folder, destination_key, stored_file_name};
use crate::storage::ResumeStore;

/// The `file` part of the form.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub record_id: i32,
    pub stored_file_name: String,
    pub folder: String,
    pub location: String,
}

impl SubmissionReceipt {
    pub fn confirmation_message(&self) -> String {
        format!(
            "Application submitted successfully! Resume '{}' uploaded to folder '{}' and saved to database.",
            self.stored_file_name, self.folder
        )
    }
}

/// Runs one submission to completion. A store failure returns before the
/// ledger is touched; neither step is retried.
pub async fn submit_application(
    store: &dyn ResumeStore,
    ledger: &dyn ApplicationLedger,
    form: ApplicationForm,
    upload: Option<ResumeUpload>,
    today: NaiveDate,
    require_phone: bool,
) -> Result<SubmissionReceipt, AppError> {
    let upload = upload.ok_or_else(|| AppError::MissingInput("No file part".to_string()))?;
    if upload.file_name.is_empty() {
        return Err(AppError::MissingInput("No selected file".to_string()));
    }

    let name = required(form.name.as_deref(), "name")?;
    required(form.position.as_deref(), "position")?;
    if require_phone {
        required(form.phone.as_deref(), "phone")?;
    }

    let key = destination_key(today, name, &upload.file_name);
    let location = store
        .store(&key, upload.bytes, upload.content_type.as_deref())
        .await?;

    let stored_file_name = stored_file_name(name, &upload.file_name);
    let application = form
        .into_new_application(location.clone())
        .map_err(LedgerError::from)?;
    let record_id = ledger.record(&application).await?;

    debug!(%key, record_id, "Resume stored and application recorded");
    Ok(SubmissionReceipt {
        record_id,
        stored_file_name,
        folder: date_folder(today),
        location,
    })
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::MissingInput(format!(
            "Missing required field: {field}"
        ))),
    }
}
