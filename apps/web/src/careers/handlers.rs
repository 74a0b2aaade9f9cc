//! Axum route handlers for the careers page.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::Html,
};
use chrono::Local;
use tracing::info;

use crate::careers::submission::{submit_application, ResumeUpload};
use crate::errors::AppError;
use crate::models::application::ApplicationForm;
use crate::pages::handlers::render_careers_form;
use crate::state::AppState;

/// GET /careers
pub async fn handle_careers_form(State(state): State<AppState>) -> Html<String> {
    Html(render_careers_form(state.config.require_phone))
}

/// POST /careers
///
/// Multipart form: `name`, `phone`, `experience`, `position`, `salary`,
/// `expected_salary` and one `file`. Responds with a plain-text confirmation.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, AppError> {
    let multipart =
        multipart.map_err(|e| AppError::MissingInput(format!("No file part ({e})")))?;
    let (form, upload) = read_application(multipart).await?;

    let receipt = submit_application(
        state.store.as_ref(),
        state.ledger.as_ref(),
        form,
        upload,
        Local::now().date_naive(),
        state.config.require_phone,
    )
    .await?;

    info!(
        record_id = receipt.record_id,
        location = %receipt.location,
        "Application submitted"
    );
    Ok(receipt.confirmation_message())
}

/// Collects the text fields and the resume part. Unknown fields are drained
/// and ignored; a repeated field keeps its last value.
async fn read_application(
    mut multipart: Multipart,
) -> Result<(ApplicationForm, Option<ResumeUpload>), AppError> {
    let mut form = ApplicationForm::default();
    let mut upload = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let field_name = field.name().unwrap_or("").to_string();
        let slot = match field_name.as_str() {
            "name" => &mut form.name,
            "phone" => &mut form.phone,
            "experience" => &mut form.experience,
            "position" => &mut form.position,
            "salary" => &mut form.salary,
            "expected_salary" => &mut form.expected_salary,
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                upload = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
                continue;
            }
            _ => {
                field.bytes().await.map_err(malformed)?;
                continue;
            }
        };
        *slot = Some(field.text().await.map_err(malformed)?);
    }

    Ok((form, upload))
}

fn malformed(err: axum::extract::multipart::MultipartError) -> AppError {
    AppError::MissingInput(format!("Malformed form data: {err}"))
}
