use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// Applicant fields exactly as they arrived in the form, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationForm {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub position: Option<String>,
    pub salary: Option<String>,
    pub expected_salary: Option<String>,
}

/// A typed submission, ready for insertion into the `careers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewApplication {
    pub name: String,
    pub phone_number: Option<String>,
    pub experience: Option<i32>,
    pub position: String,
    pub salary: Option<i32>,
    pub expected_salary: Option<i32>,
    pub resume_location: String,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: i32,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub experience: Option<i32>,
    pub position: Option<String>,
    pub salary: Option<i32>,
    pub expected_salary: Option<i32>,
    #[sqlx(rename = "resume_url")]
    pub resume_location: Option<String>,
    #[sqlx(rename = "timestamp")]
    pub submitted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid integer for '{field}': '{value}'")]
pub struct CoercionError {
    pub field: &'static str,
    pub value: String,
}

impl ApplicationForm {
    /// Coerces the numeric fields and attaches the stored resume location.
    ///
    /// Empty or missing numbers become `None`; anything that is not an
    /// integer is a `CoercionError`. `name` and `position` default to empty
    /// strings here, presence is enforced earlier by the submission handler.
    pub fn into_new_application(
        self,
        resume_location: String,
    ) -> Result<NewApplication, CoercionError> {
        Ok(NewApplication {
            experience: coerce_int("experience", self.experience.as_deref())?,
            salary: coerce_int("salary", self.salary.as_deref())?,
            expected_salary: coerce_int("expected_salary", self.expected_salary.as_deref())?,
            name: self.name.unwrap_or_default(),
            phone_number: self.phone.filter(|p| !p.is_empty()),
            position: self.position.unwrap_or_default(),
            resume_location,
        })
    }
}

fn coerce_int(field: &'static str, raw: Option<&str>) -> Result<Option<i32>, CoercionError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(s) => s,
    };
    raw.parse::<i32>().map(Some).map_err(|_| CoercionError {
        field,
        value: raw.to_string(),
    })
}
