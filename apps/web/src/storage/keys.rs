use std::path::Path;

use chrono::NaiveDate;

/// Folder format for the submission date: `01052024` for 1 May 2024.
pub const DATE_FOLDER_FORMAT: &str = "%d%m%Y";

/// Builds `{ddmmyyyy}/{sanitized_name}{ext}`.
///
/// Two applicants with the same name on the same day get the same key and
/// the later upload replaces the earlier one.
pub fn destination_key(date: NaiveDate, applicant_name: &str, original_filename: &str) -> String {
    format!(
        "{}/{}",
        date_folder(date),
        stored_file_name(applicant_name, original_filename)
    )
}

pub fn date_folder(date: NaiveDate) -> String {
    date.format(DATE_FOLDER_FORMAT).to_string()
}

/// `Jane Doe` + `resume.pdf` -> `Jane_Doe.pdf`.
pub fn stored_file_name(applicant_name: &str, original_filename: &str) -> String {
    format!(
        "{}{}",
        sanitize_name(applicant_name),
        extension_of(original_filename)
    )
}

fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Final extension including the dot, or empty. Leading-dot names such as
/// `.profile` have no extension.
fn extension_of(filename: &str) -> String {
    // browsers on Windows may send `C:\fakepath\resume.pdf`
    let base = filename.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(filename);
    Path::new(base)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}
