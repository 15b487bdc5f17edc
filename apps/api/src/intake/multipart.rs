use axum::extract::Multipart;
use tracing::debug;

use crate::errors::AppError;
use crate::intake::validator::UploadCandidate;

/// Form field names accepted as the uploaded document.
const FILE_FIELDS: &[&str] = &["resume", "file"];

/// Parsed multipart upload form.
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<UploadCandidate>,
    /// Trimmed job description; empty when the field was absent.
    pub job_description: String,
}

/// Reads every multipart field, keeping the first file field and the job description.
pub async fn parse_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        if FILE_FIELDS.contains(&name.as_str()) {
            let filename = field.file_name().map(String::from);
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {e}")))?;

            if form.file.is_none() {
                debug!(field = %name, bytes = data.len(), "Received upload");
                form.file = Some(UploadCandidate { filename, data });
            }
        } else if name == "job_description" {
            let text = field.text().await.map_err(|e| {
                AppError::BadRequest(format!("Failed to read job_description: {e}"))
            })?;
            form.job_description = text.trim().to_string();
        } else {
            // Ignore unknown fields
            let _ = field.bytes().await;
        }
    }

    Ok(form)
}
