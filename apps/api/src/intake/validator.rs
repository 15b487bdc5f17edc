//! Content Validator: decides whether an uploaded blob is an acceptable resume document.
//!
//! Checks run in two tiers. Presence, filename and extension failures short-circuit, so a
//! rejected upload is never inspected further. Size and signature checks are accumulated,
//! so a caller sees every problem with an otherwise well-named file at once.

use bytes::Bytes;
use serde::Serialize;

/// Hard ceiling on upload size (16 MiB).
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

const ALLOWED_EXTENSION: &str = "pdf";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Raw upload as received from the client. Lives for one request only.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    pub filename: Option<String>,
    pub data: Bytes,
}

impl UploadCandidate {
    #[cfg(test)]
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: Some(filename.into()),
            data: data.into(),
        }
    }

    /// The claimed filename, or an empty string when the client sent none.
    pub fn file_name(&self) -> &str {
        self.filename.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidationReport {
    pub accepted: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn accepted() -> Self {
        Self {
            accepted: true,
            errors: vec![],
        }
    }

    fn rejected(errors: Vec<String>) -> Self {
        Self {
            accepted: false,
            errors,
        }
    }
}

/// Validates an upload. Read-only: `candidate.data` is never consumed, so
/// downstream extraction sees the full content.
pub fn validate(candidate: Option<&UploadCandidate>) -> ValidationReport {
    let Some(candidate) = candidate else {
        return ValidationReport::rejected(vec!["No file provided".to_string()]);
    };

    let filename = candidate.file_name().trim();
    if filename.is_empty() {
        return ValidationReport::rejected(vec!["No file selected".to_string()]);
    }

    if !has_allowed_extension(filename) {
        return ValidationReport::rejected(vec!["Please upload a PDF file only".to_string()]);
    }

    let mut errors = Vec::new();

    if candidate.data.len() > MAX_UPLOAD_BYTES {
        errors.push("File size exceeds 16MB limit".to_string());
    }

    if !has_pdf_signature(&candidate.data) {
        errors.push("Invalid PDF file format".to_string());
    }

    if errors.is_empty() {
        ValidationReport::accepted()
    } else {
        ValidationReport::rejected(errors)
    }
}

fn has_allowed_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
        .unwrap_or(false)
}

/// The content must start with the PDF header, whatever the filename claims.
fn has_pdf_signature(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Reduces a client-supplied filename to a safe basename.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .replace(' ', "_");

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_candidate(name: &str) -> UploadCandidate {
        UploadCandidate::new(name, b"%PDF-1.5\n%fake body".to_vec())
    }

    #[test]
    fn test_missing_file_rejected() {
        let report = validate(None);
        assert!(!report.accepted);
        assert_eq!(report.errors, vec!["No file provided"]);
    }

    #[test]
    fn test_empty_filename_rejected() {
        let candidate = UploadCandidate {
            filename: None,
            data: Bytes::from_static(b"%PDF-1.4"),
        };
        let report = validate(Some(&candidate));
        assert_eq!(report.errors, vec!["No file selected"]);
    }

    #[test]
    fn test_wrong_extension_short_circuits() {
        // Bad content AND bad extension: only the extension error is reported.
        let candidate = UploadCandidate::new("resume.docx", b"PK\x03\x04".to_vec());
        let report = validate(Some(&candidate));
        assert!(!report.accepted);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("PDF"));
    }

    #[test]
    fn test_no_extension_rejected() {
        let report = validate(Some(&pdf_candidate("resume")));
        assert!(!report.accepted);
    }

    #[test]
    fn test_uppercase_extension_accepted() {
        assert!(validate(Some(&pdf_candidate("Resume.PDF"))).accepted);
    }

    #[test]
    fn test_valid_pdf_accepted() {
        let report = validate(Some(&pdf_candidate("resume.pdf")));
        assert!(report.accepted);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_non_pdf_bytes_rejected() {
        for data in [
            b"hello world".to_vec(),
            b"".to_vec(),
            b"%PD".to_vec(),
            b" %PDF-1.4".to_vec(),
        ] {
            let candidate = UploadCandidate::new("resume.pdf", data);
            let report = validate(Some(&candidate));
            assert!(!report.accepted);
            assert_eq!(report.errors, vec!["Invalid PDF file format"]);
        }
    }

    #[test]
    fn test_size_and_signature_errors_accumulate() {
        let candidate = UploadCandidate::new("resume.pdf", vec![b'x'; MAX_UPLOAD_BYTES + 1]);
        let report = validate(Some(&candidate));
        assert!(!report.accepted);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].contains("16MB"));
    }

    #[test]
    fn test_size_at_limit_accepted() {
        let mut data = b"%PDF-1.4".to_vec();
        data.resize(MAX_UPLOAD_BYTES, b' ');
        let candidate = UploadCandidate::new("resume.pdf", data);
        assert!(validate(Some(&candidate)).accepted);
    }

    #[test]
    fn test_validation_does_not_consume_data() {
        let candidate = pdf_candidate("resume.pdf");
        let before = candidate.data.clone();
        validate(Some(&candidate));
        assert_eq!(candidate.data, before);
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\My Resume.pdf"), "My_Resume.pdf");
        assert_eq!(sanitize_filename("résumé (final).pdf"), "rsum_final.pdf");
    }
}
