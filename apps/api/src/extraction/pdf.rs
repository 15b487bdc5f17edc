//! Page-by-page PDF text extraction.
//!
//! `lopdf` supplies structure (encryption flag, page tree) and per-page text. If every
//! page fails, the whole document is retried once through `pdf-extract`. That library
//! can panic on malformed fonts, so the retry runs under `catch_unwind`.

use std::panic::{self, AssertUnwindSafe};

use anyhow::Context;
use bytes::Bytes;
use lopdf::Document;
use tracing::{debug, warn};

use crate::extraction::classifier::{matched_keywords, MIN_RESUME_KEYWORDS};
use crate::extraction::normalize::normalize_text;
use crate::extraction::ExtractionError;

/// Normalized text of a document that passed every extraction gate.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    /// Never empty or whitespace-only.
    pub text: String,
    pub page_count: usize,
    pub pages_failed: usize,
}

/// Runs [`extract`] on the blocking pool. The outer error means the task itself died.
pub async fn extract_in_background(
    data: Bytes,
) -> anyhow::Result<Result<ExtractedDocument, ExtractionError>> {
    tokio::task::spawn_blocking(move || extract(&data))
        .await
        .context("PDF extraction task failed")
}

/// Extracts, normalizes and classifies the text of a PDF byte stream.
pub fn extract(data: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    // Checked before parsing too: an encrypted document may not load at all.
    if declares_encryption(data) {
        return Err(ExtractionError::Encrypted);
    }

    let doc = Document::load_mem(data).map_err(|e| {
        let detail = e.to_string();
        if detail.to_lowercase().contains("crypt") {
            ExtractionError::Encrypted
        } else {
            ExtractionError::Corrupted(detail)
        }
    })?;

    if doc.is_encrypted() {
        return Err(ExtractionError::Encrypted);
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        return Err(ExtractionError::Empty);
    }

    let mut raw = String::new();
    let mut pages_failed = 0;

    for &page in &page_numbers {
        match doc.extract_text(&[page]) {
            Ok(page_text) => {
                if !page_text.trim().is_empty() {
                    raw.push_str(&page_text);
                    raw.push('\n');
                }
            }
            Err(e) => {
                warn!(page, error = %e, "Could not extract text from page; skipping");
                pages_failed += 1;
            }
        }
    }

    if pages_failed == page_numbers.len() {
        if let Some(text) = whole_document_fallback(data) {
            raw = text;
        }
    }

    if raw.trim().is_empty() {
        return Err(ExtractionError::NotExtractable);
    }

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(ExtractionError::NotExtractable);
    }

    let keywords = matched_keywords(&text);
    debug!(
        pages = page_numbers.len(),
        pages_failed,
        keywords = keywords.len(),
        "PDF text extracted"
    );
    if keywords.len() < MIN_RESUME_KEYWORDS {
        return Err(ExtractionError::NotAResume {
            keywords_found: keywords.len(),
        });
    }

    Ok(ExtractedDocument {
        text,
        page_count: page_numbers.len(),
        pages_failed,
    })
}

/// True when the trailer, or a cross-reference stream dictionary, has an
/// `/Encrypt` entry. Page content is never searched.
fn declares_encryption(data: &[u8]) -> bool {
    const MARKER: &[u8] = b"/Encrypt";

    if let Some(start) = rfind(data, b"trailer") {
        return find(&data[start..], MARKER).is_some();
    }

    // No classic trailer: the dictionary runs from `obj` to `stream` around `/XRef`.
    let Some(xref) = rfind(data, b"/XRef") else {
        return false;
    };
    let start = rfind(&data[..xref], b"obj").unwrap_or(0);
    let end = find(&data[xref..], b"stream").map_or(data.len(), |i| xref + i);
    find(&data[start..end], MARKER).is_some()
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

fn whole_document_fallback(data: &[u8]) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(data))) {
        Ok(Ok(text)) => Some(text),
        Ok(Err(e)) => {
            warn!(error = %e, "Whole-document fallback extraction failed");
            None
        }
        Err(_) => {
            warn!("Whole-document fallback extraction panicked");
            None
        }
    }
}
