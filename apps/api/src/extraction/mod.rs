// Text Extractor: PDF bytes → normalized resume text.
// Parsing is CPU-bound; async callers go through `extract_in_background`.

pub mod classifier;
pub mod normalize;
pub mod pdf;
pub mod stats;

#[cfg(test)]
pub mod test_fixtures;

use thiserror::Error;

pub use pdf::{extract_in_background, ExtractedDocument};
pub use stats::{text_stats, TextStats};

/// Why a document produced no usable resume text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExtractionError {
    #[error("Cannot process encrypted PDF files. Please upload an unencrypted version.")]
    Encrypted,

    #[error("PDF file appears to be empty or corrupted.")]
    Empty,

    #[error("Could not extract text from PDF. The file might be image-based or corrupted.")]
    NotExtractable,

    #[error("This doesn't appear to be a resume. Please upload a valid resume document.")]
    NotAResume { keywords_found: usize },

    /// Parser-level failure. The detail is logged, never shown to the client.
    #[error("Invalid or corrupted PDF file. Please upload a valid PDF resume.")]
    Corrupted(String),
}

impl ExtractionError {
    pub fn code(&self) -> &'static str {
        match self {
            ExtractionError::Encrypted => "ENCRYPTED",
            ExtractionError::Empty => "EMPTY",
            ExtractionError::NotExtractable => "NOT_EXTRACTABLE",
            ExtractionError::NotAResume { .. } => "NOT_A_RESUME",
            ExtractionError::Corrupted(_) => "CORRUPTED",
        }
    }
}
