//! Error types for the resume-core library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the resume library.
#[derive(Error, Debug)]
pub enum ResumeError {
    /// Document reading or decoding error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Section or field parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning a document file into plain text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file extension is neither `.pdf` nor `.docx`.
    #[error("unsupported file format: {0}. Please use PDF or Word format")]
    UnsupportedFormat(String),

    /// Failed to parse the PDF or extract its text.
    #[error("failed to read PDF: {0}")]
    Pdf(String),

    /// Failed to parse the Word document.
    #[error("failed to read Word document: {0}")]
    Docx(String),

    /// The PDF is encrypted and the empty password does not open it.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while splitting sections and extracting fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Too few sections, or a section without the expected line layout.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Missing or syntactically invalid email address.
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    /// Missing or unparseable phone number.
    #[error("invalid phone number format: {0}")]
    InvalidPhone(String),

    /// An education line does not have exactly three fields.
    #[error("malformed record on line {line}: expected 3 fields, found {found}")]
    MalformedRecord { line: usize, found: usize },
}

/// Coarse failure category, stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedFormat,
    MalformedDocument,
    InvalidEmail,
    InvalidPhone,
    MalformedRecord,
    Extraction,
    Config,
}

impl ResumeError {
    /// Categorize this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResumeError::Document(DocumentError::UnsupportedFormat(_)) => {
                ErrorKind::UnsupportedFormat
            }
            ResumeError::Document(_) | ResumeError::Io(_) => ErrorKind::Extraction,
            ResumeError::Parse(e) => e.kind(),
            ResumeError::Config(_) => ErrorKind::Config,
        }
    }
}

impl ParseError {
    /// Categorize this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedDocument(_) => ErrorKind::MalformedDocument,
            ParseError::InvalidEmail(_) => ErrorKind::InvalidEmail,
            ParseError::InvalidPhone(_) => ErrorKind::InvalidPhone,
            ParseError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
        }
    }
}

/// Result type for the resume library.
pub type Result<T> = std::result::Result<T, ResumeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = ResumeError::from(DocumentError::UnsupportedFormat("txt".to_string()));
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

        let err = ResumeError::from(DocumentError::Encrypted);
        assert_eq!(err.kind(), ErrorKind::Extraction);

        let err = ResumeError::from(ParseError::MalformedRecord { line: 2, found: 4 });
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InvalidPhone).unwrap();
        assert_eq!(json, "\"invalid_phone\"");
    }

    #[test]
    fn test_malformed_record_message() {
        let err = ParseError::MalformedRecord { line: 3, found: 2 };
        assert_eq!(
            err.to_string(),
            "malformed record on line 3: expected 3 fields, found 2"
        );
    }
}
