//! Document text extraction.
//!
//! Turns a `.pdf` or `.docx` file into one plain-text blob. The file handle is
//! opened and released inside [`RawDocument::read`]; nothing downstream holds
//! on to it.

mod docx;
mod pdf;

pub use docx::extract_paragraphs;
pub use pdf::PdfExtractor;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
use crate::models::config::ExtractorConfig;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Determine the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Raw document bytes tagged with their format.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub data: Vec<u8>,
    pub format: DocumentFormat,
}

impl RawDocument {
    pub fn new(data: Vec<u8>, format: DocumentFormat) -> Self {
        Self { data, format }
    }

    /// Read a document from disk.
    ///
    /// The extension is checked before the file is opened.
    pub fn read(path: &Path) -> crate::Result<Self> {
        let format = DocumentFormat::from_path(path)?;

        let mut data = Vec::new();
        let mut file = File::open(path)?;
        file.read_to_end(&mut data)?;

        debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self { data, format })
    }
}

/// Trait for turning a document file into plain text.
pub trait TextExtractor {
    /// Extract the text content of the file at `path`.
    fn extract(&self, path: &Path) -> crate::Result<String>;
}

/// Default extractor for PDF and Word documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor {
    config: ExtractorConfig,
}

impl DocumentExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract text from in-memory document bytes.
    pub fn extract_raw(&self, document: &RawDocument) -> Result<String> {
        match document.format {
            DocumentFormat::Pdf => {
                let mut extractor = PdfExtractor::new();
                extractor.load(&document.data)?;
                let pages = extractor.extract_pages()?;
                debug!("Extracted text from {} PDF pages", pages.len());
                Ok(pages.join(self.config.page_separator.as_str()))
            }
            DocumentFormat::Docx => {
                let paragraphs = extract_paragraphs(&document.data)?;
                Ok(paragraphs.join(self.config.paragraph_separator.as_str()))
            }
        }
    }
}

impl TextExtractor for DocumentExtractor {
    fn extract(&self, path: &Path) -> crate::Result<String> {
        let document = RawDocument::read(path)?;
        Ok(self.extract_raw(&document)?)
    }
}
