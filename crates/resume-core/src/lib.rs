//! Core library for resume parsing.
//!
//! This crate provides:
//! - Document text extraction (PDF and Word)
//! - Blank-line section splitting
//! - Contact, education and work experience field extraction
//! - Resume data models with a stable JSON layout

pub mod document;
pub mod error;
pub mod models;
pub mod resume;

pub use document::{DocumentExtractor, DocumentFormat, RawDocument, TextExtractor};
pub use error::{DocumentError, ErrorKind, ParseError, ResumeError, Result};
pub use models::config::ResumeConfig;
pub use models::resume::{ContactInfo, EducationEntry, ExperienceEntry, ParseOutcome, ParsedResume, ResumeOutput};
pub use resume::{ResumeParser, SectionParser, SectionSplitter, Sections};
