//! Data models for resumes and pipeline configuration.

pub mod config;
pub mod resume;

pub use config::{ContactConfig, ExtractorConfig, ResumeConfig, SectionConfig};
pub use resume::{ContactInfo, EducationEntry, ExperienceEntry, ParseOutcome, ParsedResume, ResumeOutput};
