//! Rule-based section parsers.

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;

pub use contact::{parse_contact_info, ContactParser};
pub use education::{parse_education, EducationParser};
pub use experience::{parse_work_experience, ExperienceParser};

use crate::error::ParseError;

/// Result type for section parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Trait for parsers that turn one resume section into typed records.
pub trait SectionParser {
    /// The type of value this parser produces.
    type Output;

    /// Parse a single section's text.
    fn parse(&self, section: &str) -> Result<Self::Output>;
}
