//! Work experience section parsing.
//!
//! Entries are taken verbatim, one per non-empty line. No validation is
//! applied; stricter rules belong in [`ExperienceParser::parse`] once the
//! entry format is pinned down.

use super::{Result, SectionParser};
use crate::models::resume::ExperienceEntry;

/// Work experience section parser.
#[derive(Debug, Clone, Default)]
pub struct ExperienceParser;

impl ExperienceParser {
    pub fn new() -> Self {
        Self
    }
}

impl SectionParser for ExperienceParser {
    type Output = Vec<ExperienceEntry>;

    fn parse(&self, section: &str) -> Result<Vec<ExperienceEntry>> {
        Ok(section
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| ExperienceEntry {
                experience: line.to_string(),
            })
            .collect())
    }
}

/// Parse a work experience section.
pub fn parse_work_experience(section: &str) -> Result<Vec<ExperienceEntry>> {
    ExperienceParser::new().parse(section)
}
