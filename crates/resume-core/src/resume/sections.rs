//! Splitting plain text into resume sections.

use tracing::debug;

use crate::error::{ParseError, ResumeError};
use crate::models::config::SectionConfig;

/// Sections consumed by the field parsers: contact, education, experience.
pub const REQUIRED_SECTIONS: usize = 3;

/// Ordered resume sections borrowed from the source text.
///
/// Always holds at least [`REQUIRED_SECTIONS`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    sections: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    pub fn contact(&self) -> &'a str {
        self.sections[0]
    }

    pub fn education(&self) -> &'a str {
        self.sections[1]
    }

    pub fn experience(&self) -> &'a str {
        self.sections[2]
    }

    /// Sections after the third. Present to satisfy the minimum count but not
    /// interpreted.
    pub fn reserved(&self) -> &[&'a str] {
        &self.sections[REQUIRED_SECTIONS..]
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sections.iter().copied()
    }
}

/// Splits text on a literal delimiter and enforces a minimum section count.
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    delimiter: String,
    min_sections: usize,
}

impl SectionSplitter {
    /// Blank-line delimiter, at least five sections.
    pub fn new() -> Self {
        let config = SectionConfig::default();
        Self {
            delimiter: config.delimiter,
            min_sections: config.min_sections,
        }
    }

    /// Build a splitter from configuration.
    ///
    /// The delimiter must be non-empty and the minimum must cover the three
    /// sections the parsers read.
    pub fn from_config(config: &SectionConfig) -> crate::Result<Self> {
        if config.delimiter.is_empty() {
            return Err(ResumeError::Config("section delimiter must not be empty".to_string()));
        }
        if config.min_sections < REQUIRED_SECTIONS {
            return Err(ResumeError::Config(format!(
                "min_sections must be at least {}, got {}",
                REQUIRED_SECTIONS, config.min_sections
            )));
        }

        Ok(Self {
            delimiter: config.delimiter.clone(),
            min_sections: config.min_sections,
        })
    }

    /// Split `text` into sections.
    ///
    /// Empty pieces between consecutive delimiters are kept as sections.
    pub fn split<'a>(&self, text: &'a str) -> Result<Sections<'a>, ParseError> {
        let sections: Vec<&str> = text.split(self.delimiter.as_str()).collect();
        debug!("Split text into {} sections", sections.len());

        if sections.len() < self.min_sections {
            return Err(ParseError::MalformedDocument(format!(
                "expected at least {} sections, found {}",
                self.min_sections,
                sections.len()
            )));
        }

        Ok(Sections { sections })
    }
}

impl Default for SectionSplitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text with the default blank-line delimiter and minimum.
pub fn parse_sections(text: &str) -> Result<Sections<'_>, ParseError> {
    SectionSplitter::new().split(text)
}
