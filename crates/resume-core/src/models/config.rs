//! Configuration structures for the resume pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the resume pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// Document text extraction configuration.
    pub extractor: ExtractorConfig,

    /// Section splitting configuration.
    pub sections: SectionConfig,

    /// Contact field configuration.
    pub contact: ContactConfig,
}

/// Text extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Inserted between consecutive PDF pages.
    pub page_separator: String,

    /// Inserted between consecutive Word paragraphs.
    pub paragraph_separator: String,
}

/// Section splitting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    /// Literal delimiter between sections.
    pub delimiter: String,

    /// Minimum number of sections a document must have.
    pub min_sections: usize,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            delimiter: "\n\n".to_string(),
            min_sections: 5,
        }
    }
}

/// Contact field configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// ISO 3166-1 region used to parse phone numbers without a country code.
    pub default_region: String,

    /// Check matched emails against RFC 5322 syntax.
    pub validate_email: bool,

    /// Check matched phone numbers parse in the default region.
    pub validate_phone: bool,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            default_region: "US".to_string(),
            validate_email: true,
            validate_phone: true,
        }
    }
}

impl ResumeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
