//! Resume data models.
//!
//! Field names serialize in camelCase (`contactInfo`, `graduationDate`,
//! `workExperience`) so the JSON output is stable for downstream consumers.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, ResumeError};

/// A fully parsed resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResume {
    /// Candidate contact details.
    pub contact_info: ContactInfo,

    /// Education records in document order.
    pub education: Vec<EducationEntry>,

    /// Work experience entries in document order.
    pub work_experience: Vec<ExperienceEntry>,
}

/// Candidate contact details. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// One education record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    /// Graduation date with surrounding parentheses removed.
    pub graduation_date: String,
}

/// One free-text work experience entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub experience: String,
}

/// Output of the compatibility entry point.
///
/// A failed parse serializes as the empty mapping `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResumeOutput {
    Parsed(ParsedResume),
    Empty {},
}

impl ResumeOutput {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResumeOutput::Empty {})
    }

    pub fn into_resume(self) -> Option<ParsedResume> {
        match self {
            ResumeOutput::Parsed(resume) => Some(resume),
            ResumeOutput::Empty {} => None,
        }
    }
}

impl From<Option<ParsedResume>> for ResumeOutput {
    fn from(resume: Option<ParsedResume>) -> Self {
        match resume {
            Some(resume) => ResumeOutput::Parsed(resume),
            None => ResumeOutput::Empty {},
        }
    }
}

/// Structured result that keeps the failure cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    Parsed(ParsedResume),
    Failed { kind: ErrorKind, message: String },
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    /// Drop the failure cause, keeping the `{}` convention.
    pub fn into_output(self) -> ResumeOutput {
        match self {
            ParseOutcome::Parsed(resume) => ResumeOutput::Parsed(resume),
            ParseOutcome::Failed { .. } => ResumeOutput::Empty {},
        }
    }
}

impl From<std::result::Result<ParsedResume, ResumeError>> for ParseOutcome {
    fn from(result: std::result::Result<ParsedResume, ResumeError>) -> Self {
        match result {
            Ok(resume) => ParseOutcome::Parsed(resume),
            Err(e) => ParseOutcome::Failed {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> ParsedResume {
        ParsedResume {
            contact_info: ContactInfo {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "(555) 123-4567".to_string(),
                address: "123 Main St".to_string(),
            },
            education: vec![EducationEntry {
                degree: "BS CompSci".to_string(),
                institution: "MIT".to_string(),
                graduation_date: "2020".to_string(),
            }],
            work_experience: vec![ExperienceEntry {
                experience: "Software Engineer at Acme".to_string(),
            }],
        }
    }

    #[test]
    fn test_resume_json_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "contactInfo": {
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "(555) 123-4567",
                    "address": "123 Main St"
                },
                "education": [
                    {"degree": "BS CompSci", "institution": "MIT", "graduationDate": "2020"}
                ],
                "workExperience": [
                    {"experience": "Software Engineer at Acme"}
                ]
            })
        );
    }

    #[test]
    fn test_empty_output_is_empty_mapping() {
        let output = ResumeOutput::from(None);
        assert!(output.is_empty());
        assert_eq!(serde_json::to_string(&output).unwrap(), "{}");
    }

    #[test]
    fn test_parsed_output_is_flat() {
        let output = ResumeOutput::Parsed(sample());
        let value = serde_json::to_value(&output).unwrap();
        assert!(value.get("contactInfo").is_some());
        assert_eq!(output.into_resume(), Some(sample()));
    }

    #[test]
    fn test_failed_outcome_json() {
        let err = ResumeError::from(ParseError::InvalidEmail("no email found".to_string()));
        let outcome = ParseOutcome::from(Err::<ParsedResume, _>(err));
        assert!(!outcome.is_parsed());

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["kind"], "invalid_email");
        assert!(outcome.into_output().is_empty());
    }
}
