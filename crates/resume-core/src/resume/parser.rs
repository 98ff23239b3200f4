//! Resume parsing pipeline: extract, split, parse each section, assemble.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, error, info};

use crate::document::{DocumentExtractor, TextExtractor};
use crate::error::Result;
use crate::models::config::ResumeConfig;
use crate::models::resume::{ParseOutcome, ParsedResume, ResumeOutput};

use super::rules::{ContactParser, EducationParser, ExperienceParser, SectionParser};
use super::sections::SectionSplitter;

/// Resume parser running the full pipeline over one document at a time.
///
/// Holds no per-document state; one instance can process any number of
/// files.
pub struct ResumeParser<E = DocumentExtractor> {
    extractor: E,
    splitter: SectionSplitter,
    contact: ContactParser,
    education: EducationParser,
    experience: ExperienceParser,
}

impl ResumeParser<DocumentExtractor> {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            extractor: DocumentExtractor::new(),
            splitter: SectionSplitter::new(),
            contact: ContactParser::new(),
            education: EducationParser::new(),
            experience: ExperienceParser::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ResumeConfig) -> Result<Self> {
        Ok(Self {
            extractor: DocumentExtractor::with_config(config.extractor.clone()),
            splitter: SectionSplitter::from_config(&config.sections)?,
            contact: ContactParser::from_config(&config.contact)?,
            education: EducationParser::new(),
            experience: ExperienceParser::new(),
        })
    }
}

impl Default for ResumeParser<DocumentExtractor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TextExtractor> ResumeParser<E> {
    /// Replace the text extractor.
    pub fn with_extractor<T: TextExtractor>(self, extractor: T) -> ResumeParser<T> {
        ResumeParser {
            extractor,
            splitter: self.splitter,
            contact: self.contact,
            education: self.education,
            experience: self.experience,
        }
    }

    /// Replace the contact parser.
    pub fn with_contact_parser(mut self, contact: ContactParser) -> Self {
        self.contact = contact;
        self
    }

    /// Parse already-extracted text.
    pub fn parse_text(&self, text: &str) -> Result<ParsedResume> {
        let sections = self.splitter.split(text)?;

        let contact_info = self.contact.parse(sections.contact())?;
        let education = self.education.parse(sections.education())?;
        let work_experience = self.experience.parse(sections.experience())?;

        debug!(
            "Parsed {} education and {} experience entries ({} reserved sections ignored)",
            education.len(),
            work_experience.len(),
            sections.reserved().len()
        );

        Ok(ParsedResume {
            contact_info,
            education,
            work_experience,
        })
    }

    /// Extract and parse a document, failing on the first error.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedResume> {
        let text = self.extractor.extract(path)?;
        debug!("Extracted {} chars from {}", text.len(), path.display());
        self.parse_text(&text)
    }

    /// Parse a document and report the failure cause instead of an error.
    ///
    /// Failures are logged once at ERROR level.
    pub fn outcome(&self, path: &Path) -> ParseOutcome {
        let start = Instant::now();

        match self.parse_file(path) {
            Ok(resume) => {
                info!("Parsed {} in {:?}", path.display(), start.elapsed());
                ParseOutcome::Parsed(resume)
            }
            Err(e) => {
                error!("Error parsing file {}: {}", path.display(), e);
                ParseOutcome::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                }
            }
        }
    }

    /// Parse a document, returning the empty mapping on any failure.
    pub fn process(&self, path: &Path) -> ResumeOutput {
        self.outcome(path).into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ParseError, ResumeError};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const JANE: &str = "Jane Doe\n123 Main St\njane@example.com (555) 123-4567\n\nBS CompSci, MIT, (2020)\n\nSoftware Engineer at Acme\n\n[section4]\n\n[section5]";

    /// Extractor that returns fixed text for any path.
    struct StaticText(&'static str);

    impl TextExtractor for StaticText {
        fn extract(&self, _path: &Path) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn parser_for(text: &'static str) -> ResumeParser<StaticText> {
        ResumeParser::new().with_extractor(StaticText(text))
    }

    #[test]
    fn test_end_to_end_json() {
        let output = parser_for(JANE).process(Path::new("jane.docx"));
        assert_eq!(
            serde_json::to_value(&output).unwrap(),
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
    fn test_parse_text_matches_file_pipeline() {
        let parser = parser_for(JANE);
        let from_text = parser.parse_text(JANE).unwrap();
        let from_file = parser.parse_file(Path::new("jane.pdf")).unwrap();
        assert_eq!(from_text, from_file);
    }

    #[test]
    fn test_unsupported_extension_yields_empty() {
        let parser = ResumeParser::new();
        let path = Path::new("resume.txt");

        let output = parser.process(path);
        assert!(output.is_empty());
        assert_eq!(serde_json::to_string(&output).unwrap(), "{}");

        match parser.outcome(path) {
            ParseOutcome::Failed { kind, .. } => assert_eq!(kind, ErrorKind::UnsupportedFormat),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let output = ResumeParser::new().process(Path::new("/nonexistent/resume.pdf"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_too_few_sections() {
        let parser = parser_for("Jane Doe\n\nBS, MIT, (2020)\n\nEngineer");
        let err = parser.parse_file(Path::new("jane.pdf")).unwrap_err();
        assert!(matches!(err, ResumeError::Parse(ParseError::MalformedDocument(_))));
        assert!(parser.process(Path::new("jane.pdf")).is_empty());
    }

    #[test]
    fn test_contact_failure_discards_everything() {
        let text = "Jane Doe\n123 Main St\n(555) 123-4567\n\nBS CompSci, MIT, (2020)\n\nEngineer\n\n\n\n";
        let outcome = parser_for(text).outcome(Path::new("jane.pdf"));
        assert_eq!(
            outcome,
            ParseOutcome::Failed {
                kind: ErrorKind::InvalidEmail,
                message: "parse error: invalid email format: no email address in \"(555) 123-4567\""
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_with_contact_parser() {
        let text = "Jane Doe\n123 Main St\njane@example.com (000) 000-0000\n\nBS CompSci, MIT, (2020)\n\nEngineer\n\n\n\n";
        let err = parser_for(text).parse_text(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPhone);

        let lenient = parser_for(text)
            .with_contact_parser(ContactParser::new().with_phone_validation(false));
        let resume = lenient.parse_file(Path::new("jane.pdf")).unwrap();
        assert_eq!(resume.contact_info.phone, "(000) 000-0000");
        assert_eq!(resume.education.len(), 1);
    }

    #[test]
    fn test_malformed_education_record() {
        let text = "Jane Doe\n123 Main St\njane@example.com (555) 123-4567\n\nBS CompSci, MIT\n\nEngineer\n\n\n\n";
        let err = parser_for(text).parse_text(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);
    }

    #[test]
    fn test_from_config_rejects_bad_region() {
        let mut config = ResumeConfig::default();
        config.contact.default_region = "nowhere".to_string();
        let err = ResumeParser::from_config(&config).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = parser_for(JANE);
        let first = parser.process(Path::new("a.pdf"));
        let second = parser.process(Path::new("b.pdf"));
        assert_eq!(first, second);
    }
}
