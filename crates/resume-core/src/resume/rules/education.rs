//! Education section parsing.
//!
//! Each non-empty line is one record of the form
//! `<degree>, <institution>, (<graduation date>)`.

use super::{Result, SectionParser};
use crate::error::ParseError;
use crate::models::resume::EducationEntry;

/// Literal delimiter between education fields.
pub const FIELD_DELIMITER: &str = ", ";

/// Education section parser.
#[derive(Debug, Clone, Default)]
pub struct EducationParser;

impl EducationParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(&self, line_number: usize, line: &str) -> Result<EducationEntry> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        let [degree, institution, date] = fields.as_slice() else {
            return Err(ParseError::MalformedRecord {
                line: line_number,
                found: fields.len(),
            });
        };

        Ok(EducationEntry {
            degree: degree.to_string(),
            institution: institution.to_string(),
            graduation_date: date.trim_matches(&['(', ')'][..]).to_string(),
        })
    }
}

impl SectionParser for EducationParser {
    type Output = Vec<EducationEntry>;

    fn parse(&self, section: &str) -> Result<Vec<EducationEntry>> {
        section
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(i, line)| self.parse_line(i + 1, line))
            .collect()
    }
}

/// Parse an education section.
pub fn parse_education(section: &str) -> Result<Vec<EducationEntry>> {
    EducationParser::new().parse(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(degree: &str, institution: &str, date: &str) -> EducationEntry {
        EducationEntry {
            degree: degree.to_string(),
            institution: institution.to_string(),
            graduation_date: date.to_string(),
        }
    }

    #[test]
    fn test_parse_single_line() {
        let entries = parse_education("degree, institution, (2024)").unwrap();
        assert_eq!(entries, vec![entry("degree", "institution", "2024")]);
    }

    #[test]
    fn test_order_preserved_and_blank_lines_skipped() {
        let section = "PhD Physics, ETH Zurich, (2019)\n\nBS CompSci, MIT, (2014)\n";
        let entries = parse_education(section).unwrap();
        assert_eq!(
            entries,
            vec![
                entry("PhD Physics", "ETH Zurich", "2019"),
                entry("BS CompSci", "MIT", "2014"),
            ]
        );
    }

    #[test]
    fn test_date_without_parentheses() {
        let entries = parse_education("MBA, Wharton, May 2021").unwrap();
        assert_eq!(entries[0].graduation_date, "May 2021");
    }

    #[test]
    fn test_only_outer_parentheses_stripped() {
        let entries = parse_education("BA, Yale, ((2010) expected)").unwrap();
        assert_eq!(entries[0].graduation_date, "2010) expected");
    }

    #[test]
    fn test_extra_field_is_malformed() {
        let err = parse_education("BS, CompSci, MIT, (2020)").unwrap_err();
        assert_eq!(err, ParseError::MalformedRecord { line: 1, found: 4 });
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = parse_education("BS CompSci, MIT, (2020)\nMS CompSci (2022)").unwrap_err();
        assert_eq!(err, ParseError::MalformedRecord { line: 2, found: 1 });
    }

    #[test]
    fn test_comma_without_space_is_not_a_delimiter() {
        let err = parse_education("BS,MIT,(2020)").unwrap_err();
        assert_eq!(err, ParseError::MalformedRecord { line: 1, found: 1 });
    }

    #[test]
    fn test_empty_section() {
        assert!(parse_education("").unwrap().is_empty());
    }
}
