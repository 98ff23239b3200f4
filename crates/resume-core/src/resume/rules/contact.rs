//! Contact section parsing and validation.
//!
//! The contact section is laid out as:
//!
//! ```text
//! <name>
//! <address>
//! <email> <phone>
//! ```
//!
//! Email and phone are located by pattern within the third line and then
//! validated: the email against RFC 5322 syntax, the phone by parsing it in
//! the configured region.

use email_address::EmailAddress;
use phonenumber::country;
use tracing::debug;

use super::patterns::{EMAIL, PHONE};
use super::{Result, SectionParser};
use crate::error::{ParseError, ResumeError};
use crate::models::config::ContactConfig;
use crate::models::resume::ContactInfo;

/// Number of lines the contact section must have.
pub const CONTACT_LINES: usize = 3;

/// Contact section parser.
#[derive(Debug, Clone)]
pub struct ContactParser {
    region: country::Id,
    validate_email: bool,
    validate_phone: bool,
}

impl ContactParser {
    /// Create a parser that validates everything in the US region.
    pub fn new() -> Self {
        Self {
            region: country::Id::US,
            validate_email: true,
            validate_phone: true,
        }
    }

    /// Build a parser from configuration.
    pub fn from_config(config: &ContactConfig) -> crate::Result<Self> {
        let region = config
            .default_region
            .to_uppercase()
            .parse::<country::Id>()
            .map_err(|_| {
                ResumeError::Config(format!("unknown phone region: {}", config.default_region))
            })?;

        Ok(Self {
            region,
            validate_email: config.validate_email,
            validate_phone: config.validate_phone,
        })
    }

    /// Set whether matched emails must pass RFC 5322 syntax validation.
    pub fn with_email_validation(mut self, validate: bool) -> Self {
        self.validate_email = validate;
        self
    }

    /// Set whether matched phone numbers must parse.
    pub fn with_phone_validation(mut self, validate: bool) -> Self {
        self.validate_phone = validate;
        self
    }

    fn extract_email(&self, line: &str) -> Result<String> {
        let email = EMAIL
            .find(line)
            .ok_or_else(|| ParseError::InvalidEmail(format!("no email address in {:?}", line)))?
            .as_str();

        if self.validate_email && !EmailAddress::is_valid(email) {
            return Err(ParseError::InvalidEmail(email.to_string()));
        }

        Ok(email.to_string())
    }

    fn extract_phone(&self, line: &str) -> Result<String> {
        let phone = PHONE
            .find(line)
            .ok_or_else(|| ParseError::InvalidPhone(format!("no phone number in {:?}", line)))?
            .as_str();

        if self.validate_phone {
            phonenumber::parse(Some(self.region), phone)
                .map_err(|e| ParseError::InvalidPhone(format!("{}: {}", phone, e)))?;
        }

        Ok(phone.to_string())
    }
}

impl Default for ContactParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionParser for ContactParser {
    type Output = ContactInfo;

    fn parse(&self, section: &str) -> Result<ContactInfo> {
        let lines: Vec<&str> = section.lines().collect();
        if lines.len() < CONTACT_LINES {
            return Err(ParseError::MalformedDocument(format!(
                "contact section has {} lines, expected at least {}",
                lines.len(),
                CONTACT_LINES
            )));
        }

        let contact_line = lines[2];
        let email = self.extract_email(contact_line)?;
        let phone = self.extract_phone(contact_line)?;

        debug!("Parsed contact info for {:?}", lines[0]);

        Ok(ContactInfo {
            name: lines[0].to_string(),
            email,
            phone,
            address: lines[1].to_string(),
        })
    }
}

/// Parse a contact section with default settings.
pub fn parse_contact_info(section: &str) -> Result<ContactInfo> {
    ContactParser::new().parse(section)
}
