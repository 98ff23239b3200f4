//! Regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Scanned within the contact line, then validated separately
    pub static ref EMAIL: Regex = Regex::new(
        r"[\w.-]+@[\w.-]+"
    ).unwrap();

    // Fixed North American layout: (NNN) NNN-NNNN
    pub static ref PHONE: Regex = Regex::new(
        r"\(\d{3}\) \d{3}-\d{4}"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        let m = EMAIL.find("contact: jane.doe-1@mail.example.com (555) 123-4567").unwrap();
        assert_eq!(m.as_str(), "jane.doe-1@mail.example.com");
        assert!(EMAIL.find("no address here").is_none());
    }

    #[test]
    fn test_phone_pattern() {
        let m = PHONE.find("jane@example.com (555) 123-4567").unwrap();
        assert_eq!(m.as_str(), "(555) 123-4567");
        assert!(PHONE.find("555-123-4567").is_none());
        assert!(PHONE.find("(555)123-4567").is_none());
    }
}
