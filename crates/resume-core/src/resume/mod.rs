//! Resume section splitting and field extraction.

mod parser;
pub mod rules;
pub mod sections;

pub use parser::ResumeParser;
pub use rules::SectionParser;
pub use sections::{parse_sections, SectionSplitter, Sections};
