//! Parse command - extract data from a single resume file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::debug;

use resume_core::{ParseOutcome, ParsedResume, ResumeOutput, ResumeParser};

use super::config::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF or Word)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Fail with the error cause instead of printing an empty result
    #[arg(long)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = ResumeParser::from_config(&config)?;

    let output = if args.strict {
        match parser.outcome(&args.input) {
            ParseOutcome::Parsed(resume) => ResumeOutput::Parsed(resume),
            ParseOutcome::Failed { kind, message } => {
                anyhow::bail!("{:?}: {}", kind, message);
            }
        }
    } else {
        parser.process(&args.input)
    };

    let content = format_output(&output, args.format, args.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &content)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", content);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_output(output: &ResumeOutput, format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(output)?),
        OutputFormat::Json => Ok(serde_json::to_string(output)?),
        OutputFormat::Text => Ok(match output {
            ResumeOutput::Parsed(resume) => format_text(resume),
            ResumeOutput::Empty {} => "No resume data extracted.\n".to_string(),
        }),
    }
}

fn format_text(resume: &ParsedResume) -> String {
    let contact = &resume.contact_info;
    let mut output = String::new();

    output.push_str(&format!("Name:    {}\n", contact.name));
    output.push_str(&format!("Address: {}\n", contact.address));
    output.push_str(&format!("Email:   {}\n", contact.email));
    output.push_str(&format!("Phone:   {}\n", contact.phone));
    output.push('\n');

    output.push_str("Education:\n");
    for entry in &resume.education {
        output.push_str(&format!(
            "  {}, {} ({})\n",
            entry.degree, entry.institution, entry.graduation_date
        ));
    }
    output.push('\n');

    output.push_str("Work experience:\n");
    for entry in &resume.work_experience {
        output.push_str(&format!("  {}\n", entry.experience));
    }

    output
}
