//! Batch command - parse many resume files one after another.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use resume_core::{DocumentFormat, ParseOutcome, ResumeParser};

use super::config::load_config;
use super::parse::{format_output, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching input files
    #[arg(required = true)]
    input: String,

    /// Output directory (default: one line per file on stdout)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    outcome: ParseOutcome,
    processing_time_ms: u64,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = ResumeParser::from_config(&config)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| DocumentFormat::from_path(p).is_ok())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    eprintln!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = parser.outcome(&path);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        if let ParseOutcome::Failed { message, .. } = &outcome {
            if !args.continue_on_error {
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", path.display(), message);
            }
        }

        results.push(ProcessResult {
            path,
            outcome,
            processing_time_ms,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();

    // Failed files get the empty result so outputs line up with inputs
    for result in &results {
        let content = format_output(&result.outcome.clone().into_output(), args.format, false)?;

        match &args.output_dir {
            Some(output_dir) => {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("resume");
                let output_path = output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, content)?;
                debug!("Wrote output to {}", output_path.display());
            }
            None => println!("{}", content),
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        eprintln!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.outcome.is_parsed()).collect();

    eprintln!();
    eprintln!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    eprintln!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        eprintln!();
        eprintln!("{}", style("Failed files:").red());
        for result in &failed {
            if let ParseOutcome::Failed { message, .. } = &result.outcome {
                eprintln!("  - {}: {}", result.path.display(), message);
            }
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "email",
        "education_count",
        "experience_count",
        "processing_time_ms",
        "error_kind",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.outcome {
            ParseOutcome::Parsed(resume) => {
                wtr.write_record([
                    filename,
                    "success",
                    &resume.contact_info.name,
                    &resume.contact_info.email,
                    &resume.education.len().to_string(),
                    &resume.work_experience.len().to_string(),
                    &result.processing_time_ms.to_string(),
                    "",
                    "",
                ])?;
            }
            ParseOutcome::Failed { kind, message } => {
                let kind = serde_json::to_value(kind)?;
                wtr.write_record([
                    filename,
                    "error",
                    "",
                    "",
                    "",
                    "",
                    &result.processing_time_ms.to_string(),
                    kind.as_str().unwrap_or(""),
                    message,
                ])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
