//! Analyze a review CSV from the command line.

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use opportunity_radar::config::AppConfig;
use opportunity_radar::render::{JsonRenderer, ReportRenderer, TextRenderer};
use opportunity_radar::upload::{analyze_upload, UploadOptions};

/// Score complaint buckets and generate product concepts from a review CSV
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with a review_text column
    path: PathBuf,

    /// Print a plain-text summary instead of JSON
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = AppConfig::from_env();
    let csv = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let report = analyze_upload(
        &csv,
        UploadOptions {
            top_words: config.top_words,
            concept_count: config.upload_concepts,
        },
    )?;

    let renderer: Box<dyn ReportRenderer> = if args.text {
        Box::new(TextRenderer)
    } else {
        Box::new(JsonRenderer)
    };
    println!("{}", renderer.render(&report)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_path_and_text_flag() {
        let args = Args::try_parse_from(["analyze_csv", "reviews.csv", "--text"]).unwrap();
        assert_eq!(args.path, PathBuf::from("reviews.csv"));
        assert!(args.text);

        let args = Args::try_parse_from(["analyze_csv", "reviews.csv"]).unwrap();
        assert!(!args.text);
    }

    #[test]
    fn test_help_is_not_a_path() {
        let err = Args::try_parse_from(["analyze_csv", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Args::try_parse_from(["analyze_csv", "a.csv", "--txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_path_required() {
        let err = Args::try_parse_from(["analyze_csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
