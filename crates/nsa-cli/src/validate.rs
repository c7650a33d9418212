//! # Validate Subcommand
//!
//! Checks JSON documents against a payload's record type and reports one
//! line per file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use nsa_schema::{validate_value, Payload, PayloadError};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Payload namespace of the documents, e.g. `api.tweet.myTweets`.
    #[arg(long)]
    pub payload: Payload,

    /// JSON documents to validate.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Outcome of checking a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    Valid,
    /// The document decoded but its record is invalid, or it did not decode.
    Invalid(String),
    /// The file could not be read.
    Unreadable(String),
}

impl FileReport {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The report line for `path`.
    pub fn render(&self, path: &Path) -> String {
        match self {
            Self::Valid => format!("{}: OK", path.display()),
            Self::Invalid(msg) => format!("{}: INVALID: {msg}", path.display()),
            Self::Unreadable(msg) => format!("{}: ERROR: {msg}", path.display()),
        }
    }
}

fn read_document(path: &Path) -> Result<serde_json::Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Check one file against `payload`.
pub fn check_file(payload: Payload, path: &Path) -> FileReport {
    let value = match read_document(path) {
        Ok(value) => value,
        Err(e) if e.downcast_ref::<std::io::Error>().is_some() => {
            return FileReport::Unreadable(format!("{e:#}"));
        }
        Err(e) => return FileReport::Invalid(format!("{e:#}")),
    };

    match validate_value(payload, &value) {
        Ok(_) => FileReport::Valid,
        Err(err @ PayloadError::Invalid(_)) => {
            tracing::debug!(path = %path.display(), error = %err, "record failed validation");
            FileReport::Invalid(err.to_string())
        }
        Err(err) => FileReport::Invalid(err.to_string()),
    }
}

/// Execute the validate subcommand.
///
/// Returns 0 when every file is valid and 1 otherwise.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    tracing::info!(payload = %args.payload, files = args.files.len(), "validating documents");

    let mut failures = 0usize;
    for path in &args.files {
        let report = check_file(args.payload, path);
        if !report.is_valid() {
            failures += 1;
        }
        println!("{}", report.render(path));
    }

    if failures > 0 {
        tracing::warn!(failures, "some documents failed validation");
        Ok(1)
    } else {
        Ok(0)
    }
}
