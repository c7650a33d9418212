//! # Describe Subcommand
//!
//! Prints a payload's record descriptors, or the payload registry when no
//! namespace is given.

use anyhow::Result;
use clap::Args;
use nsa_schema::{describe, Payload};

/// Arguments for the describe subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Payload namespace to describe. Lists all payloads when omitted.
    pub payload: Option<Payload>,
}

/// One line per registered payload: namespace and root record.
pub fn payload_listing() -> String {
    Payload::all()
        .iter()
        .map(|p| format!("{}\t{}\n", p.namespace(), p.schema().name))
        .collect()
}

/// Execute the describe subcommand.
pub fn run_describe(args: &DescribeArgs) -> Result<u8> {
    match args.payload {
        Some(payload) => print!("{}", describe(payload)),
        None => print!("{}", payload_listing()),
    }
    Ok(0)
}
