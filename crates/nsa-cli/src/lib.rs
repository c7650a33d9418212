//! # nsa-cli — NSA Payload Command-Line Interface
//!
//! ## Subcommands
//!
//! - `validate`: decode and validate JSON documents against a payload
//! - `describe`: print a payload's record descriptors, or list payloads
//!
//! Argument parsing lives in the `*Args` structs; the `run_*` handlers
//! delegate to `nsa-schema` and return the process exit code.

pub mod describe;
pub mod validate;
