//! # nsa-schema — Payload Registry
//!
//! Addresses the NSA payloads by schema namespace and connects them to
//! the outside world:
//!
//! - [`payload`]: the [`Payload`] registry (`api.tweet.profile`,
//!   `api.tweet.myTweets`, `api.tweet.stats`).
//! - [`document`]: decoding JSON documents into records and validating
//!   them.
//! - [`describe`](mod@describe): plain-text descriptor rendering.
//!
//! ```
//! use nsa_schema::{validate_str, Payload};
//!
//! let err = validate_str(
//!     Payload::Stats,
//!     r#"{ "id": "t-1", "date": "2024-05-01" }"#,
//! )
//! .unwrap_err();
//! assert_eq!(err.to_string(), "Stats is a required property of Stats");
//! ```

pub mod describe;
pub mod document;
pub mod error;
pub mod payload;

pub use describe::describe;
pub use document::{decode, decode_str, validate_str, validate_value, PayloadDocument};
pub use error::PayloadError;
pub use payload::{Payload, GENERATOR_VERSION};
