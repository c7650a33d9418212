//! # nsa-core — Validation Foundations for NSA Payload Records
//!
//! This crate defines what every generated payload record relies on:
//! enumeration types, scalar newtypes, the structured validation error,
//! and the single descriptor-driven validation engine. Every other crate
//! in the workspace depends on `nsa-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Presence is structural, requiredness is not.** Every record field
//!    is an `Option`. A partially filled record is always constructible;
//!    "required" is only checked when [`Record::validate`] runs.
//!
//! 2. **One engine, many descriptors.** Record types declare a static
//!    [`RecordSchema`] and a per-field [`FieldValue`] view. The engine in
//!    [`validate`] does the traversal for all of them.
//!
//! 3. **First violation wins.** Validation short-circuits and returns a
//!    single [`ValidationError`], wrapped once per nesting level.
//!
//! 4. **Enumerations hold any token.** Out-of-set tokens survive decoding
//!    and are rejected by validation, naming the token and the type.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nsa-*` crates.
//! - No `unsafe` code, no logging inside the validation engine.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod enums;
pub mod error;
pub mod temporal;
pub mod validate;

pub use enums::{AccountType, EnumType, EnumValue};
pub use error::{NsaError, ValidationError, ValidationErrorKind};
pub use temporal::IsoDate;
pub use validate::{
    descriptor_mismatch, validate_record, FieldKind, FieldSpec, FieldValue, Record, RecordSchema,
};
