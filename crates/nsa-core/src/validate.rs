//! # Validation Engine
//!
//! One traversal, driven by declarative descriptors, replaces per-type
//! hand-written checks. Each record type supplies:
//!
//! 1. a static [`RecordSchema`]: record name plus one [`FieldSpec`]
//!    (name, requiredness, kind) per field in schema declaration order;
//! 2. a [`FieldValue`] view per field, in the same order, saying whether
//!    the field is present and, for enums, records and collections, what
//!    to delegate to.
//!
//! ## Traversal Order
//!
//! The engine makes four passes over the fields, each in declaration
//! order, and stops at the first failure:
//!
//! 1. every required field must be present;
//! 2. every present enum field must hold a declared token;
//! 3. every present nested record must validate;
//! 4. every element of every present collection must validate.
//!
//! A present-but-empty collection satisfies "required": presence is what
//! is enforced, not non-emptiness.
//!
//! ## Purity
//!
//! Validation reads the record and nothing else. It does not log, does
//! not mutate, and returns the same result on every call for an
//! unchanged record. Records are plain data and can be validated from any
//! number of threads at once.

use std::fmt;

use crate::enums::EnumValue;
use crate::error::ValidationError;

/// Semantic type of a field, as declared in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    /// 64-bit signed integer.
    Integer,
    Boolean,
    /// Calendar date, see [`crate::temporal::IsoDate`].
    Date,
    /// Enumeration type, by name.
    Enum(&'static str),
    /// Nested record, by record name.
    Record(&'static str),
    /// Ordered collection of records, by element record name.
    List(&'static str),
}

impl FieldKind {
    /// Name of the record type this kind delegates to, if any.
    pub fn record_name(&self) -> Option<&'static str> {
        match self {
            Self::Record(name) | Self::List(name) => Some(*name),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("int64"),
            Self::Boolean => f.write_str("boolean"),
            Self::Date => f.write_str("date"),
            Self::Enum(name) => write!(f, "enum {name}"),
            Self::Record(name) => f.write_str(name),
            Self::List(name) => write!(f, "[{name}]"),
        }
    }
}

/// Static descriptor of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Schema name used in diagnostics, e.g. `"PinnedTweet"`.
    pub name: &'static str,
    /// Wire (JSON) name, e.g. `"pinnedTweet"`.
    pub json_name: &'static str,
    /// Whether the field must be present for the record to be valid.
    pub required: bool,
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A field that must be present.
    pub const fn required(name: &'static str, json_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            json_name,
            required: true,
            kind,
        }
    }

    /// A field that may be absent.
    pub const fn optional(name: &'static str, json_name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            json_name,
            required: false,
            kind,
        }
    }
}

/// Static descriptor of one record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Record name used in diagnostics, e.g. `"Tweet"`.
    pub name: &'static str,
    /// Human description carried over from the schema.
    pub description: &'static str,
    /// Fields in schema declaration order.
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Look up a field descriptor by schema name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// Present/absent view of one field's value.
pub enum FieldValue<'a> {
    /// A scalar (string, integer, boolean, date). Only presence matters.
    Scalar { present: bool },
    /// An enumeration-typed field.
    Enum(Option<&'a dyn EnumValue>),
    /// A single nested record.
    Record(Option<&'a dyn Record>),
    /// An ordered collection of records.
    List(Option<Vec<&'a dyn Record>>),
}

impl<'a> FieldValue<'a> {
    /// View of an optional scalar.
    pub fn scalar<T>(value: &Option<T>) -> Self {
        Self::Scalar {
            present: value.is_some(),
        }
    }

    /// View of an optional enumeration value.
    pub fn enumeration<E: EnumValue>(value: Option<&'a E>) -> Self {
        Self::Enum(value.map(|v| v as &dyn EnumValue))
    }

    /// View of an optional nested record.
    pub fn record<R: Record>(value: Option<&'a R>) -> Self {
        Self::Record(value.map(|r| r as &dyn Record))
    }

    /// View of an optional collection of records.
    pub fn list<R: Record>(value: Option<&'a [R]>) -> Self {
        Self::List(value.map(|items| items.iter().map(|r| r as &dyn Record).collect()))
    }

    /// Whether the field holds a value. An empty collection is present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Scalar { present } => *present,
            Self::Enum(v) => v.is_some(),
            Self::Record(v) => v.is_some(),
            Self::List(v) => v.is_some(),
        }
    }

    /// Whether this view can carry a value of the declared `kind`.
    pub fn matches(&self, kind: &FieldKind) -> bool {
        matches!(
            (self, kind),
            (
                Self::Scalar { .. },
                FieldKind::String | FieldKind::Integer | FieldKind::Boolean | FieldKind::Date
            ) | (Self::Enum(_), FieldKind::Enum(_))
                | (Self::Record(_), FieldKind::Record(_))
                | (Self::List(_), FieldKind::List(_))
        )
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar { present } => f.debug_struct("Scalar").field("present", present).finish(),
            Self::Enum(v) => f
                .debug_tuple("Enum")
                .field(&v.map(|e| e.token()))
                .finish(),
            Self::Record(v) => f
                .debug_tuple("Record")
                .field(&v.map(|r| r.schema().name))
                .finish(),
            Self::List(v) => f
                .debug_tuple("List")
                .field(&v.as_ref().map(Vec::len))
                .finish(),
        }
    }
}

/// A schema record that can be validated.
///
/// Implementors only describe themselves; [`Record::validate`] is
/// provided and should not be overridden.
pub trait Record {
    /// The record's static descriptor.
    fn schema(&self) -> &'static RecordSchema;

    /// One view per field, in the same order as `schema().fields`.
    ///
    /// A field with no view counts as absent, so a short list fails the
    /// required check of every trailing required field. Views beyond the
    /// descriptor are ignored. [`descriptor_mismatch`] reports both.
    fn field_values(&self) -> Vec<FieldValue<'_>>;

    /// Check requiredness, enum membership, and nested records,
    /// short-circuiting on the first violation.
    fn validate(&self) -> Result<(), ValidationError> {
        validate_record(self)
    }
}

/// Run the validation traversal over `record`.
pub fn validate_record<R: Record + ?Sized>(record: &R) -> Result<(), ValidationError> {
    let schema = record.schema();
    let values = record.field_values();
    let fields = || schema.fields.iter().zip(values.iter());

    for (i, spec) in schema.fields.iter().enumerate() {
        let present = values.get(i).is_some_and(FieldValue::is_present);
        if spec.required && !present {
            return Err(ValidationError::MissingRequiredField {
                record: schema.name,
                field: spec.name,
            });
        }
    }

    for (spec, value) in fields() {
        if let FieldValue::Enum(Some(token)) = value {
            token
                .check()
                .map_err(|e| ValidationError::invalid_field(schema.name, spec.name, e))?;
        }
    }

    for (spec, value) in fields() {
        if let FieldValue::Record(Some(nested)) = value {
            nested
                .validate()
                .map_err(|e| ValidationError::invalid_field(schema.name, spec.name, e))?;
        }
    }

    for (spec, value) in fields() {
        if let FieldValue::List(Some(elements)) = value {
            for element in elements {
                element
                    .validate()
                    .map_err(|e| ValidationError::invalid_element(schema.name, spec.name, e))?;
            }
        }
    }

    Ok(())
}

/// Check that a record's value view lines up with its descriptor.
///
/// Returns a description of the first disagreement (field count, or a
/// view that cannot carry the declared kind). Used by record tests.
pub fn descriptor_mismatch(record: &dyn Record) -> Option<String> {
    let schema = record.schema();
    let values = record.field_values();
    if schema.fields.len() != values.len() {
        return Some(format!(
            "{} declares {} fields but exposes {} values",
            schema.name,
            schema.fields.len(),
            values.len()
        ));
    }
    schema
        .fields
        .iter()
        .zip(values.iter())
        .find(|(spec, value)| !value.matches(&spec.kind))
        .map(|(spec, value)| {
            format!("{}.{}: {:?} is not {}", schema.name, spec.name, value, spec.kind)
        })
}
