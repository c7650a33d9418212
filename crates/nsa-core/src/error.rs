//! # Error Types
//!
//! Two families of errors live here:
//!
//! - [`ValidationError`] — the outcome of running a record's validation.
//!   Structured (kind, field, wrapped cause) so callers and tests can
//!   inspect it, while `Display` renders the exact diagnostic string
//!   consumers have always received.
//! - [`NsaError`]: failures to parse a scalar into its semantic type.
//!
//! ## Message Format
//!
//! Each nesting level adds one layer of field context, outermost first:
//!
//! ```text
//! PinnedTweet is invalid: Id is a required property of Tweet
//! An element of Tweets is invalid: Date is a required property of Tweet
//! AccountType is invalid: HOBBYIST is not a valid AccountType value
//! ```

use thiserror::Error;

/// A single validation failure, possibly wrapping the failure of a
/// nested record or enumeration value.
///
/// Validation short-circuits, so one `ValidationError` always describes
/// exactly one violation: the first one met in traversal order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A field marked required in the schema is absent.
    #[error("{field} is a required property of {record}")]
    MissingRequiredField {
        /// Record type that declares the field.
        record: &'static str,
        /// Schema name of the missing field.
        field: &'static str,
    },

    /// An enumeration-typed value holds a token outside its declared set.
    #[error("{value} is not a valid {enum_type} value")]
    InvalidEnumValue {
        /// Name of the enumeration type.
        enum_type: &'static str,
        /// The offending token, verbatim.
        value: String,
    },

    /// A present enum field or nested record failed its own validation.
    #[error("{field} is invalid: {source}")]
    InvalidField {
        /// Record type that declares the field.
        record: &'static str,
        /// Schema name of the failing field.
        field: &'static str,
        /// The underlying failure.
        source: Box<ValidationError>,
    },

    /// An element of a present collection field failed its own validation.
    ///
    /// The element index is deliberately not part of the message.
    #[error("An element of {field} is invalid: {source}")]
    InvalidElement {
        /// Record type that declares the collection.
        record: &'static str,
        /// Schema name of the collection field.
        field: &'static str,
        /// The first element failure.
        source: Box<ValidationError>,
    },
}

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// See [`ValidationError::MissingRequiredField`].
    MissingRequiredField,
    /// See [`ValidationError::InvalidEnumValue`].
    InvalidEnumValue,
    /// A wrapping error: [`ValidationError::InvalidField`] or
    /// [`ValidationError::InvalidElement`].
    NestedValidationFailure,
}

impl ValidationError {
    /// Wrap `cause` with the context of a single-valued field.
    pub fn invalid_field(record: &'static str, field: &'static str, cause: Self) -> Self {
        Self::InvalidField {
            record,
            field,
            source: Box::new(cause),
        }
    }

    /// Wrap `cause` with the context of a collection field.
    pub fn invalid_element(record: &'static str, field: &'static str, cause: Self) -> Self {
        Self::InvalidElement {
            record,
            field,
            source: Box::new(cause),
        }
    }

    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingRequiredField { .. } => ValidationErrorKind::MissingRequiredField,
            Self::InvalidEnumValue { .. } => ValidationErrorKind::InvalidEnumValue,
            Self::InvalidField { .. } | Self::InvalidElement { .. } => {
                ValidationErrorKind::NestedValidationFailure
            }
        }
    }

    /// Field names from the outermost record down to the violation.
    ///
    /// Enumeration errors carry no field of their own; the enclosing
    /// [`ValidationError::InvalidField`] names it.
    pub fn field_path(&self) -> Vec<&'static str> {
        let mut path = Vec::new();
        let mut current = self;
        loop {
            match current {
                Self::MissingRequiredField { field, .. } => {
                    path.push(*field);
                    return path;
                }
                Self::InvalidEnumValue { .. } => return path,
                Self::InvalidField { field, source, .. }
                | Self::InvalidElement { field, source, .. } => {
                    path.push(*field);
                    current = source;
                }
            }
        }
    }

    /// The innermost, non-wrapping error.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::InvalidField { source, .. } | Self::InvalidElement { source, .. } => {
                source.root_cause()
            }
            other => other,
        }
    }
}

/// Errors outside of validation proper.
#[derive(Error, Debug)]
pub enum NsaError {
    /// A scalar value could not be parsed into its semantic type.
    #[error("invalid {kind} value {value:?}: {reason}")]
    Scalar {
        /// Semantic scalar type, e.g. `"date"`.
        kind: &'static str,
        /// The raw input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_tweet_date() -> ValidationError {
        ValidationError::MissingRequiredField {
            record: "Tweet",
            field: "Date",
        }
    }

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            missing_tweet_date().to_string(),
            "Date is a required property of Tweet"
        );
    }

    #[test]
    fn test_enum_message_names_value_and_type() {
        let err = ValidationError::InvalidEnumValue {
            enum_type: "AccountType",
            value: "HOBBYIST".into(),
        };
        assert_eq!(err.to_string(), "HOBBYIST is not a valid AccountType value");
        assert!(err.field_path().is_empty());
    }

    #[test]
    fn test_nested_field_message_chains_context() {
        let err = ValidationError::invalid_field(
            "MyTweets",
            "PinnedTweet",
            ValidationError::MissingRequiredField {
                record: "Tweet",
                field: "Id",
            },
        );
        assert_eq!(
            err.to_string(),
            "PinnedTweet is invalid: Id is a required property of Tweet"
        );
    }

    #[test]
    fn test_element_message_omits_index() {
        let err = ValidationError::invalid_element("MyTweets", "Tweets", missing_tweet_date());
        assert_eq!(
            err.to_string(),
            "An element of Tweets is invalid: Date is a required property of Tweet"
        );
    }

    #[test]
    fn test_kind_classifies_wrappers_as_nested() {
        let err = ValidationError::invalid_element("MyTweets", "Tweets", missing_tweet_date());
        assert_eq!(err.kind(), ValidationErrorKind::NestedValidationFailure);
        assert_eq!(err.root_cause().kind(), ValidationErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_field_path_and_root_cause_walk_nesting() {
        let inner = ValidationError::invalid_field(
            "Profile",
            "AccountType",
            ValidationError::InvalidEnumValue {
                enum_type: "AccountType",
                value: "x".into(),
            },
        );
        let outer = ValidationError::invalid_field("Outer", "Owner", inner);

        assert_eq!(outer.field_path(), vec!["Owner", "AccountType"]);
        assert!(matches!(
            outer.root_cause(),
            ValidationError::InvalidEnumValue { value, .. } if value == "x"
        ));
    }

    #[test]
    fn test_source_chain_is_exposed() {
        use std::error::Error as _;

        let err = ValidationError::invalid_field("Stats", "Stats", missing_tweet_date());
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Date is a required property of Tweet"));
    }

    #[test]
    fn test_scalar_error_display() {
        let err = NsaError::Scalar {
            kind: "date",
            value: "yesterday".into(),
            reason: "input contains invalid characters".into(),
        };
        assert!(err.to_string().starts_with("invalid date value \"yesterday\""));
    }
}
