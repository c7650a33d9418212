//! # Document Decoding & Validation
//!
//! Turns JSON documents into payload records and runs record validation
//! on them. This is the boundary where the pure validation engine meets
//! external input, so decoding and validation failures are kept apart:
//!
//! - [`PayloadError::Decode`]: the document is not JSON, or a field has
//!   the wrong JSON type, or a date is malformed;
//! - [`PayloadError::Invalid`]: the record decoded but violates its
//!   schema (missing required field, unknown enum token, invalid nested
//!   record).
//!
//! Absent fields and explicit `null` both decode to "absent". Unknown
//! JSON members are ignored.

use nsa_core::Record;
use nsa_records::{MyTweets, Profile, Stats};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::PayloadError;
use crate::payload::Payload;

/// A decoded payload record.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadDocument {
    Profile(Profile),
    MyTweets(MyTweets),
    Stats(Stats),
}

impl PayloadDocument {
    /// Which payload this document holds.
    pub fn payload(&self) -> Payload {
        match self {
            Self::Profile(_) => Payload::Profile,
            Self::MyTweets(_) => Payload::MyTweets,
            Self::Stats(_) => Payload::Stats,
        }
    }

    /// The document as a validatable record.
    pub fn as_record(&self) -> &dyn Record {
        match self {
            Self::Profile(r) => r as &dyn Record,
            Self::MyTweets(r) => r as &dyn Record,
            Self::Stats(r) => r as &dyn Record,
        }
    }

    /// Validate the held record.
    pub fn validate(&self) -> Result<(), PayloadError> {
        self.as_record().validate().map_err(PayloadError::from)
    }
}

fn decode_as<T: DeserializeOwned>(payload: Payload, value: &Value) -> Result<T, PayloadError> {
    <T as serde::Deserialize>::deserialize(value).map_err(|e| PayloadError::Decode {
        payload: payload.namespace(),
        reason: e.to_string(),
    })
}

/// Decode a JSON value into the record of `payload`.
pub fn decode(payload: Payload, value: &Value) -> Result<PayloadDocument, PayloadError> {
    if !value.is_object() {
        return Err(PayloadError::Decode {
            payload: payload.namespace(),
            reason: "document must be a JSON object".into(),
        });
    }

    let document = match payload {
        Payload::Profile => PayloadDocument::Profile(decode_as(payload, value)?),
        Payload::MyTweets => PayloadDocument::MyTweets(decode_as(payload, value)?),
        Payload::Stats => PayloadDocument::Stats(decode_as(payload, value)?),
    };
    tracing::debug!(payload = %payload, "decoded payload document");
    Ok(document)
}

/// Decode a JSON string into the record of `payload`.
pub fn decode_str(payload: Payload, json: &str) -> Result<PayloadDocument, PayloadError> {
    let value: Value = serde_json::from_str(json).map_err(|e| PayloadError::Decode {
        payload: payload.namespace(),
        reason: e.to_string(),
    })?;
    decode(payload, &value)
}

/// Decode and validate a JSON value, returning the valid record.
pub fn validate_value(payload: Payload, value: &Value) -> Result<PayloadDocument, PayloadError> {
    let document = decode(payload, value)?;
    document.validate()?;
    Ok(document)
}

/// Decode and validate a JSON string, returning the valid record.
pub fn validate_str(payload: Payload, json: &str) -> Result<PayloadDocument, PayloadError> {
    let document = decode_str(payload, json)?;
    document.validate()?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nsa_core::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn test_decode_picks_record_type() {
        let doc = decode(Payload::Stats, &json!({ "id": "t-1" })).unwrap();
        assert_eq!(doc.payload(), Payload::Stats);
        assert_eq!(doc.as_record().schema().name, "Stats");
    }

    #[test]
    fn test_null_decodes_as_absent() {
        let doc = decode(
            Payload::MyTweets,
            &json!({ "id": "u-1", "username": null, "tweets": [] }),
        )
        .unwrap();
        let PayloadDocument::MyTweets(record) = &doc else {
            panic!("expected MyTweets, got {doc:?}");
        };
        assert!(record.username.is_none());
        assert_eq!(record.tweets.as_deref().map(<[_]>::len), Some(0));
    }

    #[test]
    fn test_wrong_json_type_is_decode_error() {
        let err = decode(Payload::Stats, &json!({ "id": 7 })).unwrap_err();
        assert!(matches!(err, PayloadError::Decode { payload: "api.tweet.stats", .. }));
    }

    #[test]
    fn test_malformed_date_is_decode_error() {
        let err = decode(Payload::Stats, &json!({ "id": "t-1", "date": "May 1st" })).unwrap_err();
        assert!(matches!(err, PayloadError::Decode { .. }));
    }

    #[test]
    fn test_non_object_document_rejected() {
        let err = decode(Payload::Profile, &json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("must be a JSON object"));
    }

    #[test]
    fn test_unknown_members_ignored() {
        let doc = validate_value(
            Payload::Profile,
            &json!({ "id": "1", "username": "ada", "email": "a@b.c", "extra": true }),
        );
        assert!(doc.is_ok());
    }

    #[test]
    fn test_invalid_record_keeps_validation_error() {
        let err = validate_str(
            Payload::MyTweets,
            r#"{ "id": "u-1", "username": "ada", "tweets": [{ "id": "t-1", "body": "x" }] }"#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "An element of Tweets is invalid: Date is a required property of Tweet"
        );
        assert_eq!(
            err.validation().map(|e| e.kind()),
            Some(ValidationErrorKind::NestedValidationFailure)
        );
    }

    #[test]
    fn test_unknown_enum_token_decodes_then_fails_validation() {
        let value = json!({
            "id": "1",
            "username": "ada",
            "email": "a@b.c",
            "accountType": "HOBBYIST",
        });
        assert!(decode(Payload::Profile, &value).is_ok());
        let err = validate_value(Payload::Profile, &value).unwrap_err();
        assert_eq!(
            err.to_string(),
            "AccountType is invalid: HOBBYIST is not a valid AccountType value"
        );
    }

    #[test]
    fn test_invalid_json_text() {
        let err = decode_str(Payload::Profile, "{ not json").unwrap_err();
        assert!(matches!(err, PayloadError::Decode { .. }));
    }
}
