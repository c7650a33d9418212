//! # api.tweet.profile
//!
//! User profile payload.

use nsa_core::{AccountType, FieldKind, FieldSpec, FieldValue, IsoDate, Record, RecordSchema};
use serde::{Deserialize, Serialize};

/// Descriptor for [`Profile`].
pub static PROFILE_SCHEMA: RecordSchema = RecordSchema {
    name: "Profile",
    description: "User profile payload",
    fields: &[
        FieldSpec::required("Id", "id", FieldKind::String),
        FieldSpec::required("Username", "username", FieldKind::String),
        FieldSpec::optional("FirstName", "firstName", FieldKind::String),
        FieldSpec::optional("LastName", "lastName", FieldKind::String),
        FieldSpec::optional("Bio", "bio", FieldKind::String),
        FieldSpec::optional("Birthdate", "birthdate", FieldKind::Date),
        FieldSpec::required("Email", "email", FieldKind::String),
        FieldSpec::optional("AccountType", "accountType", FieldKind::Enum("AccountType")),
        FieldSpec::optional("Verified", "verified", FieldKind::Boolean),
    ],
};

/// User profile payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl Profile {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    pub fn with_birthdate(mut self, birthdate: IsoDate) -> Self {
        self.birthdate = Some(birthdate);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the account type. Any token is accepted here; membership is
    /// checked by validation.
    pub fn with_account_type(mut self, account_type: AccountType) -> Self {
        self.account_type = Some(account_type);
        self
    }

    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }
}

impl Record for Profile {
    fn schema(&self) -> &'static RecordSchema {
        &PROFILE_SCHEMA
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::scalar(&self.id),
            FieldValue::scalar(&self.username),
            FieldValue::scalar(&self.first_name),
            FieldValue::scalar(&self.last_name),
            FieldValue::scalar(&self.bio),
            FieldValue::scalar(&self.birthdate),
            FieldValue::scalar(&self.email),
            FieldValue::enumeration(self.account_type.as_ref()),
            FieldValue::scalar(&self.verified),
        ]
    }
}
