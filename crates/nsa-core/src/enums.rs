//! # Enumeration Types
//!
//! Every schema enumeration is a closed set of string tokens. The Rust
//! representation is a string-backed newtype rather than a Rust `enum`:
//! a record decoded from the wire must be able to *carry* an out-of-set
//! token (e.g. `"HOBBYIST"`) so that validation, not decoding, is what
//! rejects it.
//!
//! Membership is exact: case-sensitive, no trimming, no aliases.
//!
//! ## Declaring a New Enumeration
//!
//! Add one `schema_enum!` invocation listing the literals in schema
//! declaration order. The macro generates the newtype, one associated
//! constant per literal, serde support, and the [`EnumType`] impl.

use std::borrow::Cow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A closed set of string tokens with a membership check.
pub trait EnumType: Sized {
    /// Type name used in diagnostics, e.g. `"AccountType"`.
    const NAME: &'static str;

    /// Declared literals, in schema declaration order.
    const VALUES: &'static [&'static str];

    /// The token this value holds, valid or not.
    fn as_str(&self) -> &str;

    /// `true` iff the token is one of [`EnumType::VALUES`].
    fn is_valid(&self) -> bool {
        let token = self.as_str();
        Self::VALUES.iter().any(|v| *v == token)
    }

    /// Membership check with a diagnostic naming the token and the type.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError::InvalidEnumValue {
                enum_type: Self::NAME,
                value: self.as_str().to_string(),
            })
        }
    }
}

/// Object-safe view of an enumeration value, as handed to the
/// validation engine.
pub trait EnumValue {
    /// Name of the enumeration type.
    fn type_name(&self) -> &'static str;

    /// The held token.
    fn token(&self) -> &str;

    /// Run the membership check.
    fn check(&self) -> Result<(), ValidationError>;
}

impl<T: EnumType> EnumValue for T {
    fn type_name(&self) -> &'static str {
        T::NAME
    }

    fn token(&self) -> &str {
        self.as_str()
    }

    fn check(&self) -> Result<(), ValidationError> {
        self.validate()
    }
}

/// Declare a string-backed schema enumeration.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$vmeta:meta])*
                $literal:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $literal: Self = Self(Cow::Borrowed(stringify!($literal)));
            )+

            /// Wrap an arbitrary token without checking membership.
            pub fn new(token: impl Into<String>) -> Self {
                Self(Cow::Owned(token.into()))
            }

            const ALL: &'static [Self] = &[$(Self::$literal),+];

            /// All declared values, in declaration order.
            pub fn all() -> &'static [Self] {
                Self::ALL
            }
        }

        impl EnumType for $name {
            const NAME: &'static str = stringify!($name);
            const VALUES: &'static [&'static str] = &[$(stringify!($literal)),+];

            fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            /// Strict parse: only declared literals are accepted.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = Self::new(s);
                value.validate()?;
                Ok(value)
            }
        }
    };
}

schema_enum! {
    /// Kind of account a profile belongs to.
    pub struct AccountType {
        /// Business account.
        BUSINESS,
        /// Content-creator account.
        CREATOR,
    }
}
