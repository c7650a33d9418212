//! # Payload Registry
//!
//! Top-level payloads are addressed by their schema namespace, e.g.
//! `api.tweet.myTweets`. Nested record types (`Tweet`, `Stat`) are not
//! payloads of their own and are only reachable through their parents.

use std::fmt;
use std::str::FromStr;

use nsa_core::RecordSchema;
use nsa_records::{MY_TWEETS_SCHEMA, PROFILE_SCHEMA, STATS_SCHEMA};

use crate::error::PayloadError;

/// Generator version the records were produced with.
pub const GENERATOR_VERSION: u32 = 1;

/// A top-level payload type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payload {
    /// `api.tweet.profile` — user profile.
    Profile,
    /// `api.tweet.myTweets` — a user's tweets.
    MyTweets,
    /// `api.tweet.stats` — tweet engagement snapshot.
    Stats,
}

impl Payload {
    /// All payloads, in registry order.
    pub fn all() -> &'static [Payload] {
        &[Self::Profile, Self::MyTweets, Self::Stats]
    }

    /// Schema namespace of this payload.
    pub fn namespace(&self) -> &'static str {
        match self {
            Self::Profile => "api.tweet.profile",
            Self::MyTweets => "api.tweet.myTweets",
            Self::Stats => "api.tweet.stats",
        }
    }

    /// Generator version of the payload's record types.
    pub fn version(&self) -> u32 {
        GENERATOR_VERSION
    }

    /// Descriptor of the payload's root record.
    pub fn schema(&self) -> &'static RecordSchema {
        match self {
            Self::Profile => &PROFILE_SCHEMA,
            Self::MyTweets => &MY_TWEETS_SCHEMA,
            Self::Stats => &STATS_SCHEMA,
        }
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.namespace())
    }
}

impl FromStr for Payload {
    type Err = PayloadError;

    /// Parse a payload from its namespace. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.namespace() == s)
            .ok_or_else(|| PayloadError::UnknownPayload(s.to_string()))
    }
}
