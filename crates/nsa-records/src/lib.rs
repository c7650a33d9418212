//! # nsa-records — Payload Records
//!
//! The record types generated from the NSA schema, one module per
//! payload namespace:
//!
//! - [`profile`] — `api.tweet.profile`: [`Profile`]
//! - [`my_tweets`] — `api.tweet.myTweets`: [`MyTweets`], [`Tweet`]
//! - [`stats`] — `api.tweet.stats`: [`Stats`], [`Stat`]
//!
//! Every field is an `Option` and every record derives `Default`, so a
//! record can be filled incrementally and checked only when it is
//! complete. Validation itself lives in `nsa-core`; each record only
//! provides its descriptor and field views.
//!
//! ```
//! use nsa_core::{IsoDate, Record};
//! use nsa_records::{MyTweets, Tweet};
//!
//! let date = IsoDate::parse("2024-05-01").unwrap();
//! let payload = MyTweets::default()
//!     .with_id("u-1")
//!     .with_username("ada")
//!     .with_tweets(vec![Tweet::new("t-1", date, "hello"), Tweet::default().with_id("t-2")]);
//!
//! let err = payload.validate().unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "An element of Tweets is invalid: Date is a required property of Tweet"
//! );
//! ```

pub mod my_tweets;
pub mod profile;
pub mod stats;

pub use my_tweets::{MyTweets, Tweet, MY_TWEETS_SCHEMA, TWEET_SCHEMA};
pub use profile::{Profile, PROFILE_SCHEMA};
pub use stats::{Stat, Stats, STATS_SCHEMA, STAT_SCHEMA};

use nsa_core::RecordSchema;

/// Descriptors of every record type in this crate, nested types included.
pub fn all_schemas() -> [&'static RecordSchema; 5] {
    [
        &PROFILE_SCHEMA,
        &TWEET_SCHEMA,
        &MY_TWEETS_SCHEMA,
        &STAT_SCHEMA,
        &STATS_SCHEMA,
    ]
}

/// Look up a record descriptor by record name, e.g. `"Tweet"`.
pub fn schema_by_name(name: &str) -> Option<&'static RecordSchema> {
    all_schemas().into_iter().find(|s| s.name == name)
}
