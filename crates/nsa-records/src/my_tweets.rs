//! # api.tweet.myTweets
//!
//! User Tweets payload: a user's tweets plus an optional pinned tweet.

use nsa_core::{FieldKind, FieldSpec, FieldValue, IsoDate, Record, RecordSchema};
use serde::{Deserialize, Serialize};

/// Descriptor for [`Tweet`].
pub static TWEET_SCHEMA: RecordSchema = RecordSchema {
    name: "Tweet",
    description: "A single tweet",
    fields: &[
        FieldSpec::required("Id", "id", FieldKind::String),
        FieldSpec::required("Date", "date", FieldKind::Date),
        FieldSpec::required("Body", "body", FieldKind::String),
    ],
};

/// Descriptor for [`MyTweets`].
pub static MY_TWEETS_SCHEMA: RecordSchema = RecordSchema {
    name: "MyTweets",
    description: "User Tweets payload",
    fields: &[
        FieldSpec::required("Id", "id", FieldKind::String),
        FieldSpec::required("Username", "username", FieldKind::String),
        FieldSpec::required("Tweets", "tweets", FieldKind::List("Tweet")),
        FieldSpec::optional("PinnedTweet", "pinnedTweet", FieldKind::Record("Tweet")),
    ],
};

/// A single tweet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tweet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Tweet {
    /// A tweet with all fields set.
    pub fn new(id: impl Into<String>, date: IsoDate, body: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            date: Some(date),
            body: Some(body.into()),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_date(mut self, date: IsoDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Record for Tweet {
    fn schema(&self) -> &'static RecordSchema {
        &TWEET_SCHEMA
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::scalar(&self.id),
            FieldValue::scalar(&self.date),
            FieldValue::scalar(&self.body),
        ]
    }
}

/// User Tweets payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTweets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Present-but-empty is distinct from absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tweets: Option<Vec<Tweet>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinned_tweet: Option<Tweet>,
}

impl MyTweets {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_tweets(mut self, tweets: Vec<Tweet>) -> Self {
        self.tweets = Some(tweets);
        self
    }

    /// Append a tweet, making the collection present if it was absent.
    pub fn push_tweet(&mut self, tweet: Tweet) {
        self.tweets.get_or_insert_with(Vec::new).push(tweet);
    }

    pub fn with_pinned_tweet(mut self, tweet: Tweet) -> Self {
        self.pinned_tweet = Some(tweet);
        self
    }
}

impl Record for MyTweets {
    fn schema(&self) -> &'static RecordSchema {
        &MY_TWEETS_SCHEMA
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::scalar(&self.id),
            FieldValue::scalar(&self.username),
            FieldValue::list(self.tweets.as_deref()),
            FieldValue::record(self.pinned_tweet.as_ref()),
        ]
    }
}
