//! # api.tweet.stats
//!
//! Tweet stats: a dated snapshot of a tweet's engagement counters.

use nsa_core::{FieldKind, FieldSpec, FieldValue, IsoDate, Record, RecordSchema};
use serde::{Deserialize, Serialize};

/// Descriptor for [`Stat`].
pub static STAT_SCHEMA: RecordSchema = RecordSchema {
    name: "Stat",
    description: "Engagement counters",
    fields: &[
        FieldSpec::required("Views", "views", FieldKind::Integer),
        FieldSpec::required("Likes", "likes", FieldKind::Integer),
        FieldSpec::required("Retweets", "retweets", FieldKind::Integer),
        FieldSpec::required("Responses", "responses", FieldKind::Integer),
    ],
};

/// Descriptor for [`Stats`].
pub static STATS_SCHEMA: RecordSchema = RecordSchema {
    name: "Stats",
    description: "Tweet stats",
    fields: &[
        FieldSpec::required("Id", "id", FieldKind::String),
        FieldSpec::required("Date", "date", FieldKind::Date),
        FieldSpec::required("Stats", "stats", FieldKind::Record("Stat")),
    ],
};

/// Engagement counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retweets: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<i64>,
}

impl Stat {
    /// A snapshot with every counter set.
    pub fn new(views: i64, likes: i64, retweets: i64, responses: i64) -> Self {
        Self {
            views: Some(views),
            likes: Some(likes),
            retweets: Some(retweets),
            responses: Some(responses),
        }
    }
}

impl Record for Stat {
    fn schema(&self) -> &'static RecordSchema {
        &STAT_SCHEMA
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::scalar(&self.views),
            FieldValue::scalar(&self.likes),
            FieldValue::scalar(&self.retweets),
            FieldValue::scalar(&self.responses),
        ]
    }
}

/// Tweet stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<IsoDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stat>,
}

impl Stats {
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_date(mut self, date: IsoDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_stats(mut self, stats: Stat) -> Self {
        self.stats = Some(stats);
        self
    }
}

impl Record for Stats {
    fn schema(&self) -> &'static RecordSchema {
        &STATS_SCHEMA
    }

    fn field_values(&self) -> Vec<FieldValue<'_>> {
        vec![
            FieldValue::scalar(&self.id),
            FieldValue::scalar(&self.date),
            FieldValue::record(self.stats.as_ref()),
        ]
    }
}
