use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of content being ranked. Selects the base score formula.
///
/// Unrecognized kinds are kept as [`ContentVariant::Unknown`] instead of being
/// rejected; they rank with a fixed fallback base score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
#[derive(Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ContentVariant {
    LiveStream,
    Post,
    Profile,
    #[strum(default)]
    Unknown(String),
}

impl ContentVariant {
    pub fn from_name(name: &str) -> Self {
        Self::from(name.to_owned())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::LiveStream => "live_stream",
            Self::Post => "post",
            Self::Profile => "profile",
            Self::Unknown(s) => s,
        }
    }
}

impl std::fmt::Display for ContentVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ContentVariant {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Self::Unknown(s))
    }
}

impl From<ContentVariant> for String {
    fn from(variant: ContentVariant) -> Self {
        match variant {
            ContentVariant::Unknown(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

/// Raw engagement counters of one piece of content.
///
/// The record is flat: each variant reads only its own fields, missing fields
/// count as zero and unknown fields are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContentRecord {
    // live_stream
    pub viewer_count: f64,
    pub total_bids: f64,
    pub bid_amount_total: f64,
    pub duration_minutes: f64,

    // live_stream, post
    pub likes: f64,
    pub comments: f64,
    pub shares: f64,

    // post
    pub views: f64,
    pub saves: f64,
    pub click_throughs: f64,

    // profile
    pub followers: f64,
    pub total_sales: f64,
    pub avg_rating: f64,
    pub reviews_count: f64,
    pub profile_views: f64,
    pub days_active: f64,

    pub created_at: Option<DateTime<Utc>>,
}

impl ContentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }
}
