use serde::{Deserialize, Serialize};

use crate::{ContentRecord, ContentVariant};

fn default_boost_multiplier() -> f64 {
    1.0
}

/// Anything the leaderboard can rank.
pub trait Rankable {
    fn content(&self) -> &ContentRecord;
    fn variant(&self) -> &ContentVariant;

    /// Multiplier of the currently active boost, `1.0` when there is none.
    fn boost_multiplier(&self) -> f64 {
        1.0
    }
}

impl<T: Rankable + ?Sized> Rankable for &T {
    fn content(&self) -> &ContentRecord {
        (**self).content()
    }

    fn variant(&self) -> &ContentVariant {
        (**self).variant()
    }

    fn boost_multiplier(&self) -> f64 {
        (**self).boost_multiplier()
    }
}

/// One feed entry as supplied by the caller.
///
/// Fields the engine doesn't know about are kept in `extra` and written back
/// out unchanged. `ranking` is reserved for the leaderboard's score breakdown;
/// an incoming `ranking` field is discarded.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    content: ContentRecord,
    #[serde(rename = "type")]
    variant: ContentVariant,
    #[serde(default = "default_boost_multiplier")]
    boost_multiplier: f64,
    #[serde(default, rename = "ranking", skip_serializing)]
    _ranking: Option<serde_json::Value>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

impl RankingInput {
    pub fn new(variant: ContentVariant, content: ContentRecord) -> Self {
        Self {
            id: None,
            content,
            variant,
            boost_multiplier: default_boost_multiplier(),
            _ranking: None,
            extra: Default::default(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_boost(mut self, boost_multiplier: f64) -> Self {
        self.boost_multiplier = boost_multiplier;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn extra(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.extra
    }

    pub fn set_boost_multiplier(&mut self, boost_multiplier: f64) {
        self.boost_multiplier = boost_multiplier;
    }
}

impl Rankable for RankingInput {
    fn content(&self) -> &ContentRecord {
        &self.content
    }

    fn variant(&self) -> &ContentVariant {
        &self.variant
    }

    fn boost_multiplier(&self) -> f64 {
        self.boost_multiplier
    }
}
