use serde::{Deserialize, Serialize};

use crate::ContentVariant;

/// Full scoring breakdown of one piece of content at one instant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingResult {
    pub base_score: i64,
    pub boost_multiplier: f64,
    pub boosted_score: i64,
    pub time_decay: f64,
    pub final_score: i64,
    #[serde(rename = "type")]
    pub variant: ContentVariant,
}
