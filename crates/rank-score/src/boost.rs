use rank_model::{ContentRecord, ContentVariant};

use crate::{calculate_base_score, round::round_score};

/// Multiplies `base_score` by the active boost and rounds.
///
/// The multiplier isn't validated; zero and negative values pass through.
pub fn apply_boost(base_score: i64, boost_multiplier: f64) -> i64 {
    round_score(base_score as f64 * boost_multiplier)
}

/// Base score with boost applied, without time decay.
///
/// Used to refresh a single item on presence changes (a viewer joining or
/// leaving a stream) without rebuilding a whole leaderboard.
pub fn boosted_score(content: &ContentRecord, variant: &ContentVariant, boost_multiplier: f64) -> i64 {
    apply_boost(calculate_base_score(content, variant), boost_multiplier)
}
