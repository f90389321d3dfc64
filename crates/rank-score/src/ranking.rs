use chrono::{DateTime, Utc};

use rank_model::{ContentRecord, ContentVariant, RankingResult};

use crate::{apply_boost, calculate_base_score, decay::time_decay, round::round_score};

/// Scores `content` as seen at `now`.
///
/// The boosted score is rounded before decay is applied, and the decayed
/// score is rounded again.
pub fn calculate_final_ranking(
    content: &ContentRecord,
    variant: &ContentVariant,
    boost_multiplier: f64,
    now: DateTime<Utc>,
) -> RankingResult {
    let base_score = calculate_base_score(content, variant);
    let boosted_score = apply_boost(base_score, boost_multiplier);
    let time_decay = time_decay(content.created_at, now);
    let final_score = round_score(boosted_score as f64 * time_decay);

    log::trace!(
        "Ranked {}: base {} x{} = {}, decay {} -> {}",
        variant,
        base_score,
        boost_multiplier,
        boosted_score,
        time_decay,
        final_score,
    );

    RankingResult {
        base_score,
        boost_multiplier,
        boosted_score,
        time_decay,
        final_score,
        variant: variant.clone(),
    }
}
