use rank_model::{ContentRecord, ContentVariant};

use crate::round::round_score;

/// Lowest base score any content can have.
const BASE_SCORE_FLOOR: i64 = 50;
const UNKNOWN_VARIANT_SCORE: f64 = 100.0;

fn live_stream_score(c: &ContentRecord) -> f64 {
    500.0
        + (c.viewer_count * 10.0).min(500.0)
        + (c.total_bids * 15.0).min(300.0)
        + c.bid_amount_total
        + c.duration_minutes.min(120.0)
        + c.likes * 2.0
        + c.comments * 3.0
        + c.shares * 5.0
}

fn post_score(c: &ContentRecord) -> f64 {
    200.0
        + (c.views * 0.5).min(200.0)
        + c.likes * 3.0
        + c.comments * 5.0
        + c.shares * 8.0
        + c.saves * 4.0
        + c.click_throughs * 6.0
}

fn profile_score(c: &ContentRecord) -> f64 {
    // avg_rating is on a 0-5 scale but not checked
    100.0
        + (c.followers * 0.5).min(150.0)
        + (c.total_sales * 5.0).min(200.0)
        + (c.avg_rating / 5.0) * 50.0
        + (c.reviews_count * 2.0).min(100.0)
        + (c.profile_views * 0.2).min(100.0)
        + c.days_active.min(365.0)
}

/// Engagement score of `content` before boosts and decay.
///
/// Missing counters count as zero, and an unknown variant scores a flat 100.
/// The result is never below [`BASE_SCORE_FLOOR`].
pub fn calculate_base_score(content: &ContentRecord, variant: &ContentVariant) -> i64 {
    let raw = match variant {
        ContentVariant::LiveStream => live_stream_score(content),
        ContentVariant::Post => post_score(content),
        ContentVariant::Profile => profile_score(content),
        ContentVariant::Unknown(name) => {
            log::trace!("No score formula for content type {:?}, using fallback", name);
            UNKNOWN_VARIANT_SCORE
        }
    };
    round_score(raw).max(BASE_SCORE_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(viewers: f64, bids: f64, amount: f64, minutes: f64) -> ContentRecord {
        ContentRecord {
            viewer_count: viewers,
            total_bids: bids,
            bid_amount_total: amount,
            duration_minutes: minutes,
            ..Default::default()
        }
    }

    #[test]
    fn live_stream_sums_capped_terms() {
        let score = calculate_base_score(&live(50.0, 10.0, 500.0, 30.0), &ContentVariant::LiveStream);
        assert_eq!(score, 1680);

        let score = calculate_base_score(&live(5.0, 2.0, 50.0, 10.0), &ContentVariant::LiveStream);
        assert_eq!(score, 640);
    }

    #[test]
    fn live_stream_caps_viewers_bids_and_duration() {
        let capped = live(10_000.0, 10_000.0, 0.0, 10_000.0);
        // 500 + 500 + 300 + 0 + 120
        assert_eq!(calculate_base_score(&capped, &ContentVariant::LiveStream), 1420);
    }

    #[test]
    fn live_stream_bid_amount_is_uncapped() {
        let rich = live(0.0, 0.0, 25_000.0, 0.0);
        assert_eq!(calculate_base_score(&rich, &ContentVariant::LiveStream), 25_500);
    }

    #[test]
    fn live_stream_counts_social_engagement() {
        let content = ContentRecord {
            likes: 10.0,
            comments: 4.0,
            shares: 2.0,
            ..Default::default()
        };
        // 500 + 20 + 12 + 10
        assert_eq!(calculate_base_score(&content, &ContentVariant::LiveStream), 542);
    }

    #[test]
    fn empty_post_scores_its_start_value() {
        assert_eq!(calculate_base_score(&ContentRecord::new(), &ContentVariant::Post), 200);
    }

    #[test]
    fn post_weights_and_view_cap() {
        let content = ContentRecord {
            views: 1_000.0,
            likes: 1.0,
            comments: 1.0,
            shares: 1.0,
            saves: 1.0,
            click_throughs: 1.0,
            ..Default::default()
        };
        // 200 + 200 + 3 + 5 + 8 + 4 + 6
        assert_eq!(calculate_base_score(&content, &ContentVariant::Post), 426);
    }

    #[test]
    fn post_rounds_half_views() {
        let content = ContentRecord {
            views: 3.0,
            ..Default::default()
        };
        // 201.5 rounds up
        assert_eq!(calculate_base_score(&content, &ContentVariant::Post), 202);
    }

    #[test]
    fn profile_with_perfect_rating() {
        let content = ContentRecord {
            avg_rating: 5.0,
            ..Default::default()
        };
        assert_eq!(calculate_base_score(&content, &ContentVariant::Profile), 150);
    }

    #[test]
    fn profile_caps_every_counter() {
        let content = ContentRecord {
            followers: 1e6,
            total_sales: 1e6,
            avg_rating: 4.0,
            reviews_count: 1e6,
            profile_views: 1e6,
            days_active: 1e6,
            ..Default::default()
        };
        // 100 + 150 + 200 + 40 + 100 + 100 + 365
        assert_eq!(calculate_base_score(&content, &ContentVariant::Profile), 1055);
    }

    #[test]
    fn out_of_range_rating_is_not_rejected() {
        let high = ContentRecord {
            avg_rating: 10.0,
            ..Default::default()
        };
        assert_eq!(calculate_base_score(&high, &ContentVariant::Profile), 200);

        let negative = ContentRecord {
            avg_rating: -10.0,
            ..Default::default()
        };
        // 100 - 100 = 0, floored
        assert_eq!(calculate_base_score(&negative, &ContentVariant::Profile), BASE_SCORE_FLOOR);
    }

    #[test]
    fn unknown_variant_uses_fallback() {
        let content = live(50.0, 10.0, 500.0, 30.0);
        let variant = ContentVariant::from_name("unknown_type");
        assert_eq!(calculate_base_score(&content, &variant), 100);
    }

    #[test]
    fn floor_applies_to_negative_counters() {
        let content = ContentRecord {
            bid_amount_total: -10_000.0,
            ..Default::default()
        };
        assert_eq!(calculate_base_score(&content, &ContentVariant::LiveStream), BASE_SCORE_FLOOR);
    }
}
