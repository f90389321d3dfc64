use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = (1000 * 60 * 60) as f64;

/// Upper bound in hours (inclusive) and the factor applied within it.
const DECAY_STEPS: [(f64, f64); 5] = [
    (4.0, 1.0),
    (12.0, 0.9),
    (24.0, 0.8),
    (48.0, 0.7),
    (72.0, 0.6),
];
const DECAY_FLOOR: f64 = 0.5;

pub(crate) fn hours_between(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

pub(crate) fn decay_for_hours(hours_ago: f64) -> f64 {
    DECAY_STEPS
        .iter()
        .find(|&&(limit, _)| hours_ago <= limit)
        .map(|&(_, factor)| factor)
        .unwrap_or(DECAY_FLOOR)
}

/// Recency factor of content created at `created_at`, as seen at `now`.
///
/// Content without a creation time is treated as brand new.
pub(crate) fn time_decay(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f64 {
    match created_at {
        Some(at) => decay_for_hours(hours_between(at, now)),
        None => {
            log::debug!("Content has no creation time, skipping decay");
            1.0
        }
    }
}
