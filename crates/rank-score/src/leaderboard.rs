use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rank_model::{Rankable, RankingResult};

use crate::calculate_final_ranking;

/// A leaderboard entry: the caller's item plus its score breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<I> {
    #[serde(flatten)]
    pub item: I,
    pub ranking: RankingResult,
}

fn rank_item<I: Rankable + ?Sized>(item: &I, now: DateTime<Utc>) -> RankingResult {
    calculate_final_ranking(item.content(), item.variant(), item.boost_multiplier(), now)
}

/// Orders `a` and `b` by final score, highest first.
///
/// `Ordering::Less` means `a` ranks above `b`, so this can be passed straight
/// to `sort_by`.
pub fn compare_rankings<A, B>(a: &A, b: &B, now: DateTime<Utc>) -> Ordering
where
    A: Rankable + ?Sized,
    B: Rankable + ?Sized,
{
    rank_item(b, now).final_score.cmp(&rank_item(a, now).final_score)
}

/// Final score of `b` minus final score of `a`. Positive when `b` ranks first.
///
/// Saturates at the `i64` bounds instead of overflowing.
pub fn ranking_delta<A, B>(a: &A, b: &B, now: DateTime<Utc>) -> i64
where
    A: Rankable + ?Sized,
    B: Rankable + ?Sized,
{
    rank_item(b, now).final_score.saturating_sub(rank_item(a, now).final_score)
}

/// Scores every item at `now` and sorts them by final score, highest first.
///
/// Items with equal scores keep their input order.
pub fn get_ranking_leaderboard<I, It>(items: It, now: DateTime<Utc>) -> Vec<Ranked<I>>
where
    I: Rankable,
    It: IntoIterator<Item = I>,
{
    leaderboard_by(items, now, |_, _| Ordering::Equal)
}

/// Like [`get_ranking_leaderboard`], but orders equal scores with `tiebreak`.
pub fn leaderboard_by<I, It, F>(items: It, now: DateTime<Utc>, mut tiebreak: F) -> Vec<Ranked<I>>
where
    I: Rankable,
    It: IntoIterator<Item = I>,
    F: FnMut(&I, &I) -> Ordering,
{
    let mut ranked = items
        .into_iter()
        .map(|item| {
            let ranking = rank_item(&item, now);
            Ranked { item, ranking }
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| {
        b.ranking
            .final_score
            .cmp(&a.ranking.final_score)
            .then_with(|| tiebreak(&a.item, &b.item))
    });
    log::debug!("Ranked {} items at {}", ranked.len(), now);
    ranked
}
