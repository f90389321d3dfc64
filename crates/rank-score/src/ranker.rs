use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use rank_model::{Rankable, RankingResult};

use crate::{calculate_final_ranking, leaderboard, Ranked};

type ClockFn = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Ranks content against a clock.
///
/// The clock defaults to the system time and is read once per call, so every
/// item of one leaderboard decays against the same instant. Nothing is cached
/// between calls.
#[non_exhaustive]
pub struct Ranker {
    clock_fn: ClockFn,
}

impl std::fmt::Debug for Ranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ranker").finish_non_exhaustive()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            clock_fn: Box::new(Utc::now),
        }
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranker frozen at `now`.
    pub fn fixed(now: DateTime<Utc>) -> Self {
        let mut ranker = Self::new();
        ranker.clock_fn(move || now);
        ranker
    }

    pub fn clock_fn(&mut self, f: impl Fn() -> DateTime<Utc> + Send + Sync + 'static) {
        self.clock_fn = Box::new(f);
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock_fn)()
    }

    pub fn final_ranking<I: Rankable + ?Sized>(&self, item: &I) -> RankingResult {
        calculate_final_ranking(item.content(), item.variant(), item.boost_multiplier(), self.now())
    }

    pub fn compare<A, B>(&self, a: &A, b: &B) -> Ordering
    where
        A: Rankable + ?Sized,
        B: Rankable + ?Sized,
    {
        leaderboard::compare_rankings(a, b, self.now())
    }

    pub fn leaderboard<I, It>(&self, items: It) -> Vec<Ranked<I>>
    where
        I: Rankable,
        It: IntoIterator<Item = I>,
    {
        leaderboard::get_ranking_leaderboard(items, self.now())
    }

    pub fn leaderboard_by<I, It, F>(&self, items: It, tiebreak: F) -> Vec<Ranked<I>>
    where
        I: Rankable,
        It: IntoIterator<Item = I>,
        F: FnMut(&I, &I) -> Ordering,
    {
        leaderboard::leaderboard_by(items, self.now(), tiebreak)
    }
}
