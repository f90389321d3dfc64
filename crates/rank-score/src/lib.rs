pub use rank_model as model;

mod base;
mod boost;
mod decay;
mod leaderboard;
mod ranker;
mod ranking;
mod round;

pub use base::calculate_base_score;
pub use boost::{apply_boost, boosted_score};
pub use leaderboard::{
    compare_rankings,
    get_ranking_leaderboard,
    leaderboard_by,
    ranking_delta,
    Ranked,
};
pub use ranker::Ranker;
pub use ranking::calculate_final_ranking;
