#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown boost tier x{0}, expected one of x1, x2, x5, x10")]
    UnknownBoostTier(u32),
    #[error("unknown boost tier {0:?}")]
    UnknownBoostTierName(String),
}
