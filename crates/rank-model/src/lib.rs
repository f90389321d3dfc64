mod boost;
mod content;
mod error;
mod input;
mod result;

pub use boost::BoostTier;
pub use content::{ContentRecord, ContentVariant};
pub use error::Error;
pub use input::{Rankable, RankingInput};
pub use result::RankingResult;
