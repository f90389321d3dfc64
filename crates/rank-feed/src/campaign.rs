use std::path::Path;

use chrono::{DateTime, Utc};
use eyre::Result;
use serde::Deserialize;

use rank_score::model::{BoostTier, RankingInput};

/// Boost campaigns bought for feed entries.
///
/// ```toml
/// [[campaigns]]
/// content_id = "stream-42"
/// tier = 5          # or "x5"
/// starts_at = "2026-10-19T18:00:00Z"
/// ends_at = "2026-10-20T18:00:00Z"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct CampaignConfig {
    #[serde(default)]
    campaigns: Vec<Campaign>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Campaign {
    pub content_id: String,
    pub tier: BoostTier,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: DateTime<Utc>,
}

impl Campaign {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.starts_at.map_or(true, |start| start <= now) && now < self.ends_at
    }
}

impl CampaignConfig {
    pub async fn from_config(config: impl AsRef<Path>) -> Result<Self> {
        let data = tokio::fs::read(config).await?;
        let config = toml::from_slice::<CampaignConfig>(&data)?;
        Ok(config)
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    /// Highest tier among campaigns for `content_id` running at `now`.
    ///
    /// `None` when the content has no campaigns at all, `Some(BoostTier::None)`
    /// when all of its campaigns are outside their window.
    pub fn active_tier(&self, content_id: &str, now: DateTime<Utc>) -> Option<BoostTier> {
        let mut campaigns = self
            .campaigns
            .iter()
            .filter(|c| c.content_id == content_id)
            .peekable();
        campaigns.peek()?;
        Some(
            campaigns
                .filter(|c| c.is_active(now))
                .map(|c| c.tier)
                .max()
                .unwrap_or_default(),
        )
    }

    /// Replaces the boost of every entry that has campaigns with the tier
    /// active at `now`. Entries without campaigns keep their own multiplier.
    pub fn apply(&self, items: &mut [RankingInput], now: DateTime<Utc>) {
        for item in items {
            let tier = match item.id().and_then(|id| self.active_tier(id, now)) {
                Some(tier) => tier,
                None => continue,
            };
            log::debug!("Entry {}: boost {}", item.id().unwrap_or_default(), tier);
            item.set_boost_multiplier(tier.multiplier());
        }
    }
}
