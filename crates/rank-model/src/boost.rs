use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Purchasable visibility boost.
///
/// The scoring engine accepts any multiplier; tiers only exist so callers that
/// sell boosts cannot hand out arbitrary values. Deserializes from either the
/// factor (`5`) or the name (`"x5"`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(strum::EnumString, strum::Display)]
#[derive(Serialize)]
#[serde(into = "u32")]
pub enum BoostTier {
    #[strum(to_string = "x1", serialize = "none")]
    None,
    #[strum(serialize = "x2")]
    Double,
    #[strum(serialize = "x5")]
    Quintuple,
    #[strum(serialize = "x10")]
    Decuple,
}

impl BoostTier {
    pub fn from_name(name: &str) -> Result<Self, Error> {
        name.parse()
            .map_err(|_| Error::UnknownBoostTierName(name.to_owned()))
    }

    pub fn multiplier(self) -> f64 {
        u32::from(self) as f64
    }
}

impl Default for BoostTier {
    fn default() -> Self {
        Self::None
    }
}

impl TryFrom<u32> for BoostTier {
    type Error = Error;

    fn try_from(factor: u32) -> Result<Self, Self::Error> {
        Ok(match factor {
            1 => Self::None,
            2 => Self::Double,
            5 => Self::Quintuple,
            10 => Self::Decuple,
            other => return Err(Error::UnknownBoostTier(other)),
        })
    }
}

impl<'de> Deserialize<'de> for BoostTier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Factor(u32),
            Name(String),
        }

        let tier = match Repr::deserialize(deserializer)? {
            Repr::Factor(factor) => Self::try_from(factor),
            Repr::Name(name) => Self::from_name(&name),
        };
        tier.map_err(serde::de::Error::custom)
    }
}

impl From<BoostTier> for u32 {
    fn from(tier: BoostTier) -> Self {
        match tier {
            BoostTier::None => 1,
            BoostTier::Double => 2,
            BoostTier::Quintuple => 5,
            BoostTier::Decuple => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_map_to_multipliers() {
        assert_eq!(BoostTier::None.multiplier(), 1.0);
        assert_eq!(BoostTier::Double.multiplier(), 2.0);
        assert_eq!(BoostTier::Quintuple.multiplier(), 5.0);
        assert_eq!(BoostTier::Decuple.multiplier(), 10.0);
    }

    #[test]
    fn rejects_unsold_factor() {
        assert!(matches!(BoostTier::try_from(3u32), Err(Error::UnknownBoostTier(3))));
        assert_eq!(BoostTier::try_from(10u32).unwrap(), BoostTier::Decuple);
    }

    #[test]
    fn parses_display_names() {
        assert_eq!(BoostTier::from_name("x5").unwrap(), BoostTier::Quintuple);
        assert_eq!(BoostTier::from_name("none").unwrap(), BoostTier::None);
        assert_eq!(BoostTier::Decuple.to_string(), "x10");
        assert!(BoostTier::from_name("x3").is_err());
    }

    #[test]
    fn deserializes_from_factor_or_name() {
        let tier: BoostTier = serde_json::from_str("2").unwrap();
        assert_eq!(tier, BoostTier::Double);
        let tier: BoostTier = serde_json::from_str("\"x10\"").unwrap();
        assert_eq!(tier, BoostTier::Decuple);
        assert!(serde_json::from_str::<BoostTier>("4").is_err());
        assert!(serde_json::from_str::<BoostTier>("\"x4\"").is_err());
    }
}
