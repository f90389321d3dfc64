use std::cmp::Ordering;
use std::io::Write;
use std::path::Path;

use eyre::Result;
use tokio::io::AsyncReadExt;

use rank_score::{
    model::{Rankable, RankingInput},
    Ranked,
    Ranker,
};

use crate::campaign::CampaignConfig;

/// Secondary order for entries with equal final scores.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TieBreak {
    /// Keep feed order
    None,
    Id,
    Newest,
}

impl TieBreak {
    fn order(self, a: &RankingInput, b: &RankingInput) -> Ordering {
        match self {
            Self::None => Ordering::Equal,
            Self::Id => a.id().cmp(&b.id()),
            Self::Newest => b.content().created_at.cmp(&a.content().created_at),
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct RankOptions {
    pub tiebreak: TieBreak,
    pub limit: Option<usize>,
}

pub async fn load_feed(path: &Path) -> Result<Vec<RankingInput>> {
    let data = if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        tokio::fs::read(path).await?
    };
    let items = serde_json::from_slice::<Vec<RankingInput>>(&data)?;
    log::debug!("Loaded {} feed entries", items.len());
    Ok(items)
}

/// Resolves campaign boosts and ranks the feed at a single clock reading.
pub fn rank_feed(
    ranker: &Ranker,
    mut items: Vec<RankingInput>,
    campaigns: &CampaignConfig,
    options: RankOptions,
) -> Vec<Ranked<RankingInput>> {
    let now = ranker.now();
    campaigns.apply(&mut items, now);

    let tiebreak = options.tiebreak;
    let mut board = rank_score::leaderboard_by(items, now, |a, b| tiebreak.order(a, b));
    if let Some(limit) = options.limit {
        board.truncate(limit);
    }
    board
}

/// Writes one JSON object per line, best first.
pub fn write_lines(board: &[Ranked<RankingInput>]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for entry in board {
        serde_json::to_writer(&mut out, entry)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes the whole board as one JSON array line.
pub fn write_snapshot(board: &[Ranked<RankingInput>]) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, board)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use rank_score::model::{ContentRecord, ContentVariant};

    use super::*;

    fn now() -> DateTime<Utc> {
        "2026-10-19T12:00:00Z".parse().unwrap()
    }

    fn post(id: &str, created_hours_ago: i64) -> RankingInput {
        RankingInput::new(ContentVariant::Post, ContentRecord::new().created_at(now() - Duration::hours(created_hours_ago)))
            .with_id(id)
    }

    fn ids(board: &[Ranked<RankingInput>]) -> Vec<&str> {
        board.iter().map(|r| r.item.id().unwrap()).collect()
    }

    fn options(tiebreak: TieBreak) -> RankOptions {
        RankOptions { tiebreak, limit: None }
    }

    #[test]
    fn tiebreak_parses_from_cli_names() {
        assert_eq!("none".parse::<TieBreak>().unwrap(), TieBreak::None);
        assert_eq!("newest".parse::<TieBreak>().unwrap(), TieBreak::Newest);
        assert!("oldest".parse::<TieBreak>().is_err());
    }

    #[test]
    fn ties_follow_selected_order() {
        let items = vec![post("b", 3), post("a", 2), post("c", 1)];
        let ranker = Ranker::fixed(now());
        let campaigns = CampaignConfig::default();

        let board = rank_feed(&ranker, items.clone(), &campaigns, options(TieBreak::None));
        assert_eq!(ids(&board), ["b", "a", "c"]);
        let board = rank_feed(&ranker, items.clone(), &campaigns, options(TieBreak::Id));
        assert_eq!(ids(&board), ["a", "b", "c"]);
        let board = rank_feed(&ranker, items, &campaigns, options(TieBreak::Newest));
        assert_eq!(ids(&board), ["c", "a", "b"]);
    }

    #[test]
    fn campaigns_and_limit_apply() {
        let campaigns: CampaignConfig = toml::from_str(
            r#"
            [[campaigns]]
            content_id = "old"
            tier = 10
            ends_at = "2026-10-20T00:00:00Z"
            "#,
        )
        .unwrap();
        let items = vec![post("fresh", 1), post("old", 100), post("mid", 10)];
        let ranker = Ranker::fixed(now());
        let board = rank_feed(
            &ranker,
            items,
            &campaigns,
            RankOptions {
                tiebreak: TieBreak::None,
                limit: Some(2),
            },
        );
        assert_eq!(ids(&board), ["old", "fresh"]);
        // 200 x10 = 2000, decayed to half
        assert_eq!(board[0].ranking.final_score, 1000);
    }
}
