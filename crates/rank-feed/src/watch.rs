use std::collections::HashMap;
use std::path::Path;

use eyre::{Result, WrapErr};
use tokio::signal::unix as unix_signal;

use rank_score::{model::RankingInput, Ranked, Ranker};

use crate::campaign::CampaignConfig;
use crate::feed::{self, RankOptions};

fn positions(board: &[Ranked<RankingInput>]) -> HashMap<String, usize> {
    board
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| entry.item.id().map(|id| (id.to_owned(), idx)))
        .collect()
}

fn log_moves(previous: &HashMap<String, usize>, current: &HashMap<String, usize>) {
    for (id, &pos) in current {
        match previous.get(id) {
            Some(&old) if old != pos => log::info!("{}: #{} -> #{}", id, old + 1, pos + 1),
            Some(_) => {}
            None => log::info!("{}: new at #{}", id, pos + 1),
        }
    }
    for id in previous.keys().filter(|id| !current.contains_key(*id)) {
        log::info!("{}: dropped off", id);
    }
}

/// Re-reads and re-ranks the feed every `period` until a termination signal
/// arrives. Decay buckets move with the clock, so the order can change even
/// when the feed file doesn't.
pub async fn run_watch_loop(
    input: &Path,
    campaigns: &CampaignConfig,
    ranker: &Ranker,
    options: RankOptions,
    period: std::time::Duration,
) -> Result<()> {
    let mut sigterm = unix_signal::signal(unix_signal::SignalKind::terminate())
        .wrap_err("Failed to listen SIGTERM")?;
    let mut sigint = unix_signal::signal(unix_signal::SignalKind::interrupt())
        .wrap_err("Failed to listen SIGINT")?;
    let mut sigquit = unix_signal::signal(unix_signal::SignalKind::quit())
        .wrap_err("Failed to listen SIGQUIT")?;

    let shutdown = async move {
        let sigterm = sigterm.recv();
        tokio::pin!(sigterm);
        let sigint = sigint.recv();
        tokio::pin!(sigint);
        let sigquit = sigquit.recv();
        tokio::pin!(sigquit);

        futures_util::future::select_all([sigterm, sigint, sigquit]).await;
    };
    tokio::pin!(shutdown);

    let mut timer = tokio::time::interval(period);
    let mut previous = HashMap::new();

    log::info!("Started ranking loop, every {} s", period.as_secs());
    loop {
        tokio::select! {
            _ = timer.tick() => {},
            _ = &mut shutdown => {
                log::info!("Stopping ranking loop");
                return Ok(());
            },
        }

        log::trace!("Running feed rank");
        let items = match feed::load_feed(input).await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Feed load failed: {}", e);
                continue;
            }
        };
        let board = feed::rank_feed(ranker, items, campaigns, options);
        let current = positions(&board);
        log_moves(&previous, &current);
        previous = current;

        feed::write_snapshot(&board)?;
    }
}

#[cfg(test)]
mod tests {
    use rank_score::model::{ContentRecord, ContentVariant};

    use super::*;

    #[test]
    fn positions_skip_entries_without_id() {
        let ranker = Ranker::fixed("2026-10-19T12:00:00Z".parse().unwrap());
        let board = ranker.leaderboard(vec![
            RankingInput::new(ContentVariant::LiveStream, ContentRecord::new()).with_id("s"),
            RankingInput::new(ContentVariant::Post, ContentRecord::new()),
            RankingInput::new(ContentVariant::Profile, ContentRecord::new()).with_id("p"),
        ]);
        let positions = positions(&board);
        assert_eq!(positions.len(), 2);
        assert_eq!(positions["s"], 0);
        assert_eq!(positions["p"], 2);
    }
}
