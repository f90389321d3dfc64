use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use eyre::{Result, WrapErr};

use rank_score::Ranker;

mod campaign;
mod feed;
mod watch;

use feed::TieBreak;

#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// JSON array of feed entries, `-` for stdin
    #[clap(short, long, env = "RANK_INPUT", default_value = "-")]
    input: PathBuf,
    /// TOML file listing boost campaigns
    #[clap(short, long, env = "RANK_CONFIG")]
    config: Option<PathBuf>,
    /// Rank as of this instant instead of the system clock
    #[clap(long)]
    now: Option<DateTime<Utc>>,
    #[clap(short, long)]
    limit: Option<usize>,
    #[clap(long, default_value = "none")]
    tiebreak: TieBreak,
    /// Re-rank every N seconds until interrupted
    #[clap(short, long)]
    watch: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let Args {
        input,
        config,
        now,
        limit,
        tiebreak,
        watch,
    } = Args::parse();

    env_logger::init();

    let campaigns = if let Some(path) = &config {
        campaign::CampaignConfig::from_config(path)
            .await
            .wrap_err_with(|| format!("Failed to load boost config {}", path.display()))?
    } else {
        Default::default()
    };
    log::debug!("Loaded {} boost campaigns", campaigns.len());

    let ranker = if let Some(now) = now {
        log::info!("Ranking as of {}", now);
        Ranker::fixed(now)
    } else {
        Ranker::new()
    };

    let options = feed::RankOptions { tiebreak, limit };
    if let Some(secs) = watch {
        if now.is_some() {
            log::warn!("Clock is fixed, rankings will only change when the feed does");
        }
        let period = std::time::Duration::from_secs(secs.max(1));
        watch::run_watch_loop(&input, &campaigns, &ranker, options, period).await
    } else {
        let items = feed::load_feed(&input)
            .await
            .wrap_err_with(|| format!("Failed to load feed {}", input.display()))?;
        let board = feed::rank_feed(&ranker, items, &campaigns, options);
        feed::write_lines(&board)?;
        Ok(())
    }
}
