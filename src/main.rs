use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skillswap_algo::config::Settings;
use skillswap_algo::core::matcher;
use skillswap_algo::models::MatchesResponse;
use skillswap_algo::services::SnapshotStore;

#[derive(Parser, Debug)]
#[command(name = "skillswap-algo")]
#[command(about = "Rank skill-exchange matches for a user from a profile snapshot")]
struct Args {
    /// Id of the querying user
    #[arg(long)]
    user: String,

    /// Path to the profile snapshot (overrides configuration)
    #[arg(long)]
    snapshot: Option<String>,

    /// Maximum number of matches to return (overrides configuration)
    #[arg(long)]
    limit: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let settings = Settings::load().context("failed to load configuration")?;

    // Initialize logging; env vars override the configured defaults.
    // Logs go to stderr so the JSON result stays alone on stdout.
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&log_level))
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting SkillSwap matching run...");

    let snapshot_path = args
        .snapshot
        .unwrap_or_else(|| settings.snapshot.path.clone());

    let store = SnapshotStore::from_path(&snapshot_path)
        .with_context(|| format!("failed to load profile snapshot from {}", snapshot_path))?;

    info!("Loaded {} profiles from {}", store.len(), snapshot_path);

    let profile = store
        .require(&args.user)
        .context("unknown querying user")?;

    // Cap limit to prevent oversized responses
    let limit = args
        .limit
        .unwrap_or(settings.matching.default_limit)
        .min(settings.matching.max_limit) as usize;

    let report = matcher::rank_profiles(profile, store.profiles());

    info!(
        "Ranked {} matches for user {} (from {} candidates)",
        report.matches.len(),
        args.user,
        report.total_candidates
    );

    let mut matches = report.matches;
    matches.truncate(limit);

    let response = MatchesResponse {
        user_id: args.user,
        matches,
        total_candidates: report.total_candidates,
        generated_at: chrono::Utc::now(),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
