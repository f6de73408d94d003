use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use candidate::config::Config;
use candidate::dictionary::WordList;
use candidate::profile::{Headshots, Profile};
use candidate::promoter::HttpPromoter;
use candidate::{Listing, ProfileEvaluator};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting candidate v{}", env!("CARGO_PKG_VERSION"));

    let headshots = match &config.headshots_dir {
        Some(dir) => Headshots::from_dir(dir)
            .with_context(|| format!("Failed to read headshots from {}", dir.display()))?,
        None => Headshots::default(),
    };

    let mut profile = Profile::leon_brown(headshots);
    profile.set_currently_learning(["AWS Solutions Architect", "Go"])?;
    info!("Profile ready for {}", profile.full_name());

    let words = match &config.dictionary_path {
        Some(path) => WordList::from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?,
        None => WordList::builtin(),
    };
    info!("Word list loaded ({} words)", words.len());

    let promoter = HttpPromoter::new(Duration::from_secs(config.promoter_timeout_secs))?;
    let evaluator = ProfileEvaluator::new(profile, Arc::new(words), Arc::new(promoter));

    let listing = read_listing(&config)?;
    let outcome = evaluator.pursue(&listing).await?;

    if outcome.applied {
        info!(
            "Applied to {} ({} matched skills)",
            listing.opening.company_name,
            outcome.report.matched_skills.len()
        );
    } else {
        warn!("Did not apply to {}", listing.opening.company_name);
    }

    Ok(())
}

fn read_listing(config: &Config) -> Result<Listing> {
    let path = &config.job_posting_path;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job posting {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Job posting {} is not valid JSON", path.display()))
}
