use std::path::PathBuf;

use anyhow::{Context, Result};

/// Runtime configuration loaded from environment variables.
/// Fails at startup if `JOB_POSTING_PATH` is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub job_posting_path: PathBuf,
    pub dictionary_path: Option<PathBuf>,
    pub headshots_dir: Option<PathBuf>,
    pub promoter_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            job_posting_path: require_env("JOB_POSTING_PATH")?.into(),
            dictionary_path: optional_env("DICTIONARY_PATH").map(PathBuf::from),
            headshots_dir: optional_env("HEADSHOTS_DIR").map(PathBuf::from),
            promoter_timeout_secs: std::env::var("PROMOTER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<u64>()
                .context("PROMOTER_TIMEOUT_SECS must be a whole number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
