use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::ideas::format::FormatMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare `cargo run` next to the bundled
/// assets works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub ideas_file: PathBuf,
    pub humans_file: PathBuf,
    pub template_file: PathBuf,
    pub format_mode: FormatMode,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ideas_file: env_or("IDEAS_FILE", "assets/ideas.txt").into(),
            humans_file: env_or("HUMANS_FILE", "assets/humans.txt").into(),
            template_file: env_or("PAGE_TEMPLATE", "assets/index.html").into(),
            format_mode: FormatMode::parse(&env_or("FORMAT_MODE", "strip"))
                .context("Invalid FORMAT_MODE")?,
            port: env_or("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
