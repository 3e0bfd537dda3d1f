use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables. Every
/// variable has a default, so a bare environment starts the service against
/// `./data` and `./static`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the reference CSV tables.
    pub data_dir: PathBuf,
    /// Directory holding the `icon/` and `school_icon/` asset subdirectories.
    pub static_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            static_dir: PathBuf::from(env_or("STATIC_DIR", "static")),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
