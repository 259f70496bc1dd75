use std::path::PathBuf;

use serde::Deserialize;

use gigboard_core::config::Config;

/// Resource API configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Store URL, SQLite or PostgreSQL. Env var: `DATABASE_URL`.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// TCP port for the HTTP server (default 5000). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Directory holding `users.json`, `orders.json` and `offers.json`.
    /// Env var: `SEED_DIR`.
    #[serde(default = "default_seed_dir")]
    pub seed_dir: PathBuf,
}

impl Config for ApiConfig {}

fn default_database_url() -> String {
    "sqlite://gigboard.db?mode=rwc".to_owned()
}

fn default_api_port() -> u16 {
    5000
}

fn default_seed_dir() -> PathBuf {
    PathBuf::from("data")
}
