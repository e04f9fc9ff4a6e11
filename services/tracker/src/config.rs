use serde::Deserialize;

use fittrack_core::config::Config;

/// Tracker service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct TrackerConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by CORS, comma-separated. Env var: `CORS_ALLOWED_ORIGINS`.
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    /// Apply pending migrations before serving (default true). Env var: `RUN_MIGRATIONS`.
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

impl Config for TrackerConfig {}

fn default_port() -> u16 {
    3000
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:4200".to_owned()]
}

fn default_run_migrations() -> bool {
    true
}
