use anyhow::{Context, Result};

/// Default session TTL: one hour.
const DEFAULT_SESSION_TTL_MS: i64 = 3_600_000;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Max age of a stored generation session before the sweep evicts it.
    pub session_ttl_ms: i64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            session_ttl_ms: std::env::var("SESSION_TTL_MS")
                .unwrap_or_else(|_| DEFAULT_SESSION_TTL_MS.to_string())
                .parse::<i64>()
                .context("SESSION_TTL_MS must be a valid integer (milliseconds)")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
