use anyhow::{Context, Result};

const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on the size of `raw_text` accepted by the parse endpoint.
    pub max_input_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_input_bytes: parse_max_input_bytes(std::env::var("MAX_INPUT_BYTES").ok())?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
        }
    }
}

fn parse_max_input_bytes(raw: Option<String>) -> Result<usize> {
    match raw {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("MAX_INPUT_BYTES must be a byte count, got '{value}'")),
        None => Ok(DEFAULT_MAX_INPUT_BYTES),
    }
}
