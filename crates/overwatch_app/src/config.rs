use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Name of the variable carrying the engine base URL.
pub const API_URL_VAR: &str = "OVERWATCH_API_URL";
/// Optional override of the poll cadence, in milliseconds.
const POLL_MS_VAR: &str = "OVERWATCH_POLL_MS";

const DEFAULT_POLL_MS: u64 = 900;

/// Runtime configuration, environment driven.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absolute base URL of the analysis engine.
    pub api_base_url: String,
    pub poll_interval: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var(API_URL_VAR).with_context(|| {
            format!("{API_URL_VAR} must point at the analysis engine, e.g. http://127.0.0.1:8077")
        })?;
        Self::from_values(&raw, std::env::var(POLL_MS_VAR).ok().as_deref())
    }

    fn from_values(base_url: &str, poll_ms: Option<&str>) -> Result<Self> {
        let api_base_url = base_url.trim().trim_end_matches('/').to_string();
        if api_base_url.is_empty() {
            bail!("{API_URL_VAR} is empty; the console needs an absolute engine URL");
        }

        let poll_interval = match poll_ms {
            Some(raw) => {
                let ms: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("{POLL_MS_VAR} must be a millisecond count"))?;
                if ms == 0 {
                    bail!("{POLL_MS_VAR} must be at least 1");
                }
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_POLL_MS),
        };

        Ok(Self {
            api_base_url,
            poll_interval,
        })
    }
}
