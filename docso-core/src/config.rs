use std::time::Duration;

use anyhow::{Context as _, bail};

use docso_utils::pagination::{DEFAULT_IDLE_SECS, DEFAULT_SWEEP_SECS, JanitorConfig};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub discord_token: String,
    /// Base URL of the documentation mirror (`<base>/<package>.json`).
    pub docs_mirror_url: String,
    pub fetch_timeout: Duration,
    pub janitor: JanitorConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{key} must be set"))
        };
        let seconds = |key: &str, default: u64| -> anyhow::Result<Duration> {
            let Some(raw) = lookup(key) else {
                return Ok(Duration::from_secs(default));
            };
            let secs = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{key} must be a whole number of seconds, got {raw:?}"))?;
            if secs == 0 {
                bail!("{key} must be greater than zero");
            }
            Ok(Duration::from_secs(secs))
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            docs_mirror_url: required("DOCS_MIRROR_URL")?,
            fetch_timeout: seconds("DOCS_FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)?,
            janitor: JanitorConfig {
                idle_threshold: seconds("PAGES_IDLE_SECS", DEFAULT_IDLE_SECS)?,
                sweep_interval: seconds("PAGES_SWEEP_SECS", DEFAULT_SWEEP_SECS)?,
            },
        })
    }
}
