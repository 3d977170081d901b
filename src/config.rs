use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub chat_base_url: String,
    pub greeting_delay_ms: u64,
    pub frame_interval_ms: u64,
    pub smoothing_factor: f64,
    /// No timeout unless set explicitly.
    pub request_timeout_secs: Option<u64>,
    pub storage: StorageBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_base_url: "http://localhost:8000".to_string(),
            greeting_delay_ms: 1500,
            frame_interval_ms: 16,
            smoothing_factor: 0.05,
            request_timeout_secs: None,
            storage: StorageBackend::Memory,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `ASHWATTH_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ASHWATTH_CHAT_URL") {
            config.chat_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(delay) = parse_var(&lookup, "ASHWATTH_GREETING_DELAY_MS") {
            config.greeting_delay_ms = delay;
        }
        if let Some(interval) = parse_var(&lookup, "ASHWATTH_FRAME_INTERVAL_MS") {
            config.frame_interval_ms = interval;
        }
        if let Some(timeout) = parse_var(&lookup, "ASHWATTH_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = Some(timeout);
        }
        if let Some(storage) = parse_var(&lookup, "ASHWATTH_STORAGE") {
            config.storage = storage;
        }

        config
    }

    pub fn greeting_delay(&self) -> Duration {
        Duration::from_millis(self.greeting_delay_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        // A zero interval would spin the frame loop.
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring unparseable value for {}: {:?}", key, raw);
            None
        }
    }
}
