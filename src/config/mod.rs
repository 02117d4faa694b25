pub mod notifications;

use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::config::notifications::{NotificationPolicy, DEFAULT_BADGE_CAP, DEFAULT_DURATION_MS};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: String,
    pub default_duration_ms: u64,
    pub badge_cap: usize,
    pub cors_allow_any: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let http_addr = env_string("HTTP_ADDR", "0.0.0.0:8080");
        SocketAddr::from_str(&http_addr).map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        let badge_cap = env_parsed("NOTIFY_BADGE_CAP", DEFAULT_BADGE_CAP)?;
        if badge_cap == 0 {
            return Err(anyhow!("invalid NOTIFY_BADGE_CAP: must be at least 1"));
        }

        Ok(Self {
            http_addr,
            default_duration_ms: env_parsed("NOTIFY_DEFAULT_DURATION_MS", DEFAULT_DURATION_MS)?,
            badge_cap,
            cors_allow_any: env_parsed("CORS_ALLOW_ANY", false)?,
        })
    }

    pub fn notification_policy(&self) -> NotificationPolicy {
        NotificationPolicy {
            default_duration: Duration::from_millis(self.default_duration_ms),
            badge_cap: self.badge_cap,
        }
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Unset or blank falls back to `default`; anything else must parse.
fn env_parsed<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) if !value.trim().is_empty() => value
            .trim()
            .parse::<T>()
            .map_err(|err| anyhow!("invalid {}: {}", key, err)),
        _ => Ok(default),
    }
}
