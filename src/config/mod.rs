//! Application configuration management

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use url::Url;

/// Gateway configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port for the gateway
    pub port: u16,

    /// Base URL of the REST backend
    pub backend_url: Url,

    /// Deadline applied to each incoming GraphQL request
    pub request_timeout: Duration,

    /// Timeout for a single backend call
    pub backend_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(v) => v.parse().context("PORT must be a port number")?,
            Err(_) => 4000,
        };

        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let backend_url = Url::parse(&backend_url).context("BACKEND_URL must be a valid URL")?;

        let request_timeout = Duration::from_secs(env_secs("REQUEST_TIMEOUT_SECS", 30)?);
        let backend_timeout = Duration::from_secs(env_secs("BACKEND_TIMEOUT_SECS", 10)?);

        Ok(Self {
            port,
            backend_url,
            request_timeout,
            backend_timeout,
        })
    }
}

fn env_secs(key: &str, default: u64) -> Result<u64> {
    match env::var(key) {
        Ok(v) => v
            .parse()
            .with_context(|| format!("{key} must be a number of seconds")),
        Err(_) => Ok(default),
    }
}
