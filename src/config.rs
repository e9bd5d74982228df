//! Client configuration resolved from the build environment.
//!
//! The bundle is static, so settings are baked in at compile time through
//! `option_env!` and fall back to local-development defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 800;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the remote API, without a trailing slash.
    pub api_base_url: String,
    /// How long the success notification stays up before auth forms navigate on.
    pub redirect_delay: Duration,
}

impl ClientConfig {
    /// Build config from compile-time environment variables.
    ///
    /// Optional:
    /// - `PROJECTS_API_BASE_URL`: default `http://localhost:3000`
    /// - `PROJECTS_REDIRECT_DELAY_MS`: default 800
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PROJECTS_API_BASE_URL"), option_env!("PROJECTS_REDIRECT_DELAY_MS"))
    }

    pub fn from_values(api_base_url: Option<&str>, redirect_delay_ms: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let delay_ms = redirect_delay_ms
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);

        Self { api_base_url, redirect_delay: Duration::from_millis(delay_ms) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
