//! Runtime configuration: delivery host, expected credentials and probe limits.
//!
//! Loaded from an optional JSON file, then overridden by the environment
//! (`ACCESS_TOKEN`, `IMAGEKIT_ID`, `IKFORM_BASE_URL`), which is where the secret store
//! hands credentials to the process.

use std::{path::Path, time::Duration};

use anyhow::Context as _;

use crate::{
    access::gate::Secrets,
    foundation::core::IMAGEKIT_BASE_URL,
    foundation::error::{IkError, IkResult},
};

/// Environment variable holding the expected `access_token`.
pub const ENV_ACCESS_TOKEN: &str = "ACCESS_TOKEN";
/// Environment variable holding the expected `imagekit_id`.
pub const ENV_IMAGEKIT_ID: &str = "IMAGEKIT_ID";
/// Environment variable overriding [`AppConfig::base_url`].
pub const ENV_BASE_URL: &str = "IKFORM_BASE_URL";

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Limits of the metadata probe.
pub struct ProbeConfig {
    /// Request timeout in milliseconds; `None` waits indefinitely.
    pub timeout_ms: Option<u64>,
    /// Give up when no header decodes within this many body bytes.
    pub max_header_bytes: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: None,
            max_header_bytes: 1 << 20,
        }
    }
}

impl ProbeConfig {
    /// Timeout as a [`Duration`], if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Everything the form needs besides the user's input.
pub struct AppConfig {
    /// Image delivery host, e.g. `https://ik.imagekit.io`.
    pub base_url: String,
    /// Credentials the access gate compares against.
    pub secrets: Secrets,
    /// Metadata probe limits.
    pub probe: ProbeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: IMAGEKIT_BASE_URL.to_string(),
            secrets: Secrets::default(),
            probe: ProbeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON config file.
    pub fn from_json_file(path: &Path) -> IkResult<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Parse JSON config text.
    pub fn from_json_str(raw: &str) -> IkResult<Self> {
        serde_json::from_str(raw).map_err(|e| IkError::serde(format!("config: {e}")))
    }

    /// Apply overrides from a variable lookup (normally [`std::env::var`]).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_ACCESS_TOKEN) {
            self.secrets.access_token = v;
        }
        if let Some(v) = lookup(ENV_IMAGEKIT_ID) {
            self.secrets.imagekit_id = v;
        }
        if let Some(v) = lookup(ENV_BASE_URL) {
            self.base_url = v;
        }
    }

    /// Optional file, then process environment, then [`AppConfig::validate`].
    pub fn load(path: Option<&Path>) -> IkResult<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        };
        cfg.apply_env(|k| std::env::var(k).ok());
        cfg.validate()?;
        tracing::debug!(base_url = %cfg.base_url, "loaded config");
        Ok(cfg)
    }

    /// Reject empty secrets and non-http(s) hosts.
    pub fn validate(&self) -> IkResult<()> {
        if self.secrets.access_token.is_empty() {
            return Err(IkError::config(format!(
                "secrets.access_token must be set (or {ENV_ACCESS_TOKEN})"
            )));
        }
        if self.secrets.imagekit_id.is_empty() {
            return Err(IkError::config(format!(
                "secrets.imagekit_id must be set (or {ENV_IMAGEKIT_ID})"
            )));
        }
        let base = url::Url::parse(&self.base_url).map_err(|e| {
            IkError::config(format!("base_url '{}' is not a valid URL: {e}", self.base_url))
        })?;
        if !matches!(base.scheme(), "http" | "https") || base.host_str().is_none() {
            return Err(IkError::config(format!(
                "base_url must be an http(s) URL with a host, got '{}'",
                self.base_url
            )));
        }
        if self.probe.max_header_bytes == 0 {
            return Err(IkError::config("probe.max_header_bytes must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
