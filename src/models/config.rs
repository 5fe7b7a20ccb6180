//! Configuration model.
//!
//! Values are layered: built-in defaults, then `config.toml` in the user's
//! config directory, then environment variables, then command-line flags
//! (applied by the binary).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_HOST: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_PROMPT: &str = "Generate a CSS selector for a login button";

/// Probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Ollama base URL.
    pub host: String,
    /// Model used by the generation check.
    pub model: String,
    /// Prompt used by the generation check.
    pub prompt: String,
    /// Per-request timeout in seconds. `None` keeps the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            timeout_secs: None,
        }
    }
}

impl ProbeConfig {
    /// Apply `OLLAMA_HOST`, `OLLAMA_MODEL` and `OLLAMA_TIMEOUT` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides using an arbitrary variable lookup.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("OLLAMA_HOST").filter(|s| !s.trim().is_empty()) {
            self.host = host;
        }
        if let Some(model) = lookup("OLLAMA_MODEL").filter(|s| !s.trim().is_empty()) {
            self.model = model;
        }
        // Non-numeric values are ignored
        if let Some(timeout) = lookup("OLLAMA_TIMEOUT").and_then(|s| s.trim().parse().ok()) {
            self.timeout_secs = Some(timeout);
        }
        self
    }

    /// Base URL with a scheme and without a trailing slash.
    pub fn base_url(&self) -> String {
        normalize_base_url(&self.host)
    }
}

/// Normalize a host setting into a base URL.
///
/// `127.0.0.1:11434` becomes `http://127.0.0.1:11434`, and trailing slashes
/// are dropped so endpoint paths can be appended directly.
pub fn normalize_base_url(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{}", host)
    }
}

/// Get the configuration file path.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ollama_probe")
        .join("config.toml")
}

/// Load configuration from the default config file.
pub fn load_config() -> ProbeConfig {
    load_config_from(&config_path())
}

/// Load configuration from a file, falling back to defaults.
pub fn load_config_from(path: &Path) -> ProbeConfig {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring invalid config {}: {}", path.display(), e),
            }
        }
    }

    ProbeConfig::default()
}
