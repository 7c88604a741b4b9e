// File: src/config.rs
// Purpose: Engine configuration from itinera.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form engine configuration
///
/// Immutable once constructed; the controller takes it at construction so
/// tests can substitute the webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    #[serde(default)]
    pub webhook: WebhookConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub submit: SubmitConfig,
}

/// Webhook endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// Endpoint the trip request is POSTed to
    #[serde(default = "default_url")]
    pub url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Summary panel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Symbol prefixed to the budget line
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Submit control labels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitConfig {
    #[serde(default = "default_busy_label")]
    pub busy_label: String,

    #[serde(default = "default_idle_label")]
    pub idle_label: String,
}

// Default values
fn default_url() -> String {
    "https://mounika1104.app.n8n.cloud/webhook/3e06cb0f-cbc2-4718-a254-7fe88693df8f".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_busy_label() -> String {
    "⏳ Generating…".to_string()
}

fn default_idle_label() -> String {
    "✨ Generate itinerary".to_string()
}

// Default implementations
impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            busy_label: default_busy_label(),
            idle_label: default_idle_label(),
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from the default path (./itinera.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("itinera.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.webhook.url.starts_with("https://"));
        assert_eq!(config.webhook.timeout_secs, 30);
        assert_eq!(config.summary.currency_symbol, "$");
        assert_eq!(config.submit.idle_label, "✨ Generate itinerary");
    }

    #[test]
    fn test_empty_config() {
        let config = toml::from_str::<FormConfig>("").unwrap_or_default();
        assert_eq!(config.webhook.timeout_secs, 30);
        assert_eq!(config.summary.currency_symbol, "$");
    }

    #[test]
    fn test_webhook_override() {
        let toml = r#"
            [webhook]
            url = "http://127.0.0.1:8080/hook"
            timeout_secs = 5

            [summary]
            currency_symbol = "€"
        "#;
        let config: FormConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.webhook.url, "http://127.0.0.1:8080/hook");
        assert_eq!(config.webhook.timeout_secs, 5);
        assert_eq!(config.summary.currency_symbol, "€");
        // Untouched sections keep their defaults
        assert_eq!(config.submit.busy_label, "⏳ Generating…");
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config = FormConfig::load("no-such-itinera.toml").unwrap();
        assert_eq!(config.summary.currency_symbol, "$");
    }
}
