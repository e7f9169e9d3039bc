//! Console settings file.
//!
//! ```yaml
//! family: SOLD_02
//! decoder:
//!   suppress_keepalive: false
//!   correlation_id: 3
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use jbc_protocol::{DecoderConfig, Family};
use serde::Deserialize;

/// Defaults applied before command-line flags.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Family used when `--family` is not given. Accepts backend names,
    /// model strings and firmware banners.
    pub family: Option<String>,
    pub decoder: DecoderConfig,
}

impl ConsoleConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("invalid console configuration")
    }

    /// Read `path`, or return the defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = Self::from_yaml(&text)
            .with_context(|| format!("failed to load {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded configuration");
        Ok(config)
    }

    /// The configured default family, or [`Family::Unknown`].
    pub fn default_family(&self) -> Family {
        self.family
            .as_deref()
            .map_or(Family::Unknown, crate::parse_family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConsoleConfig::from_yaml("{}").unwrap();
        assert_eq!(config.default_family(), Family::Unknown);
        assert_eq!(config.decoder, DecoderConfig::default());
    }

    #[test]
    fn test_full_file() {
        let config = ConsoleConfig::from_yaml(
            "family: JTSE\ndecoder:\n  suppress_keepalive: false\n  correlation_id: 3\n",
        )
        .unwrap();
        assert_eq!(config.default_family(), Family::HotAir);
        assert!(!config.decoder.suppress_keepalive);
        assert_eq!(config.decoder.correlation_id, Some(3));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(ConsoleConfig::from_yaml("famly: SOLD_02\n").is_err());
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = ConsoleConfig::load(Some(Path::new("/nonexistent/jbc.yaml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/jbc.yaml"));
    }

    #[test]
    fn test_no_file() {
        let config = ConsoleConfig::load(None).unwrap();
        assert!(config.decoder.suppress_keepalive);
    }
}
