//! Decoder options.

use serde::{Deserialize, Serialize};

/// Options that change what [`decode`](crate::decode) reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoderConfig {
    /// Drop keep-alive (`SYN`) frames instead of reporting them.
    pub suppress_keepalive: bool,
    /// Frame id copied into every report as `<fid=N>`.
    pub correlation_id: Option<u32>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            suppress_keepalive: true,
            correlation_id: None,
        }
    }
}

impl DecoderConfig {
    pub fn with_correlation_id(mut self, id: u32) -> Self {
        self.correlation_id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suppresses_keepalive() {
        let config = DecoderConfig::default();
        assert!(config.suppress_keepalive);
        assert_eq!(config.correlation_id, None);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: DecoderConfig = serde_json::from_str(r#"{"correlation_id": 7}"#).unwrap();
        assert!(config.suppress_keepalive);
        assert_eq!(config.correlation_id, Some(7));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<DecoderConfig>(r#"{"verbose": true}"#).is_err());
    }

    #[test]
    fn test_with_correlation_id() {
        let config = DecoderConfig::default().with_correlation_id(42);
        assert_eq!(config.correlation_id, Some(42));
    }
}
