//! Startup configuration for the landing page behavior

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::LandingResult;

/// Build-time override, e.g.
/// `NOVAMED_LANDING_CONFIG='{"ack_reset_delay_ms":5000}' dx build`
const CONFIG_ENV: Option<&str> = option_env!("NOVAMED_LANDING_CONFIG");

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// A section becomes a candidate for the active highlight once its top
    /// edge is at or above this many pixels from the viewport top.
    pub scroll_threshold_px: f64,
    /// How long the contact form shows its acknowledgement.
    pub ack_reset_delay_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 100.0,
            ack_reset_delay_ms: 3000,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> LandingResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Resolve the configuration baked in at build time, falling back to
    /// defaults when it is absent or malformed.
    pub fn load() -> Self {
        match CONFIG_ENV {
            Some(raw) => Self::from_json(raw).unwrap_or_else(|err| {
                tracing::warn!("ignoring NOVAMED_LANDING_CONFIG: {}", err);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn ack_reset_delay(&self) -> Duration {
        Duration::from_millis(self.ack_reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_threshold_px, 100.0);
        assert_eq!(config.ack_reset_delay(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(r#"{"ack_reset_delay_ms": 500}"#).unwrap();
        assert_eq!(config.ack_reset_delay_ms, 500);
        assert_eq!(config.scroll_threshold_px, 100.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(LandingConfig::from_json("{ threshold").is_err());
    }
}
