use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{link::DEFAULT_PAYEE_NAME, render::RenderOptions};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error("payee name must not be empty")]
    EmptyPayeeName,
    #[error("qr size must be greater than zero")]
    ZeroQrSize,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder sent as the `pn` parameter. Not derived from user input.
    pub payee_name: String,
    pub qr: RenderOptions,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payee_name.trim().is_empty() {
            return Err(ConfigError::EmptyPayeeName);
        }
        if self.qr.size_px == 0 {
            return Err(ConfigError::ZeroQrSize);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

pub fn default_config() -> Config {
    Config {
        payee_name: DEFAULT_PAYEE_NAME.to_string(),
        qr: RenderOptions::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ErrorCorrectionLevel;

    #[test]
    fn test_default_config() {
        let config = default_config();
        assert_eq!(config.payee_name, "Payment");
        assert_eq!(config.qr.size_px, 200);
        assert_eq!(config.qr.error_correction, ErrorCorrectionLevel::H);
        assert!(config.qr.include_margin);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = default_config();
        config.payee_name = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigError::EmptyPayeeName));

        let mut config = default_config();
        config.qr.size_px = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroQrSize));
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"qr":{"error_correction":"M"}}"#).unwrap();
        assert_eq!(config.payee_name, "Payment");
        assert_eq!(config.qr.error_correction, ErrorCorrectionLevel::M);
        assert_eq!(config.qr.size_px, 200);
    }
}
