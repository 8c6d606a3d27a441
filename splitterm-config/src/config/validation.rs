//! Semantic validation of parsed configuration values.

use super::Config;
use crate::error::ConfigError;

impl Config {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opacity > 100 {
            return Err(ConfigError::Validation(format!(
                "opacity must be between 0 and 100, got {}",
                self.opacity
            )));
        }
        if !self.tab_zoom.is_finite() || self.tab_zoom < 0.0 {
            return Err(ConfigError::Validation(format!(
                "tab_zoom must be a non-negative number, got {}",
                self.tab_zoom
            )));
        }
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::Validation(format!(
                "initial size must be at least 1x1, got {}x{}",
                self.cols, self.rows
            )));
        }
        if !self.divider_width.is_finite() || self.divider_width < 0.0 {
            return Err(ConfigError::Validation(format!(
                "divider_width must be a non-negative number, got {}",
                self.divider_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_zero_size_rejected() {
        let config = Config::default().with_size(0, 24);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_tab_zoom_rejected() {
        let mut config = Config::default();
        config.tab_zoom = -1.0;
        assert!(config.validate().is_err());
    }
}
