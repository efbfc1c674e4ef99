use super::traits::ConfigSection;
use crate::error::{CertDeployError, Result};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub locale: Locale,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            window_width: 560.0,
            window_height: 640.0,
        }
    }
}

impl ConfigSection for UiConfig {
    fn section_name() -> &'static str {
        "ui"
    }

    fn validate(&self) -> Result<()> {
        if self.window_width <= 0.0 || self.window_height <= 0.0 {
            return Err(CertDeployError::Configuration(
                "Window size must be positive".to_string()
            ));
        }
        Ok(())
    }
}
