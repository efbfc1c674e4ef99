use super::{deploy_defaults::ClbDefaults, traits::ConfigSection, ui::UiConfig};
use crate::error::{CertDeployError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix for environment overrides, e.g. `CERTDEPLOY_UI__LOCALE=zh`.
pub const ENV_PREFIX: &str = "CERTDEPLOY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub aliyun_clb: ClbDefaults,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.ui.validate()?;
        self.aliyun_clb.validate()?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CertDeployError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| CertDeployError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        *self.write()? = config;
        Ok(())
    }

    /// Loads the optional settings file, then applies environment overrides.
    pub fn load_layered<P: AsRef<Path>>(&self, path: Option<P>) -> Result<()> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            log::info!("Reading settings from {}", path.as_ref().display());
            builder = builder.add_source(::config::File::from(path.as_ref()).required(false));
        }

        let config: AppConfig = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        config.validate()?;

        *self.write()? = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config = self.read()?;
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| CertDeployError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)
            .map_err(|e| CertDeployError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn get(&self) -> Result<AppConfig> {
        Ok(self.read()?.clone())
    }

    /// Applies `f` to a copy and keeps it only if it still validates.
    pub fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write()?;
        let mut updated = config.clone();
        f(&mut updated);
        updated.validate()?;
        *config = updated;
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, AppConfig>> {
        self.config
            .read()
            .map_err(|_| CertDeployError::Configuration("Settings lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AppConfig>> {
        self.config
            .write()
            .map_err(|_| CertDeployError::Configuration("Settings lock poisoned".to_string()))
    }
}
