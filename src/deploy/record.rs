use serde::{Deserialize, Serialize};

/// A deployment record as owned by the console's editing context.
///
/// `config` holds the provider-specific settings and is absent until the
/// first edit or the initial defaults are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployRecord<C> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<C>,
}

impl<C> DeployRecord<C> {
    /// Record that has not been saved yet.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            id: None,
            name: String::new(),
            provider: provider.into(),
            config: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_config(mut self, config: C) -> Self {
        self.config = Some(config);
        self
    }

    pub fn is_new(&self) -> bool {
        self.id.as_deref().map_or(true, |id| id.trim().is_empty())
    }
}

impl<C: Clone + Default> DeployRecord<C> {
    pub fn config_or_default(&self) -> C {
        self.config.clone().unwrap_or_default()
    }
}
