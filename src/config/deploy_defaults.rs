use super::traits::ConfigSection;
use crate::deploy::aliyun_clb::parse_listener_port;
use crate::error::{CertDeployError, Result};
use serde::{Deserialize, Serialize};

/// Values written into a new Alibaba Cloud CLB deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClbDefaults {
    pub region: String,
    pub listener_port: String,
}

impl Default for ClbDefaults {
    fn default() -> Self {
        Self {
            region: "cn-hangzhou".to_string(),
            listener_port: "443".to_string(),
        }
    }
}

impl ConfigSection for ClbDefaults {
    fn section_name() -> &'static str {
        "aliyun_clb"
    }

    fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(CertDeployError::Configuration(
                "Default region must not be empty".to_string()
            ));
        }
        if parse_listener_port(&self.listener_port).is_none() {
            return Err(CertDeployError::Configuration(format!(
                "Default listener port must be between 1 and 65534, got {:?}",
                self.listener_port
            )));
        }
        Ok(())
    }
}
