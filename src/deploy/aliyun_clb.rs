//! Alibaba Cloud CLB (classic load balancer) deployment target.

use super::errors::FieldErrors;
use super::traits::ProviderConfig;
use crate::config::ClbDefaults;
use crate::error::CertDeployError;
use crate::i18n::Localizer;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PROVIDER: &str = "aliyun-clb";

const FIELD_NAMES: [&str; 4] = ["region", "resourceType", "loadbalancerId", "listenerPort"];

/// Which CLB entity the certificate is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Certificate,
    Loadbalancer,
    Listener,
}

impl ResourceType {
    pub const ALL: [ResourceType; 3] = [
        ResourceType::Certificate,
        ResourceType::Loadbalancer,
        ResourceType::Listener,
    ];

    /// Options offered by the form's selector.
    pub const SELECTABLE: [ResourceType; 2] = [ResourceType::Loadbalancer, ResourceType::Listener];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Certificate => "certificate",
            ResourceType::Loadbalancer => "loadbalancer",
            ResourceType::Listener => "listener",
        }
    }

    pub fn option_label_key(&self) -> String {
        format!(
            "domain.deployment.form.aliyun_clb_resource_type.option.{}.label",
            self.as_str()
        )
    }

    pub fn requires_loadbalancer_id(&self) -> bool {
        matches!(self, ResourceType::Loadbalancer | ResourceType::Listener)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = CertDeployError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|rt| rt.as_str() == s)
            .ok_or_else(|| CertDeployError::InvalidResourceType(s.to_string()))
    }
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClbField {
    Region,
    ResourceType,
    LoadbalancerId,
    ListenerPort,
}

impl ClbField {
    pub const ALL: [ClbField; 4] = [
        ClbField::Region,
        ClbField::ResourceType,
        ClbField::LoadbalancerId,
        ClbField::ListenerPort,
    ];

    /// Key used in the record JSON and in `FieldErrors`.
    pub fn name(&self) -> &'static str {
        match self {
            ClbField::Region => FIELD_NAMES[0],
            ClbField::ResourceType => FIELD_NAMES[1],
            ClbField::LoadbalancerId => FIELD_NAMES[2],
            ClbField::ListenerPort => FIELD_NAMES[3],
        }
    }

    fn slug(&self) -> &'static str {
        match self {
            ClbField::Region => "region",
            ClbField::ResourceType => "resource_type",
            ClbField::LoadbalancerId => "loadbalancer_id",
            ClbField::ListenerPort => "listener_port",
        }
    }

    pub fn label_key(&self) -> String {
        format!("domain.deployment.form.aliyun_clb_{}.label", self.slug())
    }

    /// Also the key of the field's validation message.
    pub fn placeholder_key(&self) -> String {
        format!("domain.deployment.form.aliyun_clb_{}.placeholder", self.slug())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AliyunClbConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_resource_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_type: Option<ResourceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loadbalancer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listener_port: Option<String>,
}

impl AliyunClbConfig {
    /// Settings written into a brand-new record: region and port only.
    pub fn initial(defaults: &ClbDefaults) -> Self {
        Self {
            region: Some(defaults.region.clone()),
            listener_port: Some(defaults.listener_port.clone()),
            ..Self::default()
        }
    }

    pub fn listener_port_visible(&self) -> bool {
        self.resource_type == Some(ResourceType::Listener)
    }

    fn region_error(&self) -> bool {
        !is_filled(self.region.as_deref())
    }

    fn loadbalancer_id_error(&self) -> bool {
        match self.resource_type {
            Some(rt) if rt.requires_loadbalancer_id() => !is_filled(self.loadbalancer_id.as_deref()),
            _ => false,
        }
    }

    fn listener_port_error(&self) -> bool {
        match self.resource_type {
            Some(ResourceType::Listener) => self
                .listener_port
                .as_deref()
                .and_then(parse_listener_port)
                .is_none(),
            _ => false,
        }
    }
}

impl ProviderConfig for AliyunClbConfig {
    fn provider() -> &'static str {
        PROVIDER
    }

    fn fields() -> &'static [&'static str] {
        &FIELD_NAMES
    }

    fn validate(&self, t: &dyn Localizer) -> FieldErrors {
        let failed = |field: ClbField, bad: bool| bad.then(|| t.t(&field.placeholder_key()));

        let mut errors = FieldErrors::new();
        errors.set(
            ClbField::Region.name(),
            failed(ClbField::Region, self.region_error()),
        );
        errors.set(
            ClbField::ResourceType.name(),
            failed(ClbField::ResourceType, self.resource_type.is_none()),
        );
        errors.set(
            ClbField::LoadbalancerId.name(),
            failed(ClbField::LoadbalancerId, self.loadbalancer_id_error()),
        );
        errors.set(
            ClbField::ListenerPort.name(),
            failed(ClbField::ListenerPort, self.listener_port_error()),
        );
        errors
    }
}

/// Accepts an integer port strictly between 0 and 65535.
pub fn parse_listener_port(raw: &str) -> Option<u16> {
    raw.trim()
        .parse::<u16>()
        .ok()
        .filter(|port| *port > 0 && *port < u16::MAX)
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

// Unknown tags load as "unset" so the record stays editable and the
// resource type shows up as a field error instead of a load failure.
fn lenient_resource_type<'de, D>(deserializer: D) -> Result<Option<ResourceType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|tag| match tag.parse::<ResourceType>() {
        Ok(rt) => Some(rt),
        Err(e) => {
            log::warn!("Ignoring stored resource type: {}", e);
            None
        }
    }))
}
