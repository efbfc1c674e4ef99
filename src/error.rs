use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertDeployError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Localization error: {0}")]
    Localization(String),

    #[error("Invalid resource type: {0}")]
    InvalidResourceType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CertDeployError>;
