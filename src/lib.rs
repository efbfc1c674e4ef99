pub mod config;
pub mod deploy;
pub mod error;
pub mod i18n;
pub mod ui;

pub use error::{CertDeployError, Result};
