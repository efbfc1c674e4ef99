pub mod deploy_defaults;
pub mod manager;
pub mod traits;
pub mod ui;

pub use deploy_defaults::ClbDefaults;
pub use manager::{AppConfig, ConfigManager};
pub use ui::UiConfig;
