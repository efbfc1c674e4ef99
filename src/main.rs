use anyhow::Context;
use certdeploy::config::ConfigManager;
use certdeploy::ui::{AppState, CertDeployApp};
use eframe::NativeOptions;
use std::path::PathBuf;

const DEFAULT_SETTINGS: &str = "certdeploy.toml";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings_path = std::env::var_os("CERTDEPLOY_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));

    let manager = ConfigManager::new();
    manager
        .load_layered(Some(&settings_path))
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;
    let settings = manager.get()?;

    let state = AppState::new(&settings)?;

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.ui.window_width, settings.ui.window_height])
            .with_min_inner_size([420.0, 480.0])
            .with_title("CertDeploy"),
        ..Default::default()
    };

    eframe::run_native(
        "CertDeploy",
        native_options,
        Box::new(move |cc| Ok(Box::new(CertDeployApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("UI terminated: {}", e))
}
