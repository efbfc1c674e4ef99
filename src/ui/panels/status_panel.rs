use crate::deploy::DeployEditContext;
use crate::i18n::Localizer;
use crate::ui::state::AppState;

pub struct StatusPanel;

impl StatusPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        let color = if state.context.errors().has_errors() {
            egui::Color32::from_rgb(220, 38, 38)
        } else {
            egui::Color32::from_rgb(22, 163, 74)
        };
        ui.colored_label(color, state.status_message.as_str());

        ui.collapsing(state.catalog.t("app.preview"), |ui| {
            egui::ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                ui.monospace(state.record_preview());
            });
        });
    }
}
