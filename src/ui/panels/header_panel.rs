use crate::i18n::{Locale, Localizer};
use crate::ui::state::AppState;

pub struct HeaderPanel;

impl HeaderPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.heading(state.catalog.t("app.title"));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let mut locale = state.locale();
                egui::ComboBox::from_id_salt("ui_locale")
                    .selected_text(locale.native_name())
                    .show_ui(ui, |ui| {
                        for option in Locale::ALL {
                            ui.selectable_value(&mut locale, option, option.native_name());
                        }
                    });
                ui.label(state.catalog.t("app.locale"));

                if let Err(e) = state.set_locale(locale) {
                    log::warn!("Could not switch locale: {}", e);
                }
            });
        });
    }
}
