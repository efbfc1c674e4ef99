use crate::deploy::aliyun_clb::PROVIDER;
use crate::i18n::Localizer;
use crate::ui::state::AppState;

pub struct FormPanel;

impl FormPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading(state.heading());
        ui.label(state.catalog.t(&format!("provider.{}", PROVIDER)));
        ui.separator();
        ui.add_space(8.0);

        // The status panel was laid out before this one.
        if state.form.show(ui, &mut state.context, &state.catalog) {
            state.refresh_status();
            ui.ctx().request_repaint();
        }
    }
}
