use super::panels::{FormPanel, HeaderPanel, StatusPanel};
use super::state::AppState;

pub struct CertDeployApp {
    state: AppState,
    header_panel: HeaderPanel,
    form_panel: FormPanel,
    status_panel: StatusPanel,
}

impl CertDeployApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        Self {
            state,
            header_panel: HeaderPanel::new(),
            form_panel: FormPanel::new(),
            status_panel: StatusPanel::new(),
        }
    }
}

impl eframe::App for CertDeployApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.header_panel.show(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(true)
            .show(ctx, |ui| {
                self.status_panel.show(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.form_panel.show(ui, &mut self.state);
            });
        });
    }
}
