use crate::config::ClbDefaults;
use crate::deploy::{
    AliyunClbConfig, ClbField, DeployEditContext, FieldErrors, ProviderConfig, ResourceType,
};
use crate::i18n::Localizer;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

/// Editor for the `config` slot of an Alibaba Cloud CLB deployment.
///
/// The form keeps no copy of the settings. It reads the record from the
/// editing context each frame and writes a fresh copy back on every edit.
#[derive(Debug, Default)]
pub struct AliyunClbForm {
    mounted: bool,
    observed_revision: Option<u64>,
}

impl AliyunClbForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Seeds a new record with defaults and clears errors. Only the first
    /// call after construction (or `unmount`) does anything. The next `sync`
    /// always validates, whether or not the record was seeded.
    pub fn mount<X>(&mut self, ctx: &mut X, defaults: &ClbDefaults)
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if ctx.config().is_new() {
            let mut record = ctx.config().clone();
            record.config = Some(AliyunClbConfig::initial(defaults));
            ctx.set_config(record);
        }
        ctx.set_errors(FieldErrors::new());
        self.observed_revision = None;

        log::info!(
            "Mounted {} form (new record: {})",
            AliyunClbConfig::provider(),
            ctx.config().is_new()
        );
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.observed_revision = None;
    }

    /// Re-validates if the record changed since the last call. Returns
    /// whether the error slot was rewritten.
    pub fn sync<X>(&mut self, ctx: &mut X, t: &dyn Localizer) -> bool
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        if !self.mounted {
            return false;
        }

        let revision = ctx.revision();
        if self.observed_revision == Some(revision) {
            return false;
        }
        self.observed_revision = Some(revision);

        let errors = ctx.config().config_or_default().validate(t);
        ctx.set_errors(errors);
        true
    }

    pub fn on_region_change<X>(ctx: &mut X, value: &str)
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        Self::edit(ctx, |c| c.region = Some(value.trim().to_string()));
    }

    pub fn on_resource_type_change<X>(ctx: &mut X, value: ResourceType)
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        Self::edit(ctx, |c| c.resource_type = Some(value));
    }

    pub fn on_loadbalancer_id_change<X>(ctx: &mut X, value: &str)
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        Self::edit(ctx, |c| c.loadbalancer_id = Some(value.trim().to_string()));
    }

    pub fn on_listener_port_change<X>(ctx: &mut X, value: &str)
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        Self::edit(ctx, |c| c.listener_port = Some(value.trim().to_string()));
    }

    fn edit<X, F>(ctx: &mut X, apply: F)
    where
        X: DeployEditContext<AliyunClbConfig>,
        F: FnOnce(&mut AliyunClbConfig),
    {
        let mut record = ctx.config().clone();
        apply(record.config.get_or_insert_with(AliyunClbConfig::default));
        ctx.set_config(record);
    }

    /// Draws the fields and runs `sync`. Returns whether errors were rewritten.
    pub fn show<X>(&mut self, ui: &mut egui::Ui, ctx: &mut X, t: &dyn Localizer) -> bool
    where
        X: DeployEditContext<AliyunClbConfig>,
    {
        let current = ctx.config().config_or_default();

        let mut region = current.region.clone().unwrap_or_default();
        if Self::text_field(ui, t, ClbField::Region, &mut region, ctx.errors()) {
            Self::on_region_change(ctx, &region);
        }

        if let Some(selected) = Self::resource_type_field(ui, t, current.resource_type, ctx.errors()) {
            Self::on_resource_type_change(ctx, selected);
        }

        let mut loadbalancer_id = current.loadbalancer_id.clone().unwrap_or_default();
        if Self::text_field(ui, t, ClbField::LoadbalancerId, &mut loadbalancer_id, ctx.errors()) {
            Self::on_loadbalancer_id_change(ctx, &loadbalancer_id);
        }

        // Hidden port keeps its stored value.
        if current.listener_port_visible() {
            let mut port = current.listener_port.clone().unwrap_or_default();
            if Self::text_field(ui, t, ClbField::ListenerPort, &mut port, ctx.errors()) {
                Self::on_listener_port_change(ctx, &port);
            }
        }

        self.sync(ctx, t)
    }

    fn text_field(
        ui: &mut egui::Ui,
        t: &dyn Localizer,
        field: ClbField,
        value: &mut String,
        errors: &FieldErrors,
    ) -> bool {
        ui.label(t.t(&field.label_key()));
        let response = ui.add(
            egui::TextEdit::singleline(value)
                .hint_text(t.t(&field.placeholder_key()))
                .desired_width(f32::INFINITY),
        );
        Self::error_line(ui, errors.get(field.name()));
        response.changed()
    }

    fn resource_type_field(
        ui: &mut egui::Ui,
        t: &dyn Localizer,
        current: Option<ResourceType>,
        errors: &FieldErrors,
    ) -> Option<ResourceType> {
        let field = ClbField::ResourceType;
        ui.label(t.t(&field.label_key()));

        let selected_text = match current {
            Some(rt) => t.t(&rt.option_label_key()),
            None => t.t(&field.placeholder_key()),
        };

        let mut selected = current;
        egui::ComboBox::from_id_salt("aliyun_clb_resource_type")
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for option in ResourceType::SELECTABLE {
                    ui.selectable_value(&mut selected, Some(option), t.t(&option.option_label_key()));
                }
            });
        Self::error_line(ui, errors.get(field.name()));

        selected.filter(|rt| Some(*rt) != current)
    }

    fn error_line(ui: &mut egui::Ui, message: Option<&str>) {
        match message {
            Some(msg) => {
                ui.colored_label(ERROR_COLOR, msg);
            }
            None => ui.add_space(4.0),
        }
        ui.add_space(12.0);
    }
}
