use super::forms::AliyunClbForm;
use crate::config::{AppConfig, ClbDefaults};
use crate::deploy::aliyun_clb::PROVIDER;
use crate::deploy::{
    AliyunClbConfig, DeployEditContext, DeployRecord, EditContext, ProviderConfig,
};
use crate::error::Result;
use crate::i18n::{Catalog, Locale, Localizer};

/// Central application state for the UI
pub struct AppState {
    pub context: EditContext<AliyunClbConfig>,
    pub catalog: Catalog,
    pub form: AliyunClbForm,
    pub defaults: ClbDefaults,
    pub status_message: String,
}

impl AppState {
    /// State for editing a brand-new deployment.
    pub fn new(settings: &AppConfig) -> Result<Self> {
        Self::with_record(settings, DeployRecord::new(PROVIDER))
    }

    pub fn with_record(settings: &AppConfig, record: DeployRecord<AliyunClbConfig>) -> Result<Self> {
        let catalog = Catalog::builtin(settings.ui.locale)?;
        let mut state = Self {
            context: EditContext::from_record(record),
            catalog,
            form: AliyunClbForm::new(),
            defaults: settings.aliyun_clb.clone(),
            status_message: String::new(),
        };
        state.form.mount(&mut state.context, &state.defaults);
        state.refresh_status();
        Ok(state)
    }

    pub fn locale(&self) -> Locale {
        self.catalog.locale()
    }

    pub fn set_locale(&mut self, locale: Locale) -> Result<()> {
        if locale == self.locale() {
            return Ok(());
        }
        self.catalog = Catalog::builtin(locale)?;
        log::info!("Switched UI locale to {}", locale);

        // Re-render shown messages in the new language.
        if !self.context.errors().is_empty() {
            let errors = self.context.config().config_or_default().validate(&self.catalog);
            self.context.set_errors(errors);
        }
        self.refresh_status();
        Ok(())
    }

    /// Runs the validation effect and rebuilds the status line.
    pub fn refresh(&mut self) {
        self.form.sync(&mut self.context, &self.catalog);
        self.refresh_status();
    }

    pub fn refresh_status(&mut self) {
        let count = self.context.errors().messages().count();
        self.status_message = if count == 0 {
            self.catalog.t("app.status.valid")
        } else {
            self.catalog
                .t_with("app.status.invalid", &[("count", &count.to_string())])
        };
    }

    pub fn heading(&self) -> String {
        match self.context.config().id.as_deref() {
            Some(id) if !self.context.config().is_new() => {
                self.catalog.t_with("app.record.existing", &[("id", id)])
            }
            _ => self.catalog.t("app.record.new"),
        }
    }

    pub fn record_preview(&self) -> String {
        serde_json::to_string_pretty(self.context.config())
            .unwrap_or_else(|e| format!("<unserializable record: {}>", e))
    }
}
