use super::errors::FieldErrors;
use crate::i18n::Localizer;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Provider-specific settings stored in a deployment record's `config` slot.
pub trait ProviderConfig: Serialize + DeserializeOwned + Default + Clone {
    /// Provider tag stored on the record, e.g. `aliyun-clb`.
    fn provider() -> &'static str;

    /// Names of every field `validate` reports on.
    fn fields() -> &'static [&'static str];

    /// Evaluates the full rule set. The result carries an entry for each of
    /// `fields()`, with a message only where the rule failed.
    fn validate(&self, t: &dyn Localizer) -> FieldErrors;
}
