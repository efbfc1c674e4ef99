use super::errors::FieldErrors;
use super::record::DeployRecord;

/// Capabilities a provider form gets from the parent editing context.
///
/// Every write replaces its slot wholesale. `revision` moves forward on each
/// `set_config`, so a form can tell whether the record changed since it last
/// looked.
pub trait DeployEditContext<C> {
    fn config(&self) -> &DeployRecord<C>;
    fn set_config(&mut self, record: DeployRecord<C>);
    fn errors(&self) -> &FieldErrors;
    fn set_errors(&mut self, errors: FieldErrors);
    fn revision(&self) -> u64;
}

/// In-memory editing context for a single record.
#[derive(Debug, Clone)]
pub struct EditContext<C> {
    record: DeployRecord<C>,
    errors: FieldErrors,
    revision: u64,
}

impl<C> EditContext<C> {
    pub fn new_record(provider: impl Into<String>) -> Self {
        Self::from_record(DeployRecord::new(provider))
    }

    pub fn from_record(record: DeployRecord<C>) -> Self {
        Self {
            record,
            errors: FieldErrors::new(),
            revision: 0,
        }
    }

    pub fn into_record(self) -> DeployRecord<C> {
        self.record
    }
}

impl<C> DeployEditContext<C> for EditContext<C> {
    fn config(&self) -> &DeployRecord<C> {
        &self.record
    }

    fn set_config(&mut self, record: DeployRecord<C>) {
        self.record = record;
        self.revision += 1;
        log::debug!("Deploy record replaced (revision {})", self.revision);
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn set_errors(&mut self, errors: FieldErrors) {
        if errors.has_errors() {
            log::debug!(
                "Field errors: {:?}",
                errors.messages().map(|(field, _)| field).collect::<Vec<_>>()
            );
        }
        self.errors = errors;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
