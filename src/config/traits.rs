use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A table of the application settings file.
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<()>;
}
