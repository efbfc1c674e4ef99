use super::{Locale, Localizer};
use crate::error::{CertDeployError, Result};
use std::collections::HashMap;

const EN_JSON: &str = include_str!("../../locales/en.json");
const ZH_JSON: &str = include_str!("../../locales/zh.json");

/// Flat key -> text table for one locale, optionally chained to a fallback.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: Locale,
    entries: HashMap<String, String>,
    fallback: Option<Box<Catalog>>,
}

impl Catalog {
    pub fn from_json(locale: Locale, json: &str) -> Result<Self> {
        let entries: HashMap<String, String> = serde_json::from_str(json).map_err(|e| {
            CertDeployError::Localization(format!("Failed to parse {} catalog: {}", locale, e))
        })?;

        Ok(Self {
            locale,
            entries,
            fallback: None,
        })
    }

    /// Embedded catalog for `locale`. Non-English catalogs fall back to English.
    pub fn builtin(locale: Locale) -> Result<Self> {
        match locale {
            Locale::En => Self::from_json(Locale::En, EN_JSON),
            Locale::Zh => {
                let english = Self::from_json(Locale::En, EN_JSON)?;
                Ok(Self::from_json(Locale::Zh, ZH_JSON)?.with_fallback(english))
            }
        }
    }

    pub fn with_fallback(mut self, fallback: Catalog) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .or_else(|| self.fallback.as_ref().and_then(|f| f.get(key)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Localizer for Catalog {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn t(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => {
                log::warn!("Missing {} translation for key: {}", self.locale, key);
                key.to_string()
            }
        }
    }
}
