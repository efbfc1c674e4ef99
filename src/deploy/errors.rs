use std::collections::BTreeMap;

/// Field name -> validation message. A field that passed has an entry with
/// no message; a field never validated has no entry at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<String, Option<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &str, message: Option<String>) {
        self.entries.insert(field.to_string(), message);
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(|m| m.as_deref())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(Option::is_some)
    }

    /// Fields that currently carry a message, in field-name order.
    pub fn messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(field, msg)| msg.as_deref().map(|m| (field.as_str(), m)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_skip_valid_fields() {
        let mut errors = FieldErrors::new();
        errors.set("region", None);
        errors.set("listenerPort", Some("bad port".to_string()));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert!(errors.contains_field("region"));
        assert_eq!(errors.get("region"), None);
        assert_eq!(errors.messages().collect::<Vec<_>>(), vec![("listenerPort", "bad port")]);

        errors.clear();
        assert!(errors.is_empty());
        assert!(!errors.has_errors());
    }
}
