pub mod catalog;
pub mod locale;

pub use catalog::Catalog;
pub use locale::Locale;

/// Text lookup used by forms for labels, placeholders and messages.
pub trait Localizer {
    fn locale(&self) -> Locale;

    /// Returns the text for `key`, or the key itself when nothing matches.
    fn t(&self, key: &str) -> String;

    /// Looks up `key` and substitutes `{name}` placeholders.
    fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter().fold(self.t(key), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), value)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Localizer for Echo {
        fn locale(&self) -> Locale {
            Locale::En
        }

        fn t(&self, key: &str) -> String {
            format!("[{}] {{count}} items", key)
        }
    }

    #[test]
    fn test_t_with_substitutes_arguments() {
        let text = Echo.t_with("status", &[("count", "3")]);
        assert_eq!(text, "[status] 3 items");
    }

    #[test]
    fn test_t_with_leaves_unknown_placeholders() {
        let text = Echo.t_with("status", &[("other", "x")]);
        assert_eq!(text, "[status] {count} items");
    }
}
