//! i18n - Internationalization Module
//!
//! Message lookups go through rust-i18n catalogs in `locales/`.
//! Number separators are kept here next to the locale they belong to.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// French
    Fr,
}

impl Locale {
    /// Catalog code
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
        }
    }

    /// Parse a locale tag such as `fr`, `fr-FR` or `en_US`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    /// Detect the locale of the operating system
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        current
            .split(',')
            .find_map(|tag| Self::from_tag(tag.trim()))
            .unwrap_or_default()
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }

    /// Thousands separator
    pub fn group_separator(&self) -> &'static str {
        match self {
            Locale::En => ",",
            Locale::Fr => "\u{202f}",
        }
    }

    /// Decimal separator
    pub fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::En => ".",
            Locale::Fr => ",",
        }
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    t!(key, locale = locale.code()).to_string().into()
}

/// Translate a key and substitute `%{name}` placeholders
///
/// # Example
/// ```ignore
/// // With translation "monthly = "%{price} per month"
/// t_args(Locale::En, "pricing_estimation.monthly", &[("price", "€12.00")])
/// // Returns "€12.00 per month"
/// ```
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut result = t!(key, locale = locale.code()).to_string();

    for (name, value) in args {
        result = result.replace(&format!("%{{{name}}}"), value);
    }

    result.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("fr-FR"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("en_US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
        assert_eq!(Locale::from_tag("de-DE"), None);
    }

    #[test]
    fn test_translate() {
        assert_eq!(t(Locale::En, "feature.boolean_true").as_ref(), "Yes");
        assert_eq!(t(Locale::Fr, "feature.boolean_true").as_ref(), "Oui");
        assert_eq!(t(Locale::Fr, "feature.dedicated").as_ref(), "Dédié");
    }

    #[test]
    fn test_translate_with_args() {
        let text = t_args(Locale::En, "pricing_table.add_plan", &[("plan", "XS")]);
        assert_eq!(text.as_ref(), "Add XS");
    }
}
