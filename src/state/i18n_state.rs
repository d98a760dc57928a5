//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Toggle between English and French
    pub fn toggle_locale(&mut self) {
        self.locale = self.locale.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locale() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::En);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::Fr);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::En);
    }
}
