//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::Story;
use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::state::{
    catalog_state::CatalogState, config_state::ConfigState, event_log_state::EventLogState,
    i18n_state::I18nState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Story navigation state
    pub catalog: Entity<CatalogState>,
    /// Component events (ring buffer)
    pub events: Entity<EventLogState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, cx: &mut App) -> Self {
        let locale = config
            .locale
            .as_deref()
            .and_then(Locale::from_tag)
            .unwrap_or_else(Locale::detect);
        let story = config
            .catalog
            .story
            .as_deref()
            .and_then(Story::from_slug)
            .unwrap_or_default();

        Self {
            config: cx.new(|_| ConfigState::new(config)),
            i18n: cx.new(|_| I18nState::new(locale)),
            catalog: cx.new(|_| CatalogState::new(story)),
            events: cx.new(|_| EventLogState::default()),
        }
    }
}

/// Locale of the running application, English when no app state is installed
pub fn current_locale(cx: &App) -> Locale {
    cx.try_global::<AppEntities>()
        .map(|entities| entities.i18n.read(cx).locale)
        .unwrap_or_default()
}
