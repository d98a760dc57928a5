//! Embedded assets for Pricing-GUI
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    /// Bundled icons shadow the gpui-component ones sharing their path
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .or_else(|| ComponentAssets::get(path))
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter(|p| p.starts_with(path))
            .map(SharedString::from)
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter(|p| p.starts_with(path) && Self::get(p).is_none())
                .map(SharedString::from),
        );

        Ok(files)
    }
}

/// Custom icon names for Pricing-GUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomIconName {
    /// Copy to clipboard
    Clipboard,
    /// Copy confirmation
    Tick,
    /// Increase quantity
    Plus,
    /// Decrease quantity
    Minus,
    /// Card closed
    ChevronDown,
    /// Card open
    ChevronUp,
    /// Locale switcher
    Languages,
    /// Product icon fallback
    Database,
    /// Event panel
    Events,
}

impl CustomIconName {
    pub fn all() -> &'static [CustomIconName] {
        &[
            CustomIconName::Clipboard,
            CustomIconName::Tick,
            CustomIconName::Plus,
            CustomIconName::Minus,
            CustomIconName::ChevronDown,
            CustomIconName::ChevronUp,
            CustomIconName::Languages,
            CustomIconName::Database,
            CustomIconName::Events,
        ]
    }

    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CustomIconName::Clipboard => "icons/clipboard.svg",
            CustomIconName::Tick => "icons/tick.svg",
            CustomIconName::Plus => "icons/plus.svg",
            CustomIconName::Minus => "icons/minus.svg",
            CustomIconName::ChevronDown => "icons/chevron-down.svg",
            CustomIconName::ChevronUp => "icons/chevron-up.svg",
            CustomIconName::Languages => "icons/languages.svg",
            CustomIconName::Database => "icons/database.svg",
            CustomIconName::Events => "icons/events.svg",
        }
        .into()
    }
}

impl From<CustomIconName> for Icon {
    fn from(val: CustomIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_embedded() {
        for icon in CustomIconName::all() {
            assert!(Assets::get(&icon.path()).is_some(), "{:?} is missing", icon);
        }
    }

    #[test]
    fn test_bundled_icons_take_precedence() {
        let path = CustomIconName::Plus.path();
        let loaded = Assets.load(&path).expect("load").expect("asset");
        let bundled = Assets::get(&path).expect("bundled");
        assert_eq!(loaded.as_ref(), bundled.data.as_ref());
    }
}
