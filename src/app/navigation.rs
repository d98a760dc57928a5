//! Navigation - Catalog Stories
//!
//! Each story shows one component in one state.

use serde::{Deserialize, Serialize};

/// Component families, used to group stories in the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryGroup {
    InputText,
    PricingTable,
    PricingProduct,
    PricingEstimation,
    PricingHeader,
    PricingPage,
}

impl StoryGroup {
    /// Display name, the component's tag
    pub fn label(&self) -> &'static str {
        match self {
            StoryGroup::InputText => "input-text",
            StoryGroup::PricingTable => "pricing-table",
            StoryGroup::PricingProduct => "pricing-product",
            StoryGroup::PricingEstimation => "pricing-estimation",
            StoryGroup::PricingHeader => "pricing-header",
            StoryGroup::PricingPage => "pricing-page",
        }
    }
}

/// Available stories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Story {
    #[default]
    InputTextSimple,
    InputTextMulti,
    InputTextClipboard,
    InputTextReadonly,
    InputTextDisabled,
    InputTextSkeleton,
    PricingTablePostgres,
    PricingTableRedis,
    PricingProductPostgres,
    PricingProductRedis,
    PricingProductSkeleton,
    PricingProductError,
    PricingEstimation,
    PricingHeader,
    PricingPage,
}

impl Story {
    /// Get all stories in sidebar order
    pub fn all() -> &'static [Story] {
        &[
            Story::InputTextSimple,
            Story::InputTextMulti,
            Story::InputTextClipboard,
            Story::InputTextReadonly,
            Story::InputTextDisabled,
            Story::InputTextSkeleton,
            Story::PricingTablePostgres,
            Story::PricingTableRedis,
            Story::PricingProductPostgres,
            Story::PricingProductRedis,
            Story::PricingProductSkeleton,
            Story::PricingProductError,
            Story::PricingEstimation,
            Story::PricingHeader,
            Story::PricingPage,
        ]
    }

    /// Identifier used in the configuration file
    pub fn slug(&self) -> &'static str {
        match self {
            Story::InputTextSimple => "input-text-simple",
            Story::InputTextMulti => "input-text-multi",
            Story::InputTextClipboard => "input-text-clipboard",
            Story::InputTextReadonly => "input-text-readonly",
            Story::InputTextDisabled => "input-text-disabled",
            Story::InputTextSkeleton => "input-text-skeleton",
            Story::PricingTablePostgres => "pricing-table-postgres",
            Story::PricingTableRedis => "pricing-table-redis",
            Story::PricingProductPostgres => "pricing-product-postgres",
            Story::PricingProductRedis => "pricing-product-redis",
            Story::PricingProductSkeleton => "pricing-product-skeleton",
            Story::PricingProductError => "pricing-product-error",
            Story::PricingEstimation => "pricing-estimation",
            Story::PricingHeader => "pricing-header",
            Story::PricingPage => "pricing-page",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Story> {
        Story::all().iter().copied().find(|s| s.slug() == slug)
    }

    /// Get the translation key for the story title
    pub fn title_key(&self) -> String {
        format!("stories.{}", self.slug().replace('-', "_"))
    }

    pub fn group(&self) -> StoryGroup {
        match self {
            Story::InputTextSimple
            | Story::InputTextMulti
            | Story::InputTextClipboard
            | Story::InputTextReadonly
            | Story::InputTextDisabled
            | Story::InputTextSkeleton => StoryGroup::InputText,
            Story::PricingTablePostgres | Story::PricingTableRedis => StoryGroup::PricingTable,
            Story::PricingProductPostgres
            | Story::PricingProductRedis
            | Story::PricingProductSkeleton
            | Story::PricingProductError => StoryGroup::PricingProduct,
            Story::PricingEstimation => StoryGroup::PricingEstimation,
            Story::PricingHeader => StoryGroup::PricingHeader,
            Story::PricingPage => StoryGroup::PricingPage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{t, Locale};

    #[test]
    fn test_slug_roundtrip() {
        for story in Story::all() {
            assert_eq!(Story::from_slug(story.slug()), Some(*story));
        }
        assert_eq!(Story::from_slug("unknown"), None);
    }

    #[test]
    fn test_title_key() {
        assert_eq!(Story::PricingTablePostgres.title_key(), "stories.pricing_table_postgres");
        assert_eq!(
            t(Locale::En, &Story::PricingPage.title_key()).as_ref(),
            "Pricing page"
        );
    }

    #[test]
    fn test_every_story_is_translated() {
        for story in Story::all() {
            let key = story.title_key();
            for locale in [Locale::En, Locale::Fr] {
                assert_ne!(t(locale, &key).as_ref(), key, "{key} missing in {locale:?}");
            }
        }
    }
}
