//! Pricing Table Layout
//!
//! Layout choice, plan ordering and per-card open state. Nothing here
//! touches GPUI so the rules can be tested directly.

use ahash::AHashSet;

use crate::components::resize::ResizeObserver;
use crate::constants::PRICING_TABLE_BREAKPOINT;
use crate::domain::{ItemId, PricingItem};

/// How the pricing table lays out its plans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One collapsible card per plan
    Cards,
    /// One row per plan, one column per feature
    Table,
}

impl LayoutMode {
    /// Pick the layout for the container's observed width.
    ///
    /// Cards are used until a width has been observed.
    pub fn for_container(container: &ResizeObserver) -> Self {
        if container.wider_than(PRICING_TABLE_BREAKPOINT) {
            LayoutMode::Table
        } else {
            LayoutMode::Cards
        }
    }
}

/// Copy of `items` sorted by ascending price; equal prices keep their order
pub fn sorted_by_price(items: &[PricingItem]) -> Vec<PricingItem> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| a.price.total_cmp(&b.price));
    sorted
}

/// Open/closed state of the plan cards, keyed by plan id. Closed by default.
#[derive(Debug, Clone, Default)]
pub struct CardStates {
    open: AHashSet<ItemId>,
}

impl CardStates {
    pub fn is_open(&self, id: &ItemId) -> bool {
        self.open.contains(id)
    }

    /// Flip one card; returns its new state
    pub fn toggle(&mut self, id: &ItemId) -> bool {
        if self.open.remove(id) {
            false
        } else {
            self.open.insert(id.clone());
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plans() -> Vec<PricingItem> {
        vec![
            PricingItem::new("m", "M", 20.0),
            PricingItem::new("xs", "XS", 5.0),
            PricingItem::new("s", "S", 10.0),
            PricingItem::new("s-bis", "S bis", 10.0),
        ]
    }

    #[test]
    fn test_sorted_by_price_is_ascending_and_stable() {
        let items = plans();
        let sorted = sorted_by_price(&items);

        let ids: Vec<&str> = sorted.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["xs", "s", "s-bis", "m"]);
        // Input untouched
        assert_eq!(items[0].id.as_str(), "m");
    }

    #[test]
    fn test_layout_breakpoint() {
        let mut container = ResizeObserver::new();
        assert_eq!(LayoutMode::for_container(&container), LayoutMode::Cards);

        for (width, mode) in [
            (320.0, LayoutMode::Cards),
            (550.0, LayoutMode::Cards),
            (551.0, LayoutMode::Table),
        ] {
            container.observe(width);
            assert_eq!(LayoutMode::for_container(&container), mode, "width {width}");
        }
    }

    #[test]
    fn test_cards_closed_by_default() {
        let cards = CardStates::default();
        assert!(!cards.is_open(&ItemId::from("xs")));
    }

    #[test]
    fn test_toggle_only_affects_one_card() {
        let mut cards = CardStates::default();
        assert!(cards.toggle(&ItemId::from("xs")));

        assert!(cards.is_open(&ItemId::from("xs")));
        assert!(!cards.is_open(&ItemId::from("s")));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut cards = CardStates::default();
        cards.toggle(&ItemId::from("s"));
        cards.toggle(&ItemId::from("xs"));
        assert!(!cards.toggle(&ItemId::from("xs")));

        assert!(!cards.is_open(&ItemId::from("xs")));
        assert!(cards.is_open(&ItemId::from("s")));
    }
}
