//! PricingState - Pricing Page State and Reducer
//!
//! The page owns the selection mapping and the display currency. Children
//! only report what the user did; every change goes through [`PricingState::reduce`].

use crate::domain::{Currency, ProductSelection, QuantityChange, Selection};

/// Messages handled by the pricing page
#[derive(Debug, Clone, PartialEq)]
pub enum PricingMsg {
    /// A plan was added from a product
    AddProduct(ProductSelection),
    /// A quantity was changed from the estimation
    ChangeQuantity(QuantityChange),
    /// A currency was picked in the header
    ChangeCurrency(Currency),
}

/// State owned by the pricing page
#[derive(Debug, Clone, Default)]
pub struct PricingState {
    pub selection: Selection,
    pub currency: Currency,
}

impl PricingState {
    pub fn new(currency: Currency) -> Self {
        Self {
            selection: Selection::new(),
            currency,
        }
    }

    /// Compute the next state. `self` is never modified; a message that
    /// changes nothing keeps the very same selection mapping.
    pub fn reduce(&self, msg: &PricingMsg) -> PricingState {
        match msg {
            PricingMsg::AddProduct(selection) => PricingState {
                selection: self.selection.with_added(selection),
                currency: self.currency,
            },
            PricingMsg::ChangeQuantity(change) => PricingState {
                selection: self.selection.with_quantity(change),
                currency: self.currency,
            },
            PricingMsg::ChangeCurrency(currency) => PricingState {
                selection: self.selection.clone(),
                currency: *currency,
            },
        }
    }

    /// Estimated monthly total of the selection
    pub fn total_price(&self) -> f64 {
        self.selection.total_price()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, PricingItem};

    fn xs() -> PricingItem {
        PricingItem::new("pg-xs", "XS", 17.5)
    }

    fn add_xs() -> PricingMsg {
        PricingMsg::AddProduct(ProductSelection {
            product_name: "Postgresql".to_string(),
            item: xs(),
        })
    }

    fn set_xs(quantity: i64) -> PricingMsg {
        PricingMsg::ChangeQuantity(QuantityChange {
            product_name: "Postgresql".to_string(),
            item: xs(),
            quantity,
        })
    }

    #[test]
    fn test_add_product_twice() {
        let state = PricingState::default().reduce(&add_xs()).reduce(&add_xs());
        let entry = state.selection.get(&ItemId::from("pg-xs")).expect("selected");
        assert_eq!(entry.quantity, 2);
        assert_eq!(state.total_price(), 35.0);
    }

    #[test]
    fn test_reduce_is_pure() {
        let before = PricingState::default().reduce(&add_xs());
        let after = before.reduce(&add_xs());

        assert!(!after.selection.same_as(&before.selection));
        assert_eq!(
            before.selection.get(&ItemId::from("pg-xs")).map(|e| e.quantity),
            Some(1)
        );
    }

    #[test]
    fn test_change_quantity_to_zero_removes() {
        let state = PricingState::default().reduce(&add_xs()).reduce(&set_xs(0));
        assert!(state.selection.is_empty());
        assert_eq!(state.total_price(), 0.0);
    }

    #[test]
    fn test_change_quantity_sets_value() {
        let state = PricingState::default().reduce(&add_xs()).reduce(&set_xs(4));
        assert_eq!(
            state.selection.get(&ItemId::from("pg-xs")).map(|e| e.quantity),
            Some(4)
        );
    }

    #[test]
    fn test_change_currency_keeps_selection() {
        let before = PricingState::default().reduce(&add_xs());
        let after = before.reduce(&PricingMsg::ChangeCurrency(Currency::Usd));

        assert_eq!(after.currency, Currency::Usd);
        assert!(after.selection.same_as(&before.selection));
    }

    #[test]
    fn test_noop_keeps_mapping_identity() {
        let before = PricingState::default().reduce(&add_xs());
        let after = before.reduce(&set_xs(1));
        assert!(after.selection.same_as(&before.selection));
    }
}
