//! Selection - Selected Plans and Quantities
//!
//! The selection mapping is immutable: every change produces a new mapping
//! so observers can detect it by identity. Entries keep their insertion order
//! for display.

use std::sync::Arc;

use hashlink::LinkedHashMap;

use super::plan::{ItemId, PricingItem};

/// A plan chosen by the user
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedProduct {
    pub product_name: String,
    pub item: PricingItem,
    pub quantity: u32,
}

impl SelectedProduct {
    /// Price of the line (plan price times quantity)
    pub fn line_price(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }

    /// Build a quantity change relative to the current quantity
    pub fn quantity_change(&self, delta: i64) -> QuantityChange {
        QuantityChange {
            product_name: self.product_name.clone(),
            item: self.item.clone(),
            quantity: i64::from(self.quantity) + delta,
        }
    }
}

/// Payload of an "add product" request
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSelection {
    pub product_name: String,
    pub item: PricingItem,
}

/// Payload of a "change quantity" request
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityChange {
    pub product_name: String,
    pub item: PricingItem,
    /// Requested quantity; zero or less removes the entry
    pub quantity: i64,
}

/// Selection mapping keyed by plan id
#[derive(Debug, Clone)]
pub struct Selection {
    entries: Arc<LinkedHashMap<ItemId, SelectedProduct>>,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(LinkedHashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&SelectedProduct> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.entries.contains_key(id)
    }

    /// Iterate over selected products in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &SelectedProduct> {
        self.entries.values()
    }

    /// Sum of price times quantity over all entries
    pub fn total_price(&self) -> f64 {
        self.iter().map(SelectedProduct::line_price).sum()
    }

    /// Whether both handles point to the very same mapping
    pub fn same_as(&self, other: &Selection) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Add one unit of a plan, creating the entry when needed
    pub fn with_added(&self, selection: &ProductSelection) -> Selection {
        let mut entries = (*self.entries).clone();
        match entries.get_mut(&selection.item.id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => {
                entries.insert(
                    selection.item.id.clone(),
                    SelectedProduct {
                        product_name: selection.product_name.clone(),
                        item: selection.item.clone(),
                        quantity: 1,
                    },
                );
            }
        }
        Selection {
            entries: Arc::new(entries),
        }
    }

    /// Apply a quantity change; a quantity of zero or less removes the entry.
    ///
    /// Returns the same mapping when the change is a no-op.
    pub fn with_quantity(&self, change: &QuantityChange) -> Selection {
        let id = &change.item.id;

        if change.quantity <= 0 {
            if !self.contains(id) {
                return self.clone();
            }
            let mut entries = (*self.entries).clone();
            entries.remove(id);
            return Selection {
                entries: Arc::new(entries),
            };
        }

        let quantity = u32::try_from(change.quantity).unwrap_or(u32::MAX);
        if self.get(id).map(|e| e.quantity) == Some(quantity) {
            return self.clone();
        }

        let mut entries = (*self.entries).clone();
        match entries.get_mut(id) {
            Some(entry) => entry.quantity = quantity,
            None => {
                entries.insert(
                    id.clone(),
                    SelectedProduct {
                        product_name: change.product_name.clone(),
                        item: change.item.clone(),
                        quantity,
                    },
                );
            }
        }
        Selection {
            entries: Arc::new(entries),
        }
    }
}

impl FromIterator<SelectedProduct> for Selection {
    fn from_iter<I: IntoIterator<Item = SelectedProduct>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .filter(|p| p.quantity > 0)
            .map(|p| (p.item.id.clone(), p))
            .collect::<LinkedHashMap<_, _>>();
        Self {
            entries: Arc::new(entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, price: f64) -> PricingItem {
        PricingItem::new(id, id.to_uppercase(), price)
    }

    fn add(id: &str, price: f64) -> ProductSelection {
        ProductSelection {
            product_name: "Postgresql".to_string(),
            item: plan(id, price),
        }
    }

    fn change(id: &str, price: f64, quantity: i64) -> QuantityChange {
        QuantityChange {
            product_name: "Postgresql".to_string(),
            item: plan(id, price),
            quantity,
        }
    }

    #[test]
    fn test_add_twice_yields_one_entry_with_quantity_two() {
        let selection = Selection::new().with_added(&add("xs", 17.5)).with_added(&add("xs", 17.5));

        assert_eq!(selection.len(), 1);
        let entry = selection.get(&ItemId::from("xs")).expect("entry exists");
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.product_name, "Postgresql");
    }

    #[test]
    fn test_add_does_not_mutate_previous_mapping() {
        let before = Selection::new().with_added(&add("xs", 17.5));
        let after = before.with_added(&add("xs", 17.5));

        assert!(!after.same_as(&before));
        assert_eq!(before.get(&ItemId::from("xs")).map(|e| e.quantity), Some(1));
        assert_eq!(after.get(&ItemId::from("xs")).map(|e| e.quantity), Some(2));
    }

    #[test]
    fn test_quantity_zero_removes_entry() {
        let selection = Selection::new().with_added(&add("xs", 17.5));
        let updated = selection.with_quantity(&change("xs", 17.5, 0));

        assert!(!updated.contains(&ItemId::from("xs")));
        assert!(updated.is_empty());
        assert!(selection.contains(&ItemId::from("xs")));
    }

    #[test]
    fn test_negative_quantity_removes_entry() {
        let selection = Selection::new().with_added(&add("xs", 17.5));
        let updated = selection.with_quantity(&change("xs", 17.5, -3));
        assert!(updated.is_empty());
    }

    #[test]
    fn test_noop_changes_keep_identity() {
        let selection = Selection::new().with_added(&add("xs", 17.5));

        let same_quantity = selection.with_quantity(&change("xs", 17.5, 1));
        assert!(same_quantity.same_as(&selection));

        let remove_missing = selection.with_quantity(&change("xl", 328.0, 0));
        assert!(remove_missing.same_as(&selection));
    }

    #[test]
    fn test_set_quantity() {
        let selection = Selection::new().with_added(&add("xs", 17.5));
        let updated = selection.with_quantity(&change("xs", 17.5, 5));

        assert!(!updated.same_as(&selection));
        assert_eq!(updated.get(&ItemId::from("xs")).map(|e| e.quantity), Some(5));
    }

    #[test]
    fn test_quantity_change_for_missing_entry_creates_it() {
        let updated = Selection::new().with_quantity(&change("xs", 17.5, 3));
        assert_eq!(updated.get(&ItemId::from("xs")).map(|e| e.quantity), Some(3));
    }

    #[test]
    fn test_total_price() {
        assert_eq!(Selection::new().total_price(), 0.0);

        let selection = Selection::new()
            .with_added(&add("xs", 17.5))
            .with_added(&add("xs", 17.5))
            .with_added(&add("xxs", 5.25));
        assert_eq!(selection.total_price(), 40.25);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let selection = Selection::new()
            .with_added(&add("b", 2.0))
            .with_added(&add("a", 1.0))
            .with_added(&add("b", 2.0));

        let ids: Vec<_> = selection.iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_quantity_change_relative() {
        let entry = SelectedProduct {
            product_name: "Redis".to_string(),
            item: plan("s", 8.67),
            quantity: 1,
        };
        assert_eq!(entry.quantity_change(1).quantity, 2);
        assert_eq!(entry.quantity_change(-1).quantity, 0);
    }
}
