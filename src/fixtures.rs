//! Fixtures - Sample Products
//!
//! Product descriptions bundled with the binary, used by the component
//! catalog and by tests.

use crate::domain::{Product, ProductSelection, Selection};
use crate::error::Result;

const POSTGRES_JSON: &str = include_str!("../fixtures/postgres.json");
const REDIS_JSON: &str = include_str!("../fixtures/redis.json");

/// Postgresql add-on with three plans
pub fn postgres() -> Result<Product> {
    Product::from_json("postgres", POSTGRES_JSON)
}

/// Redis add-on with three plans
pub fn redis() -> Result<Product> {
    Product::from_json("redis", REDIS_JSON)
}

/// A selection with two units of the first plan of each product
pub fn sample_selection(products: &[Product]) -> Selection {
    products
        .iter()
        .filter_map(|product| {
            product.items.first().map(|item| ProductSelection {
                product_name: product.title.clone(),
                item: item.clone(),
            })
        })
        .fold(Selection::new(), |selection, add| {
            selection.with_added(&add).with_added(&add)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeatureType;

    #[test]
    fn test_postgres_fixture() {
        let product = postgres().expect("postgres fixture");
        assert_eq!(product.title, "Postgresql");
        assert_eq!(product.items.len(), 3);
        assert_eq!(product.features.len(), 10);

        for item in &product.items {
            for column in &product.features {
                assert!(item.feature(&column.code).is_some(), "{} lacks {}", item.name, column.code);
            }
        }
    }

    #[test]
    fn test_redis_fixture() {
        let product = redis().expect("redis fixture");
        assert_eq!(product.title, "Redis");
        let names: Vec<_> = product.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["S", "XXL", "XL"]);
        assert!(product.items.iter().all(|item| {
            item.features
                .iter()
                .all(|f| !matches!(f.type_slug, FeatureType::Unknown))
        }));
    }

    #[test]
    fn test_sample_selection() {
        let products = vec![postgres().expect("postgres"), redis().expect("redis")];
        let selection = sample_selection(&products);

        assert_eq!(selection.len(), 2);
        assert!(selection.iter().all(|line| line.quantity == 2));
        assert_eq!(selection.total_price(), 2.0 * 17.5 + 2.0 * 8.67);
    }
}
