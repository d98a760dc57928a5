//! Product - A Family of Plans

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::feature::FeatureColumn;
use super::plan::PricingItem;
use crate::error::{FixtureSnafu, Result};

/// A product (add-on, runtime...) with its plans and table columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub title: String,
    /// Logo URL
    pub icon: String,
    #[serde(default)]
    pub description: String,
    pub items: Vec<PricingItem>,
    pub features: Vec<FeatureColumn>,
}

impl Product {
    /// Parse a product from its JSON description
    pub fn from_json(name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).context(FixtureSnafu { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_reports_fixture_name() {
        let err = Product::from_json("broken", "{").expect_err("truncated json");
        assert!(err.to_string().starts_with("Fixture broken is invalid"));
    }

    #[test]
    fn test_from_json_minimal() {
        let json = r#"{
            "title": "Redis",
            "icon": "https://example.com/redis.svg",
            "items": [{"id": "plan_s", "name": "S", "price": 8.67, "features": []}],
            "features": [{"code": "cpu", "name": "CPU"}]
        }"#;
        let product = Product::from_json("redis", json).expect("valid product");

        assert_eq!(product.title, "Redis");
        assert!(product.description.is_empty());
        assert_eq!(product.items[0].id.as_str(), "plan_s");
        assert_eq!(product.features[0], FeatureColumn::new("cpu", "CPU"));
    }
}
