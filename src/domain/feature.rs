//! Feature - Typed Plan Attributes

use serde::{Deserialize, Serialize};

/// How a feature value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureType {
    /// Plain number (vCPUs, connection limit...)
    Number,
    /// Size in bytes
    Bytes,
    /// Yes / No
    Boolean,
    /// Shared (true) / Dedicated (false)
    BooleanShared,
    /// Fixed label, value ignored
    Mount,
    /// Fixed label, value ignored
    MongoVersion,
    /// Fixed label, value ignored
    Object,
    /// Any slug we don't know about
    #[serde(other)]
    Unknown,
}

impl FeatureType {
    /// Numeric features are right-aligned
    pub fn is_numeric(self) -> bool {
        matches!(self, FeatureType::Number | FeatureType::Bytes)
    }
}

/// Raw feature value as provided by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FeatureValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FeatureValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// A feature of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    /// Column code, matched against [`FeatureColumn::code`]
    pub code: String,
    /// Display name (only used by the card layout when present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub type_slug: FeatureType,
    pub feature_value: FeatureValue,
}

impl Feature {
    pub fn new(code: impl Into<String>, type_slug: FeatureType, feature_value: FeatureValue) -> Self {
        Self {
            code: code.into(),
            name: None,
            type_slug,
            feature_value,
        }
    }
}

/// A column of the pricing table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureColumn {
    pub code: String,
    pub name: String,
}

impl FeatureColumn {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_deserialize_slugs() {
        let json = r#"[
            {"code": "cpu", "typeSlug": "number", "featureValue": 2},
            {"code": "type-shared", "typeSlug": "boolean-shared", "featureValue": false},
            {"code": "version", "typeSlug": "mongo-version", "featureValue": ""},
            {"code": "gpu", "typeSlug": "gpu-count", "featureValue": 1}
        ]"#;
        let features: Vec<Feature> = serde_json::from_str(json).expect("valid json");

        assert_eq!(features[0].type_slug, FeatureType::Number);
        assert_eq!(features[0].feature_value, FeatureValue::Number(2.0));
        assert_eq!(features[1].type_slug, FeatureType::BooleanShared);
        assert_eq!(features[1].feature_value, FeatureValue::Bool(false));
        assert_eq!(features[2].type_slug, FeatureType::MongoVersion);
        assert_eq!(features[2].feature_value, FeatureValue::Text(String::new()));
        assert_eq!(features[3].type_slug, FeatureType::Unknown);
    }

    #[test]
    fn test_numeric_types() {
        assert!(FeatureType::Number.is_numeric());
        assert!(FeatureType::Bytes.is_numeric());
        assert!(!FeatureType::Boolean.is_numeric());
        assert!(!FeatureType::Object.is_numeric());
    }
}
