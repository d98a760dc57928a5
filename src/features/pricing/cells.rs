//! Feature Cells
//!
//! Turns plan features into display text according to their type.

use gpui::SharedString;

use crate::components::composite::data_table::ColumnAlign;
use crate::constants::PLACEHOLDER_CELL;
use crate::domain::{Feature, FeatureColumn, FeatureType, PricingItem};
use crate::error::FormatError;
use crate::i18n::{t, Locale};
use crate::utils::format::{format_bytes, format_number};

/// A formatted cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: SharedString,
    pub align: ColumnAlign,
}

impl Cell {
    fn start(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            align: ColumnAlign::Start,
        }
    }

    fn end(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            align: ColumnAlign::End,
        }
    }

    pub fn placeholder() -> Self {
        Self::start(PLACEHOLDER_CELL)
    }
}

/// Alignment used for a feature type
pub fn align_for(type_slug: FeatureType) -> ColumnAlign {
    if type_slug.is_numeric() {
        ColumnAlign::End
    } else {
        ColumnAlign::Start
    }
}

fn expect_number(feature: &Feature) -> Result<f64, FormatError> {
    feature
        .feature_value
        .as_f64()
        .ok_or_else(|| FormatError::FeatureValueMismatch {
            code: feature.code.clone(),
            expected: "number",
        })
}

fn expect_bool(feature: &Feature) -> Result<bool, FormatError> {
    feature
        .feature_value
        .as_bool()
        .ok_or_else(|| FormatError::FeatureValueMismatch {
            code: feature.code.clone(),
            expected: "boolean",
        })
}

/// Format one feature
pub fn format_feature(feature: &Feature, locale: Locale) -> Result<Cell, FormatError> {
    let cell = match feature.type_slug {
        FeatureType::Number => Cell::end(format_number(expect_number(feature)?, locale)),
        FeatureType::Bytes => Cell::end(format_bytes(expect_number(feature)?, locale)),
        FeatureType::Boolean => {
            let key = if expect_bool(feature)? {
                "feature.boolean_true"
            } else {
                "feature.boolean_false"
            };
            Cell::start(t(locale, key))
        }
        FeatureType::BooleanShared => {
            let key = if expect_bool(feature)? {
                "feature.shared"
            } else {
                "feature.dedicated"
            };
            Cell::start(t(locale, key))
        }
        FeatureType::Mount => Cell::start(t(locale, "feature.mount")),
        FeatureType::MongoVersion => Cell::start(t(locale, "feature.mongo_version")),
        FeatureType::Object => Cell::start(t(locale, "feature.object")),
        FeatureType::Unknown => {
            return Err(FormatError::UnknownFeatureType {
                code: feature.code.clone(),
            });
        }
    };
    Ok(cell)
}

/// Format the feature of `item` shown in `column`
pub fn feature_cell(
    item: &PricingItem,
    column: &FeatureColumn,
    locale: Locale,
) -> Result<Cell, FormatError> {
    let feature = item
        .feature(&column.code)
        .ok_or_else(|| FormatError::MissingFeature {
            plan: item.name.clone(),
            code: column.code.clone(),
        })?;
    format_feature(feature, locale)
}

/// Like [`feature_cell`], logging the error and falling back to a placeholder
pub fn feature_cell_or_placeholder(item: &PricingItem, column: &FeatureColumn, locale: Locale) -> Cell {
    feature_cell(item, column, locale).unwrap_or_else(|e| {
        tracing::warn!(plan = %item.id, column = %column.code, error = %e, "Cannot format feature");
        Cell::placeholder()
    })
}

/// Cells of one plan, one per column and in column order
pub fn row_cells(item: &PricingItem, columns: &[FeatureColumn], locale: Locale) -> Vec<Cell> {
    columns
        .iter()
        .map(|column| feature_cell_or_placeholder(item, column, locale))
        .collect()
}

/// Alignment of a feature column, from the first plan carrying the feature
pub fn column_align(items: &[PricingItem], column: &FeatureColumn) -> ColumnAlign {
    items
        .iter()
        .find_map(|item| item.feature(&column.code))
        .map(|f| align_for(f.type_slug))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeatureValue;

    fn feature(type_slug: FeatureType, value: FeatureValue) -> Feature {
        Feature::new("code", type_slug, value)
    }

    fn text(feature: &Feature, locale: Locale) -> String {
        format_feature(feature, locale).expect("formats").text.to_string()
    }

    #[test]
    fn test_number_and_bytes_are_right_aligned() {
        let cpu = feature(FeatureType::Number, FeatureValue::Number(2.0));
        let size = feature(FeatureType::Bytes, FeatureValue::Number(1_073_741_824.0));

        assert_eq!(format_feature(&cpu, Locale::En).expect("number").align, ColumnAlign::End);
        assert_eq!(text(&cpu, Locale::En), "2");
        assert_eq!(format_feature(&size, Locale::En).expect("bytes").align, ColumnAlign::End);
        assert_eq!(text(&size, Locale::En), "1\u{a0}GB");
    }

    #[test]
    fn test_boolean_labels() {
        let yes = feature(FeatureType::Boolean, FeatureValue::Bool(true));
        let no = feature(FeatureType::Boolean, FeatureValue::Bool(false));
        assert_eq!(text(&yes, Locale::En), "Yes");
        assert_eq!(text(&no, Locale::Fr), "Non");
        assert_eq!(format_feature(&yes, Locale::En).expect("bool").align, ColumnAlign::Start);
    }

    #[test]
    fn test_boolean_shared_true_means_shared() {
        let shared = feature(FeatureType::BooleanShared, FeatureValue::Bool(true));
        let dedicated = feature(FeatureType::BooleanShared, FeatureValue::Bool(false));
        assert_eq!(text(&shared, Locale::En), "Shared");
        assert_eq!(text(&dedicated, Locale::En), "Dedicated");
    }

    #[test]
    fn test_fixed_labels_ignore_value() {
        let mount = feature(FeatureType::Mount, FeatureValue::Number(42.0));
        let mongo = feature(FeatureType::MongoVersion, FeatureValue::Text(String::new()));
        let object = feature(FeatureType::Object, FeatureValue::Bool(true));
        assert_eq!(text(&mount, Locale::En), "Shared file system");
        assert_eq!(text(&mongo, Locale::En), "MongoDB 4.0.3");
        assert_eq!(text(&object, Locale::En), "Daily - 7 Retained");
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let gpu = feature(FeatureType::Unknown, FeatureValue::Number(1.0));
        assert_eq!(
            format_feature(&gpu, Locale::En),
            Err(FormatError::UnknownFeatureType {
                code: "code".to_string()
            })
        );
    }

    #[test]
    fn test_value_mismatch_is_an_error() {
        let cpu = feature(FeatureType::Number, FeatureValue::Text("two".to_string()));
        assert!(matches!(
            format_feature(&cpu, Locale::En),
            Err(FormatError::FeatureValueMismatch { expected: "number", .. })
        ));
    }

    #[test]
    fn test_missing_feature_falls_back_to_placeholder() {
        let item = PricingItem::new("xs", "XS", 5.0);
        let column = FeatureColumn::new("cpu", "vCPUs");

        assert!(matches!(
            feature_cell(&item, &column, Locale::En),
            Err(FormatError::MissingFeature { .. })
        ));
        assert_eq!(feature_cell_or_placeholder(&item, &column, Locale::En), Cell::placeholder());
    }

    fn plan(id: &str, features: Vec<Feature>) -> PricingItem {
        PricingItem {
            features,
            ..PricingItem::new(id, id.to_uppercase(), 10.0)
        }
    }

    #[test]
    fn test_row_cells_follow_column_order() {
        let columns = vec![
            FeatureColumn::new("cpu", "vCPUs"),
            FeatureColumn::new("backups", "Backups"),
            FeatureColumn::new("disk", "Disk"),
            FeatureColumn::new("gpu", "GPU"),
        ];
        // Features listed in the reverse order of the columns
        let item = plan(
            "s",
            vec![
                Feature::new("disk", FeatureType::Bytes, FeatureValue::Number(1_073_741_824.0)),
                Feature::new("backups", FeatureType::Boolean, FeatureValue::Bool(true)),
                Feature::new("cpu", FeatureType::Number, FeatureValue::Number(2.0)),
            ],
        );

        let cells = row_cells(&item, &columns, Locale::En);
        let texts: Vec<&str> = cells.iter().map(|c| c.text.as_ref()).collect();
        let aligns: Vec<ColumnAlign> = cells.iter().map(|c| c.align).collect();

        assert_eq!(texts, vec!["2", "Yes", "1\u{a0}GB", PLACEHOLDER_CELL]);
        assert_eq!(
            aligns,
            vec![ColumnAlign::End, ColumnAlign::Start, ColumnAlign::End, ColumnAlign::Start]
        );
    }

    #[test]
    fn test_column_align_uses_first_plan_with_the_feature() {
        let items = vec![
            plan("xs", Vec::new()),
            plan("s", vec![Feature::new("cpu", FeatureType::Number, FeatureValue::Number(1.0))]),
            plan("m", vec![Feature::new("cpu", FeatureType::Mount, FeatureValue::Number(2.0))]),
        ];

        assert_eq!(column_align(&items, &FeatureColumn::new("cpu", "vCPUs")), ColumnAlign::End);
        assert_eq!(column_align(&items, &FeatureColumn::new("gpu", "GPU")), ColumnAlign::Start);
        assert_eq!(column_align(&[], &FeatureColumn::new("cpu", "vCPUs")), ColumnAlign::Start);
    }
}
