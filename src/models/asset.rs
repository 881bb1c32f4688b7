//! Asset model
//!
//! Maps the `assets` table. Every column except `barcode` and `school_id`
//! is free-form and nullable, so they are grouped in `AssetDetails` and
//! flattened into both the row and the JSON representation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Placeholder for a missing brand or model in display names
pub const MISSING_PART: &str = "-";

/// Descriptive asset columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct AssetDetails {
    pub city_code: Option<String>,
    pub type_code: Option<String>,
    pub category_code: Option<String>,
    pub subcategory_code: Option<String>,
    pub procurement_month: Option<String>,
    pub procurement_year: Option<String>,
    pub floor: Option<String>,
    pub sequence_number: Option<String>,
    pub placement: Option<String>,
    pub brand: Option<String>,
    pub room: Option<String>,
    pub model_series: Option<String>,
    pub ip_address: Option<String>,
    pub mac_address: Option<String>,
    pub serial_number: Option<String>,
    pub ram: Option<String>,
    pub processor: Option<String>,
    pub gpu: Option<String>,
    pub storage: Option<String>,
    pub os: Option<String>,
    pub connect_to: Option<String>,
    pub channel: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

impl AssetDetails {
    /// `"{brand} - {model_series}"`, the name recorded in update logs
    pub fn display_name(&self) -> String {
        format!(
            "{} - {}",
            self.brand.as_deref().unwrap_or(MISSING_PART),
            self.model_series.as_deref().unwrap_or(MISSING_PART)
        )
    }
}

/// Asset row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: i32,
    pub barcode: String,
    pub school_id: i32,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub details: AssetDetails,
}

/// Asset about to be inserted
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub barcode: String,
    pub school_id: i32,
    pub details: AssetDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let details = AssetDetails {
            brand: Some("Lenovo".to_string()),
            model_series: Some("ThinkPad E14".to_string()),
            ..Default::default()
        };
        assert_eq!(details.display_name(), "Lenovo - ThinkPad E14");
        assert_eq!(AssetDetails::default().display_name(), "- - -");
    }

    #[test]
    fn test_asset_json_is_flat() {
        let asset = Asset {
            id: 1,
            barcode: "JKT-LAP-001".to_string(),
            school_id: 4,
            details: AssetDetails {
                brand: Some("Dell".to_string()),
                ..Default::default()
            },
        };
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value["barcode"], "JKT-LAP-001");
        assert_eq!(value["brand"], "Dell");
        assert!(value.get("details").is_none());
    }
}
