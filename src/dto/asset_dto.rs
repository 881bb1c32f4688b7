use serde::Deserialize;
use validator::Validate;

use crate::dto::present;
use crate::models::asset::{Asset, AssetDetails, NewAsset};
use crate::utils::validation::{non_empty, page_bounds, validate_not_blank};

// Request to register an asset
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssetRequest {
    #[validate(custom = "validate_not_blank")]
    pub barcode: String,
    pub school_id: i32,
    #[serde(flatten)]
    pub details: AssetDetails,
}

impl From<CreateAssetRequest> for NewAsset {
    fn from(request: CreateAssetRequest) -> Self {
        Self {
            barcode: request.barcode,
            school_id: request.school_id,
            details: request.details,
        }
    }
}

// Partial update: absent fields are left untouched, `null` clears a nullable column
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAssetRequest {
    #[validate(custom = "validate_not_blank")]
    pub barcode: Option<String>,
    pub school_id: Option<i32>,
    #[serde(default, deserialize_with = "present")]
    pub city_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub type_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub category_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub subcategory_code: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub procurement_month: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub procurement_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub floor: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub sequence_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub placement: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub brand: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub room: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub model_series: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub ip_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub mac_address: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub serial_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub ram: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub processor: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub gpu: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub storage: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub os: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub connect_to: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub channel: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub password: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<String>>,
}

impl UpdateAssetRequest {
    /// Copy every field present in the request onto `asset`
    pub fn apply_to(self, asset: &mut Asset) {
        if let Some(barcode) = self.barcode {
            asset.barcode = barcode;
        }
        if let Some(school_id) = self.school_id {
            asset.school_id = school_id;
        }

        let d = &mut asset.details;
        if let Some(v) = self.city_code {
            d.city_code = v;
        }
        if let Some(v) = self.type_code {
            d.type_code = v;
        }
        if let Some(v) = self.category_code {
            d.category_code = v;
        }
        if let Some(v) = self.subcategory_code {
            d.subcategory_code = v;
        }
        if let Some(v) = self.procurement_month {
            d.procurement_month = v;
        }
        if let Some(v) = self.procurement_year {
            d.procurement_year = v;
        }
        if let Some(v) = self.floor {
            d.floor = v;
        }
        if let Some(v) = self.sequence_number {
            d.sequence_number = v;
        }
        if let Some(v) = self.placement {
            d.placement = v;
        }
        if let Some(v) = self.brand {
            d.brand = v;
        }
        if let Some(v) = self.room {
            d.room = v;
        }
        if let Some(v) = self.model_series {
            d.model_series = v;
        }
        if let Some(v) = self.ip_address {
            d.ip_address = v;
        }
        if let Some(v) = self.mac_address {
            d.mac_address = v;
        }
        if let Some(v) = self.serial_number {
            d.serial_number = v;
        }
        if let Some(v) = self.ram {
            d.ram = v;
        }
        if let Some(v) = self.processor {
            d.processor = v;
        }
        if let Some(v) = self.gpu {
            d.gpu = v;
        }
        if let Some(v) = self.storage {
            d.storage = v;
        }
        if let Some(v) = self.os {
            d.os = v;
        }
        if let Some(v) = self.connect_to {
            d.connect_to = v;
        }
        if let Some(v) = self.channel {
            d.channel = v;
        }
        if let Some(v) = self.username {
            d.username = v;
        }
        if let Some(v) = self.password {
            d.password = v;
        }
        if let Some(v) = self.assigned_to {
            d.assigned_to = v;
        }
        if let Some(v) = self.status {
            d.status = v;
        }
    }
}

// Query parameters of GET /assets
#[derive(Debug, Default, Deserialize)]
pub struct AssetQuery {
    pub school_id: Option<i32>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub type_code: Option<String>,
    pub category_code: Option<String>,
    pub search: Option<String>,
}

/// Normalised asset listing filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetFilter {
    pub school_id: Option<i32>,
    pub type_code: Option<String>,
    pub category_code: Option<String>,
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}

impl From<AssetQuery> for AssetFilter {
    fn from(query: AssetQuery) -> Self {
        let (offset, limit) = page_bounds(query.skip, query.limit);
        Self {
            school_id: query.school_id,
            type_code: non_empty(query.type_code.as_deref()).map(str::to_string),
            category_code: non_empty(query.category_code.as_deref()).map(str::to_string),
            search: non_empty(query.search.as_deref()).map(str::to_string),
            offset,
            limit,
        }
    }
}
