//! Service history model
//!
//! A service ticket references an asset loosely through `sn_or_barcode`,
//! which may hold either the asset barcode or its serial number.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Optional ticket columns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ServiceDetails {
    pub ticket_no: Option<String>,
    pub service_date: Option<NaiveDate>,
    pub asset_name: Option<String>,
    pub production_year: Option<String>,
    pub unit_name: Option<String>,
    pub owner: Option<String>,
    pub vendor: Option<String>,
    pub status: Option<String>,
}

/// Service history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ServiceHistory {
    pub id: i32,
    pub sn_or_barcode: String,
    pub issue_description: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub details: ServiceDetails,
}

/// Service ticket about to be inserted
#[derive(Debug, Clone)]
pub struct NewServiceHistory {
    pub sn_or_barcode: String,
    pub issue_description: String,
    pub details: ServiceDetails,
}
