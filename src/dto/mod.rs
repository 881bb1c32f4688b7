//! Request, response and query payloads

pub mod asset_dto;
pub mod service_dto;
pub mod update_log_dto;

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable patch field so that an explicit `null` becomes
/// `Some(None)` while an absent field (via `#[serde(default)]`) stays `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Search term plus offset pagination shared by the ledger and log listings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub search: Option<String>,
    pub offset: i64,
    pub limit: i64,
}
