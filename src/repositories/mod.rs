//! Store access
//!
//! One async trait per resource, all implemented by `PgStore` over a
//! shared `PgPool`. Controllers only see `dyn Store`, which lets the unit
//! tests swap in the in-memory store from `memory`.

pub mod asset_repository;
pub mod location_repository;
pub mod service_history_repository;
pub mod update_log_repository;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::dto::asset_dto::AssetFilter;
use crate::dto::SearchPage;
use crate::models::asset::{Asset, NewAsset};
use crate::models::location::{Area, School, SchoolLocation};
use crate::models::service_history::{NewServiceHistory, ServiceHistory};
use crate::models::update_log::{NewUpdateLog, UpdateLog};
use crate::utils::errors::AppResult;

#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn list_assets(&self, filter: &AssetFilter) -> AppResult<Vec<Asset>>;

    async fn find_asset(&self, id: i32) -> AppResult<Option<Asset>>;

    async fn find_asset_by_barcode(&self, barcode: &str) -> AppResult<Option<Asset>>;

    async fn find_asset_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>>;

    async fn barcode_exists(&self, barcode: &str) -> AppResult<bool>;

    /// Insert the asset and its CREATE log atomically. Any failure rolls
    /// both back and is reported as `AppError::Internal` with the cause.
    async fn create_asset_logged(&self, asset: &NewAsset, log: &NewUpdateLog) -> AppResult<Asset>;

    /// Persist every column of an already loaded asset
    async fn save_asset(&self, asset: &Asset) -> AppResult<Asset>;

    /// Write the DELETE log and remove the row in a single commit
    async fn delete_asset_logged(&self, id: i32, log: &NewUpdateLog) -> AppResult<()>;
}

#[async_trait]
pub trait ServiceHistoryRepository: Send + Sync {
    async fn list_services(&self, page: &SearchPage) -> AppResult<Vec<ServiceHistory>>;

    async fn find_service(&self, id: i32) -> AppResult<Option<ServiceHistory>>;

    async fn insert_service(&self, service: &NewServiceHistory) -> AppResult<ServiceHistory>;

    async fn save_service(&self, service: &ServiceHistory) -> AppResult<ServiceHistory>;
}

#[async_trait]
pub trait UpdateLogRepository: Send + Sync {
    async fn append_log(&self, log: &NewUpdateLog) -> AppResult<UpdateLog>;

    async fn list_logs(&self, page: &SearchPage) -> AppResult<Vec<UpdateLog>>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list_areas(&self) -> AppResult<Vec<Area>>;

    async fn find_area(&self, id: i32) -> AppResult<Option<Area>>;

    async fn list_schools_by_area(&self, area_id: i32) -> AppResult<Vec<School>>;

    async fn find_school(&self, id: i32) -> AppResult<Option<School>>;

    /// School name with its area name joined in
    async fn find_school_location(&self, school_id: i32) -> AppResult<Option<SchoolLocation>>;
}

/// Everything the controllers need from the store
pub trait Store:
    AssetRepository + ServiceHistoryRepository + UpdateLogRepository + LocationRepository
{
}

impl<T> Store for T where
    T: AssetRepository + ServiceHistoryRepository + UpdateLogRepository + LocationRepository
{
}

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `ILIKE` pattern matching `term` literally anywhere in the column
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("lenovo"), "%lenovo%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
