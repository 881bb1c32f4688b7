//! In-memory store for unit tests
//!
//! Mirrors the filtering, ordering and atomicity of `PgStore` closely enough
//! to exercise the controllers and routes without a database.

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{AssetRepository, LocationRepository, ServiceHistoryRepository, UpdateLogRepository};
use crate::dto::asset_dto::AssetFilter;
use crate::dto::SearchPage;
use crate::models::asset::{Asset, NewAsset};
use crate::models::location::{Area, School, SchoolLocation};
use crate::models::service_history::{NewServiceHistory, ServiceHistory};
use crate::models::update_log::{NewUpdateLog, UpdateLog};
use crate::utils::errors::{AppError, AppResult};

#[derive(Default)]
struct Tables {
    areas: Vec<Area>,
    schools: Vec<School>,
    assets: Vec<Asset>,
    services: Vec<ServiceHistory>,
    logs: Vec<UpdateLog>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn push_log(&mut self, log: &NewUpdateLog) -> UpdateLog {
        let row = UpdateLog {
            id: self.next_id(),
            asset_barcode: log.asset_barcode.clone(),
            asset_name: log.asset_name.clone(),
            action: log.action.as_str().to_string(),
            details: log.details.clone(),
            actor: log.actor.clone(),
            school_name: log.school_name.clone(),
            area_name: log.area_name.clone(),
            created_at: Utc::now(),
        };
        self.logs.push(row.clone());
        row
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    fail_log_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_area(&self, name: &str) -> Area {
        let mut tables = self.tables.write().await;
        let area = Area {
            id: tables.next_id(),
            name: name.to_string(),
        };
        tables.areas.push(area.clone());
        area
    }

    pub async fn add_school(&self, name: &str, area_id: Option<i32>) -> School {
        let mut tables = self.tables.write().await;
        let school = School {
            id: tables.next_id(),
            name: name.to_string(),
            area_id,
        };
        tables.schools.push(school.clone());
        school
    }

    pub async fn logs(&self) -> Vec<UpdateLog> {
        self.tables.read().await.logs.clone()
    }

    pub async fn asset_count(&self) -> usize {
        self.tables.read().await.assets.len()
    }

    /// Make every subsequent log insert fail
    pub fn fail_log_writes(&self) {
        self.fail_log_writes.store(true, Ordering::SeqCst);
    }

    fn log_write_error(&self) -> Option<AppError> {
        self.fail_log_writes
            .load(Ordering::SeqCst)
            .then(|| AppError::Internal("update_logs insert failed".to_string()))
    }
}

// Case-insensitive substring test standing in for `ILIKE '%term%'`
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(&needle.to_lowercase()))
        .unwrap_or(false)
}

fn page<T>(rows: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    rows.into_iter()
        .skip(usize::try_from(offset).unwrap_or(0))
        .take(usize::try_from(limit).unwrap_or(0))
        .collect()
}

#[async_trait]
impl AssetRepository for MemoryStore {
    async fn list_assets(&self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<Asset> = tables
            .assets
            .iter()
            .filter(|a| filter.school_id.map_or(true, |id| a.school_id == id))
            .filter(|a| {
                filter
                    .type_code
                    .as_deref()
                    .map_or(true, |t| a.details.type_code.as_deref() == Some(t))
            })
            .filter(|a| {
                filter
                    .category_code
                    .as_deref()
                    .map_or(true, |c| a.details.category_code.as_deref() == Some(c))
            })
            .filter(|a| {
                filter.search.as_deref().map_or(true, |s| {
                    contains_ignore_case(Some(&a.barcode), s)
                        || contains_ignore_case(a.details.serial_number.as_deref(), s)
                        || contains_ignore_case(a.details.brand.as_deref(), s)
                        || contains_ignore_case(a.details.model_series.as_deref(), s)
                })
            })
            .cloned()
            .collect();
        rows.sort_by_key(|a| a.id);
        Ok(page(rows, filter.offset, filter.limit))
    }

    async fn find_asset(&self, id: i32) -> AppResult<Option<Asset>> {
        let tables = self.tables.read().await;
        Ok(tables.assets.iter().find(|a| a.id == id).cloned())
    }

    async fn find_asset_by_barcode(&self, barcode: &str) -> AppResult<Option<Asset>> {
        let tables = self.tables.read().await;
        Ok(tables.assets.iter().find(|a| a.barcode == barcode).cloned())
    }

    async fn find_asset_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>> {
        let tables = self.tables.read().await;
        Ok(tables
            .assets
            .iter()
            .find(|a| a.details.serial_number.as_deref() == Some(serial_number))
            .cloned())
    }

    async fn barcode_exists(&self, barcode: &str) -> AppResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables.assets.iter().any(|a| a.barcode == barcode))
    }

    async fn create_asset_logged(&self, asset: &NewAsset, log: &NewUpdateLog) -> AppResult<Asset> {
        let mut tables = self.tables.write().await;
        let created = Asset {
            id: tables.next_id(),
            barcode: asset.barcode.clone(),
            school_id: asset.school_id,
            details: asset.details.clone(),
        };
        tables.assets.push(created.clone());

        // Log write fails after the insert: undo it like a rolled back transaction.
        if let Some(err) = self.log_write_error() {
            tables.assets.retain(|a| a.id != created.id);
            return Err(err);
        }

        tables.push_log(log);
        Ok(created)
    }

    async fn save_asset(&self, asset: &Asset) -> AppResult<Asset> {
        let mut tables = self.tables.write().await;
        let row = tables
            .assets
            .iter_mut()
            .find(|a| a.id == asset.id)
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
        *row = asset.clone();
        Ok(asset.clone())
    }

    async fn delete_asset_logged(&self, id: i32, log: &NewUpdateLog) -> AppResult<()> {
        if let Some(err) = self.log_write_error() {
            return Err(err);
        }

        let mut tables = self.tables.write().await;
        tables.push_log(log);
        tables.assets.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl ServiceHistoryRepository for MemoryStore {
    async fn list_services(&self, page_req: &SearchPage) -> AppResult<Vec<ServiceHistory>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<ServiceHistory> = tables
            .services
            .iter()
            .filter(|s| {
                page_req.search.as_deref().map_or(true, |q| {
                    contains_ignore_case(Some(&s.sn_or_barcode), q)
                        || contains_ignore_case(s.details.ticket_no.as_deref(), q)
                })
            })
            .cloned()
            .collect();
        // Postgres `service_date DESC, id DESC`: undated tickets sort first
        rows.sort_by_key(|s| {
            (
                s.details.service_date.is_some(),
                Reverse(s.details.service_date),
                Reverse(s.id),
            )
        });
        Ok(page(rows, page_req.offset, page_req.limit))
    }

    async fn find_service(&self, id: i32) -> AppResult<Option<ServiceHistory>> {
        let tables = self.tables.read().await;
        Ok(tables.services.iter().find(|s| s.id == id).cloned())
    }

    async fn insert_service(&self, service: &NewServiceHistory) -> AppResult<ServiceHistory> {
        let mut tables = self.tables.write().await;
        let created = ServiceHistory {
            id: tables.next_id(),
            sn_or_barcode: service.sn_or_barcode.clone(),
            issue_description: service.issue_description.clone(),
            details: service.details.clone(),
        };
        tables.services.push(created.clone());
        Ok(created)
    }

    async fn save_service(&self, service: &ServiceHistory) -> AppResult<ServiceHistory> {
        let mut tables = self.tables.write().await;
        let row = tables
            .services
            .iter_mut()
            .find(|s| s.id == service.id)
            .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
        *row = service.clone();
        Ok(service.clone())
    }
}

#[async_trait]
impl UpdateLogRepository for MemoryStore {
    async fn append_log(&self, log: &NewUpdateLog) -> AppResult<UpdateLog> {
        if let Some(err) = self.log_write_error() {
            return Err(err);
        }
        Ok(self.tables.write().await.push_log(log))
    }

    async fn list_logs(&self, page_req: &SearchPage) -> AppResult<Vec<UpdateLog>> {
        let tables = self.tables.read().await;
        let mut rows: Vec<UpdateLog> = tables
            .logs
            .iter()
            .filter(|l| {
                page_req.search.as_deref().map_or(true, |q| {
                    contains_ignore_case(Some(&l.asset_barcode), q)
                        || contains_ignore_case(Some(&l.asset_name), q)
                        || contains_ignore_case(Some(&l.school_name), q)
                        || contains_ignore_case(Some(&l.area_name), q)
                })
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(page(rows, page_req.offset, page_req.limit))
    }
}

#[async_trait]
impl LocationRepository for MemoryStore {
    async fn list_areas(&self) -> AppResult<Vec<Area>> {
        let mut areas = self.tables.read().await.areas.clone();
        areas.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(areas)
    }

    async fn find_area(&self, id: i32) -> AppResult<Option<Area>> {
        let tables = self.tables.read().await;
        Ok(tables.areas.iter().find(|a| a.id == id).cloned())
    }

    async fn list_schools_by_area(&self, area_id: i32) -> AppResult<Vec<School>> {
        let tables = self.tables.read().await;
        let mut schools: Vec<School> = tables
            .schools
            .iter()
            .filter(|s| s.area_id == Some(area_id))
            .cloned()
            .collect();
        schools.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(schools)
    }

    async fn find_school(&self, id: i32) -> AppResult<Option<School>> {
        let tables = self.tables.read().await;
        Ok(tables.schools.iter().find(|s| s.id == id).cloned())
    }

    async fn find_school_location(&self, school_id: i32) -> AppResult<Option<SchoolLocation>> {
        let tables = self.tables.read().await;
        let Some(school) = tables.schools.iter().find(|s| s.id == school_id) else {
            return Ok(None);
        };
        let area_name = school
            .area_id
            .and_then(|id| tables.areas.iter().find(|a| a.id == id))
            .map(|a| a.name.clone());

        Ok(Some(SchoolLocation {
            school_name: school.name.clone(),
            area_name,
        }))
    }
}
