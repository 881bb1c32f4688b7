//! Audit log writer
//!
//! Builds `UpdateLog` entries for asset and service mutations. Entries are
//! only staged here; the caller persists them together with its own write.

use tracing::debug;

use crate::models::asset::{Asset, AssetDetails};
use crate::models::location::Location;
use crate::models::service_history::ServiceHistory;
use crate::models::update_log::{AuditAction, NewUpdateLog};
use crate::repositories::Store;
use crate::utils::errors::AppResult;

pub const ASSET_CREATED: &str = "adding new asset to database";
pub const ASSET_UPDATED: &str = "updating asset data";
pub const ASSET_DELETED: &str = "removing asset from database";

/// Asset name used when a service ticket does not name its item
pub const SERVICE_ITEM: &str = "Service Item";

pub fn service_created_details(issue_description: &str) -> String {
    format!("recording new service: {}", issue_description)
}

pub fn service_updated_details(old_status: Option<&str>, new_status: Option<&str>) -> String {
    format!(
        "Update data service. Status: {} -> {}",
        old_status.unwrap_or("-"),
        new_status.unwrap_or("-")
    )
}

pub struct AuditLogWriter<'a> {
    store: &'a dyn Store,
    actor: &'a str,
}

impl<'a> AuditLogWriter<'a> {
    pub fn new(store: &'a dyn Store, actor: &'a str) -> Self {
        Self { store, actor }
    }

    /// School and area names for `school_id`, falling back to the
    /// "Unknown" placeholders when either is missing.
    pub async fn resolve_location(&self, school_id: i32) -> AppResult<Location> {
        let location = self
            .store
            .find_school_location(school_id)
            .await?
            .map(Location::from)
            .unwrap_or_default();

        Ok(location)
    }

    /// Entry for a mutation of the asset identified by `barcode`
    pub async fn asset_entry(
        &self,
        barcode: &str,
        school_id: i32,
        details: &AssetDetails,
        action: AuditAction,
        message: &str,
    ) -> AppResult<NewUpdateLog> {
        let location = self.resolve_location(school_id).await?;

        Ok(NewUpdateLog {
            asset_barcode: barcode.to_string(),
            asset_name: details.display_name(),
            action,
            details: message.to_string(),
            actor: self.actor.to_string(),
            school_name: location.school_name,
            area_name: location.area_name,
        })
    }

    /// Entry for a service ticket. The referenced asset, if any, only
    /// contributes its school and area names.
    pub async fn service_entry(
        &self,
        service: &ServiceHistory,
        action: AuditAction,
        details: String,
    ) -> AppResult<NewUpdateLog> {
        let location = match self.find_referenced_asset(&service.sn_or_barcode).await? {
            Some(asset) => self.resolve_location(asset.school_id).await?,
            None => Location::default(),
        };

        let asset_name = service
            .details
            .asset_name
            .clone()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| SERVICE_ITEM.to_string());

        Ok(NewUpdateLog {
            asset_barcode: service.sn_or_barcode.clone(),
            asset_name,
            action,
            details,
            actor: self.actor.to_string(),
            school_name: location.school_name,
            area_name: location.area_name,
        })
    }

    // Barcode match wins over serial number match.
    async fn find_referenced_asset(&self, reference: &str) -> AppResult<Option<Asset>> {
        if let Some(asset) = self.store.find_asset_by_barcode(reference).await? {
            return Ok(Some(asset));
        }

        let by_serial = self.store.find_asset_by_serial_number(reference).await?;
        if by_serial.is_none() {
            debug!("No asset matches service reference {}", reference);
        }
        Ok(by_serial)
    }
}
