use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::asset_dto::{AssetFilter, AssetQuery, CreateAssetRequest, UpdateAssetRequest};
use crate::models::asset::{Asset, NewAsset};
use crate::models::update_log::AuditAction;
use crate::repositories::Store;
use crate::services::audit_log_service::{
    AuditLogWriter, ASSET_CREATED, ASSET_DELETED, ASSET_UPDATED,
};
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct AssetController {
    store: Arc<dyn Store>,
    actor: String,
}

impl AssetController {
    pub fn new(store: Arc<dyn Store>, actor: String) -> Self {
        Self { store, actor }
    }

    fn audit(&self) -> AuditLogWriter<'_> {
        AuditLogWriter::new(self.store.as_ref(), &self.actor)
    }

    pub async fn list(&self, query: AssetQuery) -> AppResult<Vec<Asset>> {
        let filter = AssetFilter::from(query);

        if let Some(school_id) = filter.school_id {
            if self.store.find_school(school_id).await?.is_none() {
                return Err(not_found_error("School", &school_id.to_string()));
            }
        }

        self.store.list_assets(&filter).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Asset> {
        self.store
            .find_asset(id)
            .await?
            .ok_or_else(|| not_found_error("Asset", &id.to_string()))
    }

    pub async fn get_by_barcode(&self, barcode: &str) -> AppResult<Asset> {
        self.store
            .find_asset_by_barcode(barcode)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset with barcode '{}' not found", barcode)))
    }

    pub async fn create(&self, request: CreateAssetRequest) -> AppResult<Asset> {
        request.validate()?;

        if self.store.barcode_exists(&request.barcode).await? {
            return Err(AppError::Conflict(format!(
                "Barcode {} already registered",
                request.barcode
            )));
        }

        let new_asset = NewAsset::from(request);

        // Location lookup belongs to the atomic create path: its failures are Internal too.
        let log = self
            .audit()
            .asset_entry(
                &new_asset.barcode,
                new_asset.school_id,
                &new_asset.details,
                AuditAction::Create,
                ASSET_CREATED,
            )
            .await
            .map_err(AppError::into_internal)?;

        self.store.create_asset_logged(&new_asset, &log).await
    }

    pub async fn update(&self, id: i32, request: UpdateAssetRequest) -> AppResult<Asset> {
        request.validate()?;

        let mut asset = self.get_by_id(id).await?;
        request.apply_to(&mut asset);
        let asset = self.store.save_asset(&asset).await?;

        let log = self
            .audit()
            .asset_entry(
                &asset.barcode,
                asset.school_id,
                &asset.details,
                AuditAction::Update,
                ASSET_UPDATED,
            )
            .await?;
        self.store.append_log(&log).await?;

        info!("Asset {} updated", asset.id);
        Ok(asset)
    }

    /// Remove the asset and return its last known values
    pub async fn delete(&self, id: i32) -> AppResult<Asset> {
        let asset = self.get_by_id(id).await?;

        let log = self
            .audit()
            .asset_entry(
                &asset.barcode,
                asset.school_id,
                &asset.details,
                AuditAction::Delete,
                ASSET_DELETED,
            )
            .await?;
        self.store.delete_asset_logged(asset.id, &log).await?;

        Ok(asset)
    }
}
