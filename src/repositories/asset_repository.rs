use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::QueryAs;
use sqlx::{Postgres, QueryBuilder};
use tracing::info;

use super::update_log_repository::insert_log;
use super::{like_pattern, AssetRepository, PgStore};
use crate::dto::asset_dto::AssetFilter;
use crate::models::asset::{Asset, AssetDetails, NewAsset};
use crate::models::update_log::NewUpdateLog;
use crate::utils::errors::{AppError, AppResult};

type AssetQueryAs<'q> = QueryAs<'q, Postgres, Asset, PgArguments>;

const INSERT_ASSET: &str = r#"
    INSERT INTO assets (
        barcode, school_id, city_code, type_code, category_code, subcategory_code,
        procurement_month, procurement_year, floor, sequence_number, placement, brand,
        room, model_series, ip_address, mac_address, serial_number, ram, processor,
        gpu, storage, os, connect_to, channel, username, password, assigned_to, status
    )
    VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
        $15, $16, $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28
    )
    RETURNING *
"#;

const UPDATE_ASSET: &str = r#"
    UPDATE assets
    SET barcode = $2, school_id = $3, city_code = $4, type_code = $5, category_code = $6,
        subcategory_code = $7, procurement_month = $8, procurement_year = $9, floor = $10,
        sequence_number = $11, placement = $12, brand = $13, room = $14, model_series = $15,
        ip_address = $16, mac_address = $17, serial_number = $18, ram = $19, processor = $20,
        gpu = $21, storage = $22, os = $23, connect_to = $24, channel = $25, username = $26,
        password = $27, assigned_to = $28, status = $29
    WHERE id = $1
    RETURNING *
"#;

// Binds the descriptive columns in the order used by INSERT_ASSET and UPDATE_ASSET.
fn bind_details<'q>(query: AssetQueryAs<'q>, d: &'q AssetDetails) -> AssetQueryAs<'q> {
    query
        .bind(d.city_code.as_deref())
        .bind(d.type_code.as_deref())
        .bind(d.category_code.as_deref())
        .bind(d.subcategory_code.as_deref())
        .bind(d.procurement_month.as_deref())
        .bind(d.procurement_year.as_deref())
        .bind(d.floor.as_deref())
        .bind(d.sequence_number.as_deref())
        .bind(d.placement.as_deref())
        .bind(d.brand.as_deref())
        .bind(d.room.as_deref())
        .bind(d.model_series.as_deref())
        .bind(d.ip_address.as_deref())
        .bind(d.mac_address.as_deref())
        .bind(d.serial_number.as_deref())
        .bind(d.ram.as_deref())
        .bind(d.processor.as_deref())
        .bind(d.gpu.as_deref())
        .bind(d.storage.as_deref())
        .bind(d.os.as_deref())
        .bind(d.connect_to.as_deref())
        .bind(d.channel.as_deref())
        .bind(d.username.as_deref())
        .bind(d.password.as_deref())
        .bind(d.assigned_to.as_deref())
        .bind(d.status.as_deref())
}

fn internal(e: sqlx::Error) -> AppError {
    AppError::Internal(e.to_string())
}

#[async_trait]
impl AssetRepository for PgStore {
    async fn list_assets(&self, filter: &AssetFilter) -> AppResult<Vec<Asset>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM assets WHERE TRUE");

        if let Some(school_id) = filter.school_id {
            query.push(" AND school_id = ").push_bind(school_id);
        }
        if let Some(type_code) = &filter.type_code {
            query.push(" AND type_code = ").push_bind(type_code.clone());
        }
        if let Some(category_code) = &filter.category_code {
            query.push(" AND category_code = ").push_bind(category_code.clone());
        }
        if let Some(search) = &filter.search {
            let pattern = like_pattern(search);
            query
                .push(" AND (barcode ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR serial_number ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR brand ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR model_series ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        query
            .push(" ORDER BY id OFFSET ")
            .push_bind(filter.offset)
            .push(" LIMIT ")
            .push_bind(filter.limit);

        let assets = query.build_query_as::<Asset>().fetch_all(&self.pool).await?;
        Ok(assets)
    }

    async fn find_asset(&self, id: i32) -> AppResult<Option<Asset>> {
        let asset = sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(asset)
    }

    async fn find_asset_by_barcode(&self, barcode: &str) -> AppResult<Option<Asset>> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets WHERE barcode = $1 ORDER BY id LIMIT 1",
        )
        .bind(barcode)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    async fn find_asset_by_serial_number(&self, serial_number: &str) -> AppResult<Option<Asset>> {
        let asset = sqlx::query_as::<_, Asset>(
            "SELECT * FROM assets WHERE serial_number = $1 ORDER BY id LIMIT 1",
        )
        .bind(serial_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    async fn barcode_exists(&self, barcode: &str) -> AppResult<bool> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM assets WHERE barcode = $1)")
                .bind(barcode)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    async fn create_asset_logged(&self, asset: &NewAsset, log: &NewUpdateLog) -> AppResult<Asset> {
        // Dropping `tx` on any early return rolls back the asset insert.
        let mut tx = self.pool.begin().await.map_err(internal)?;

        let query = sqlx::query_as::<_, Asset>(INSERT_ASSET)
            .bind(asset.barcode.as_str())
            .bind(asset.school_id);
        let created = bind_details(query, &asset.details)
            .fetch_one(&mut *tx)
            .await
            .map_err(internal)?;

        insert_log(&mut *tx, log).await.map_err(internal)?;
        tx.commit().await.map_err(internal)?;

        info!("Asset {} created with id {}", created.barcode, created.id);
        Ok(created)
    }

    async fn save_asset(&self, asset: &Asset) -> AppResult<Asset> {
        let query = sqlx::query_as::<_, Asset>(UPDATE_ASSET)
            .bind(asset.id)
            .bind(asset.barcode.as_str())
            .bind(asset.school_id);
        let saved = bind_details(query, &asset.details)
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn delete_asset_logged(&self, id: i32, log: &NewUpdateLog) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        insert_log(&mut *tx, log).await?;
        sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!("Asset {} deleted", id);
        Ok(())
    }
}
