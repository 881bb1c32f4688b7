use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::asset_controller::AssetController;
use crate::dto::asset_dto::{AssetQuery, CreateAssetRequest, UpdateAssetRequest};
use crate::models::asset::Asset;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_asset_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assets).post(create_asset))
        .route("/barcode/:barcode", get(get_asset_by_barcode))
        .route("/:id", get(get_asset).put(update_asset).delete(delete_asset))
}

fn controller(state: &AppState) -> AssetController {
    AssetController::new(state.store.clone(), state.actor())
}

async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<AssetQuery>,
) -> Result<Json<Vec<Asset>>, AppError> {
    let assets = controller(&state).list(query).await?;
    Ok(Json(assets))
}

async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Asset>, AppError> {
    let asset = controller(&state).get_by_id(id).await?;
    Ok(Json(asset))
}

async fn get_asset_by_barcode(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Result<Json<Asset>, AppError> {
    let asset = controller(&state).get_by_barcode(&barcode).await?;
    Ok(Json(asset))
}

async fn create_asset(
    State(state): State<AppState>,
    Json(request): Json<CreateAssetRequest>,
) -> Result<Json<Asset>, AppError> {
    let asset = controller(&state).create(request).await?;
    Ok(Json(asset))
}

async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAssetRequest>,
) -> Result<Json<Asset>, AppError> {
    let asset = controller(&state).update(id, request).await?;
    Ok(Json(asset))
}

async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Asset>, AppError> {
    let asset = controller(&state).delete(id).await?;
    Ok(Json(asset))
}
