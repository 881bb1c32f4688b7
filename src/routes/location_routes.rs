use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::models::location::{Area, School};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_area_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_areas))
        .route("/:id", get(get_area))
        .route("/:id/schools", get(list_area_schools))
}

pub fn create_school_router() -> Router<AppState> {
    Router::new().route("/:id", get(get_school))
}

async fn list_areas(State(state): State<AppState>) -> Result<Json<Vec<Area>>, AppError> {
    let controller = LocationController::new(state.store.clone());
    Ok(Json(controller.list_areas().await?))
}

async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Area>, AppError> {
    let controller = LocationController::new(state.store.clone());
    Ok(Json(controller.get_area(id).await?))
}

async fn list_area_schools(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<School>>, AppError> {
    let controller = LocationController::new(state.store.clone());
    Ok(Json(controller.list_schools(id).await?))
}

async fn get_school(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<School>, AppError> {
    let controller = LocationController::new(state.store.clone());
    Ok(Json(controller.get_school(id).await?))
}
