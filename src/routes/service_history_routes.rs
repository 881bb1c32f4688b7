use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};

use crate::controllers::service_history_controller::ServiceHistoryController;
use crate::dto::service_dto::{CreateServiceRequest, ServiceQuery, UpdateServiceRequest};
use crate::models::service_history::ServiceHistory;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_history_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route("/:id", put(update_service))
}

fn controller(state: &AppState) -> ServiceHistoryController {
    ServiceHistoryController::new(state.store.clone(), state.actor())
}

async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Result<Json<Vec<ServiceHistory>>, AppError> {
    let services = controller(&state).list(query).await?;
    Ok(Json(services))
}

async fn create_service(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<ServiceHistory>, AppError> {
    let service = controller(&state).create(request).await?;
    Ok(Json(service))
}

async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<ServiceHistory>, AppError> {
    let service = controller(&state).update(id, request).await?;
    Ok(Json(service))
}
