use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::update_log_controller::UpdateLogController;
use crate::dto::update_log_dto::LogQuery;
use crate::models::update_log::UpdateLog;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_update_log_router() -> Router<AppState> {
    Router::new().route("/", get(list_logs))
}

async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<Json<Vec<UpdateLog>>, AppError> {
    let controller = UpdateLogController::new(state.store.clone());
    let logs = controller.list(query).await?;
    Ok(Json(logs))
}
