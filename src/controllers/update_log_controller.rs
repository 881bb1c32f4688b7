use std::sync::Arc;

use crate::dto::update_log_dto::LogQuery;
use crate::dto::SearchPage;
use crate::models::update_log::UpdateLog;
use crate::repositories::Store;
use crate::utils::errors::AppResult;

pub struct UpdateLogController {
    store: Arc<dyn Store>,
}

impl UpdateLogController {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list(&self, query: LogQuery) -> AppResult<Vec<UpdateLog>> {
        self.store.list_logs(&SearchPage::from(query)).await
    }
}
