use serde::Deserialize;

use crate::dto::SearchPage;
use crate::utils::validation::{non_empty, page_bounds};

// Query parameters of GET /logs
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

impl From<LogQuery> for SearchPage {
    fn from(query: LogQuery) -> Self {
        let (offset, limit) = page_bounds(query.skip, query.limit);
        Self {
            search: non_empty(query.search.as_deref()).map(str::to_string),
            offset,
            limit,
        }
    }
}
