use async_trait::async_trait;
use sqlx::{PgExecutor, Postgres, QueryBuilder};
use tracing::info;

use super::{like_pattern, PgStore, UpdateLogRepository};
use crate::dto::SearchPage;
use crate::models::update_log::{NewUpdateLog, UpdateLog};
use crate::utils::errors::AppResult;

/// Insert a log row on any executor, so callers can stage it inside their
/// own transaction.
pub(crate) async fn insert_log<'e, E>(executor: E, log: &NewUpdateLog) -> Result<UpdateLog, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let row = sqlx::query_as::<_, UpdateLog>(
        r#"
        INSERT INTO update_logs (asset_barcode, asset_name, action, details, actor, school_name, area_name)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(log.asset_barcode.as_str())
    .bind(log.asset_name.as_str())
    .bind(log.action.as_str())
    .bind(log.details.as_str())
    .bind(log.actor.as_str())
    .bind(log.school_name.as_str())
    .bind(log.area_name.as_str())
    .fetch_one(executor)
    .await?;

    info!(
        "📝 {} logged for {} by {} ({} / {})",
        row.action, row.asset_barcode, row.actor, row.school_name, row.area_name
    );
    Ok(row)
}

#[async_trait]
impl UpdateLogRepository for PgStore {
    async fn append_log(&self, log: &NewUpdateLog) -> AppResult<UpdateLog> {
        Ok(insert_log(&self.pool, log).await?)
    }

    async fn list_logs(&self, page: &SearchPage) -> AppResult<Vec<UpdateLog>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM update_logs");

        if let Some(search) = &page.search {
            let pattern = like_pattern(search);
            query
                .push(" WHERE asset_barcode ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR asset_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR school_name ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR area_name ILIKE ")
                .push_bind(pattern);
        }

        query
            .push(" ORDER BY created_at DESC, id DESC OFFSET ")
            .push_bind(page.offset)
            .push(" LIMIT ")
            .push_bind(page.limit);

        let logs = query.build_query_as::<UpdateLog>().fetch_all(&self.pool).await?;
        Ok(logs)
    }
}
