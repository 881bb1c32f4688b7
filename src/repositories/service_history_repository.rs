use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder};

use super::{like_pattern, PgStore, ServiceHistoryRepository};
use crate::dto::SearchPage;
use crate::models::service_history::{NewServiceHistory, ServiceHistory};
use crate::utils::errors::AppResult;

#[async_trait]
impl ServiceHistoryRepository for PgStore {
    async fn list_services(&self, page: &SearchPage) -> AppResult<Vec<ServiceHistory>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM service_histories");

        if let Some(search) = &page.search {
            let pattern = like_pattern(search);
            query
                .push(" WHERE sn_or_barcode ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR ticket_no ILIKE ")
                .push_bind(pattern);
        }

        query
            .push(" ORDER BY service_date DESC, id DESC OFFSET ")
            .push_bind(page.offset)
            .push(" LIMIT ")
            .push_bind(page.limit);

        let services = query
            .build_query_as::<ServiceHistory>()
            .fetch_all(&self.pool)
            .await?;
        Ok(services)
    }

    async fn find_service(&self, id: i32) -> AppResult<Option<ServiceHistory>> {
        let service =
            sqlx::query_as::<_, ServiceHistory>("SELECT * FROM service_histories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(service)
    }

    async fn insert_service(&self, service: &NewServiceHistory) -> AppResult<ServiceHistory> {
        let d = &service.details;
        let created = sqlx::query_as::<_, ServiceHistory>(
            r#"
            INSERT INTO service_histories (
                sn_or_barcode, issue_description, ticket_no, service_date, asset_name,
                production_year, unit_name, owner, vendor, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(service.sn_or_barcode.as_str())
        .bind(service.issue_description.as_str())
        .bind(d.ticket_no.as_deref())
        .bind(d.service_date)
        .bind(d.asset_name.as_deref())
        .bind(d.production_year.as_deref())
        .bind(d.unit_name.as_deref())
        .bind(d.owner.as_deref())
        .bind(d.vendor.as_deref())
        .bind(d.status.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn save_service(&self, service: &ServiceHistory) -> AppResult<ServiceHistory> {
        let d = &service.details;
        let saved = sqlx::query_as::<_, ServiceHistory>(
            r#"
            UPDATE service_histories
            SET sn_or_barcode = $2, issue_description = $3, ticket_no = $4, service_date = $5,
                asset_name = $6, production_year = $7, unit_name = $8, owner = $9,
                vendor = $10, status = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(service.id)
        .bind(service.sn_or_barcode.as_str())
        .bind(service.issue_description.as_str())
        .bind(d.ticket_no.as_deref())
        .bind(d.service_date)
        .bind(d.asset_name.as_deref())
        .bind(d.production_year.as_deref())
        .bind(d.unit_name.as_deref())
        .bind(d.owner.as_deref())
        .bind(d.vendor.as_deref())
        .bind(d.status.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(saved)
    }
}
