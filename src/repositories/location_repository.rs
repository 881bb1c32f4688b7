use async_trait::async_trait;

use super::{LocationRepository, PgStore};
use crate::models::location::{Area, School, SchoolLocation};
use crate::utils::errors::AppResult;

#[async_trait]
impl LocationRepository for PgStore {
    async fn list_areas(&self) -> AppResult<Vec<Area>> {
        let areas = sqlx::query_as::<_, Area>("SELECT id, name FROM areas ORDER BY name, id")
            .fetch_all(&self.pool)
            .await?;

        Ok(areas)
    }

    async fn find_area(&self, id: i32) -> AppResult<Option<Area>> {
        let area = sqlx::query_as::<_, Area>("SELECT id, name FROM areas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(area)
    }

    async fn list_schools_by_area(&self, area_id: i32) -> AppResult<Vec<School>> {
        let schools = sqlx::query_as::<_, School>(
            "SELECT id, name, area_id FROM schools WHERE area_id = $1 ORDER BY name, id",
        )
        .bind(area_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(schools)
    }

    async fn find_school(&self, id: i32) -> AppResult<Option<School>> {
        let school = sqlx::query_as::<_, School>("SELECT id, name, area_id FROM schools WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(school)
    }

    async fn find_school_location(&self, school_id: i32) -> AppResult<Option<SchoolLocation>> {
        let location = sqlx::query_as::<_, SchoolLocation>(
            r#"
            SELECT s.name AS school_name, a.name AS area_name
            FROM schools s
            LEFT JOIN areas a ON a.id = s.area_id
            WHERE s.id = $1
            "#,
        )
        .bind(school_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(location)
    }
}
