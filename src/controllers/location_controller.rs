use std::sync::Arc;

use crate::models::location::{Area, School};
use crate::repositories::Store;
use crate::utils::errors::{not_found_error, AppResult};

pub struct LocationController {
    store: Arc<dyn Store>,
}

impl LocationController {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn list_areas(&self) -> AppResult<Vec<Area>> {
        self.store.list_areas().await
    }

    pub async fn get_area(&self, id: i32) -> AppResult<Area> {
        self.store
            .find_area(id)
            .await?
            .ok_or_else(|| not_found_error("Area", &id.to_string()))
    }

    pub async fn list_schools(&self, area_id: i32) -> AppResult<Vec<School>> {
        let area = self.get_area(area_id).await?;
        self.store.list_schools_by_area(area.id).await
    }

    pub async fn get_school(&self, id: i32) -> AppResult<School> {
        self.store
            .find_school(id)
            .await?
            .ok_or_else(|| not_found_error("School", &id.to_string()))
    }
}
