use std::sync::Arc;

use validator::Validate;

use crate::dto::service_dto::{CreateServiceRequest, ServiceQuery, UpdateServiceRequest};
use crate::dto::SearchPage;
use crate::models::service_history::{NewServiceHistory, ServiceHistory};
use crate::models::update_log::AuditAction;
use crate::repositories::Store;
use crate::services::audit_log_service::{
    service_created_details, service_updated_details, AuditLogWriter,
};
use crate::utils::errors::{not_found_error, AppResult};

pub struct ServiceHistoryController {
    store: Arc<dyn Store>,
    actor: String,
}

impl ServiceHistoryController {
    pub fn new(store: Arc<dyn Store>, actor: String) -> Self {
        Self { store, actor }
    }

    fn audit(&self) -> AuditLogWriter<'_> {
        AuditLogWriter::new(self.store.as_ref(), &self.actor)
    }

    pub async fn list(&self, query: ServiceQuery) -> AppResult<Vec<ServiceHistory>> {
        self.store.list_services(&SearchPage::from(query)).await
    }

    pub async fn create(&self, request: CreateServiceRequest) -> AppResult<ServiceHistory> {
        request.validate()?;

        let service = self
            .store
            .insert_service(&NewServiceHistory::from(request))
            .await?;

        let details = service_created_details(&service.issue_description);
        let log = self
            .audit()
            .service_entry(&service, AuditAction::ServiceCreate, details)
            .await?;
        self.store.append_log(&log).await?;

        Ok(service)
    }

    pub async fn update(&self, id: i32, request: UpdateServiceRequest) -> AppResult<ServiceHistory> {
        request.validate()?;

        let mut service = self
            .store
            .find_service(id)
            .await?
            .ok_or_else(|| not_found_error("Service record", &id.to_string()))?;

        let old_status = service.details.status.clone();
        request.apply_to(&mut service);
        let service = self.store.save_service(&service).await?;

        let details =
            service_updated_details(old_status.as_deref(), service.details.status.as_deref());
        let log = self
            .audit()
            .service_entry(&service, AuditAction::ServiceUpdate, details)
            .await?;
        self.store.append_log(&log).await?;

        Ok(service)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service_history::ServiceDetails;
    use crate::repositories::memory::MemoryStore;
    use crate::utils::errors::AppError;
    use chrono::NaiveDate;
    use serde_json::json;

    fn controller() -> (Arc<MemoryStore>, ServiceHistoryController) {
        let store = Arc::new(MemoryStore::new());
        let controller = ServiceHistoryController::new(store.clone(), "Admin".to_string());
        (store, controller)
    }

    fn request(reference: &str, ticket: &str, date: Option<(i32, u32, u32)>) -> CreateServiceRequest {
        CreateServiceRequest {
            sn_or_barcode: reference.to_string(),
            issue_description: "Keyboard rusak".to_string(),
            details: ServiceDetails {
                ticket_no: Some(ticket.to_string()),
                service_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
                status: Some("Open".to_string()),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn test_create_unmatched_reference_still_logs() {
        let (store, controller) = controller();
        let service = controller
            .create(request("UNKNOWN-SN", "SIM-1", Some((2024, 1, 5))))
            .await
            .unwrap();

        assert_eq!(service.sn_or_barcode, "UNKNOWN-SN");
        let logs = store.logs().await;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].action, "SERVICE CREATE");
        assert_eq!(logs[0].details, "recording new service: Keyboard rusak");
        assert_eq!(logs[0].asset_name, "Service Item");
        assert_eq!(logs[0].school_name, "Unknown School");
        assert_eq!(logs[0].area_name, "Unknown Area");
    }

    #[tokio::test]
    async fn test_list_orders_undated_first_then_date_desc() {
        let (_store, controller) = controller();
        controller.create(request("A", "T-1", Some((2024, 1, 1)))).await.unwrap();
        controller.create(request("B", "T-3", Some((2024, 3, 1)))).await.unwrap();
        controller.create(request("C", "T-2", Some((2024, 2, 1)))).await.unwrap();
        controller.create(request("D", "T-0", None)).await.unwrap();

        let listed = controller.list(ServiceQuery::default()).await.unwrap();
        let refs: Vec<&str> = listed.iter().map(|s| s.sn_or_barcode.as_str()).collect();
        assert_eq!(refs, vec!["D", "B", "C", "A"]);
    }

    #[tokio::test]
    async fn test_list_search_matches_reference_or_ticket() {
        let (_store, controller) = controller();
        controller.create(request("LAP-77", "SIM-SJI-01", None)).await.unwrap();
        controller.create(request("PC-12", "SIM-BDG-02", None)).await.unwrap();

        let by_ticket = controller
            .list(ServiceQuery {
                search: Some("sji".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_ticket.len(), 1);
        assert_eq!(by_ticket[0].sn_or_barcode, "LAP-77");

        let by_reference = controller
            .list(ServiceQuery {
                search: Some("pc-1".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_reference.len(), 1);
        assert_eq!(by_reference[0].sn_or_barcode, "PC-12");
    }

    #[tokio::test]
    async fn test_update_status_transition_is_logged() {
        let (store, controller) = controller();
        let created = controller.create(request("LAP-1", "T-9", None)).await.unwrap();

        let update: UpdateServiceRequest =
            serde_json::from_value(json!({ "status": "Closed" })).unwrap();
        let updated = controller.update(created.id, update).await.unwrap();

        assert_eq!(updated.details.status.as_deref(), Some("Closed"));
        assert_eq!(updated.details.ticket_no.as_deref(), Some("T-9"));

        let logs = store.logs().await;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[1].action, "SERVICE UPDATE");
        assert_eq!(logs[1].details, "Update data service. Status: Open -> Closed");
    }

    #[tokio::test]
    async fn test_update_missing_service_is_not_found() {
        let (store, controller) = controller();
        let err = controller
            .update(5, UpdateServiceRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.logs().await.is_empty());
    }
}
