use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::dto::{present, SearchPage};
use crate::models::service_history::{NewServiceHistory, ServiceDetails, ServiceHistory};
use crate::utils::validation::{non_empty, page_bounds, validate_not_blank};

// Request to record a service ticket
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequest {
    #[validate(custom = "validate_not_blank")]
    pub sn_or_barcode: String,
    #[validate(custom = "validate_not_blank")]
    pub issue_description: String,
    #[serde(flatten)]
    pub details: ServiceDetails,
}

impl From<CreateServiceRequest> for NewServiceHistory {
    fn from(request: CreateServiceRequest) -> Self {
        Self {
            sn_or_barcode: request.sn_or_barcode,
            issue_description: request.issue_description,
            details: request.details,
        }
    }
}

// Partial update of a service ticket
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateServiceRequest {
    #[validate(custom = "validate_not_blank")]
    pub sn_or_barcode: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub issue_description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub ticket_no: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub service_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "present")]
    pub asset_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub production_year: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub unit_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub owner: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub vendor: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub status: Option<Option<String>>,
}

impl UpdateServiceRequest {
    /// Copy every field present in the request onto `service`
    pub fn apply_to(self, service: &mut ServiceHistory) {
        if let Some(v) = self.sn_or_barcode {
            service.sn_or_barcode = v;
        }
        if let Some(v) = self.issue_description {
            service.issue_description = v;
        }

        let d = &mut service.details;
        if let Some(v) = self.ticket_no {
            d.ticket_no = v;
        }
        if let Some(v) = self.service_date {
            d.service_date = v;
        }
        if let Some(v) = self.asset_name {
            d.asset_name = v;
        }
        if let Some(v) = self.production_year {
            d.production_year = v;
        }
        if let Some(v) = self.unit_name {
            d.unit_name = v;
        }
        if let Some(v) = self.owner {
            d.owner = v;
        }
        if let Some(v) = self.vendor {
            d.vendor = v;
        }
        if let Some(v) = self.status {
            d.status = v;
        }
    }
}

// Query parameters of GET /service-histories
#[derive(Debug, Default, Deserialize)]
pub struct ServiceQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

impl From<ServiceQuery> for SearchPage {
    fn from(query: ServiceQuery) -> Self {
        let (offset, limit) = page_bounds(query.skip, query.limit);
        Self {
            search: non_empty(query.search.as_deref()).map(str::to_string),
            offset,
            limit,
        }
    }
}
