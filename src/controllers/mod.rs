//! Controllers: business rules between the HTTP handlers and the store

pub mod asset_controller;
pub mod location_controller;
pub mod service_history_controller;
pub mod update_log_controller;
