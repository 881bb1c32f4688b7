//! Data models
//!
//! Row types mapping the PostgreSQL schema in `migrations/`.

pub mod asset;
pub mod location;
pub mod service_history;
pub mod update_log;
