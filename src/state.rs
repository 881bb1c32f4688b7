//! Shared application state
//!
//! Passed to every handler through the axum router.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::repositories::{PgStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self::with_store(Arc::new(PgStore::new(pool)), config)
    }

    pub fn with_store(store: Arc<dyn Store>, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }

    /// Actor stamped on update logs written during this request
    pub fn actor(&self) -> String {
        self.config.audit_actor.clone()
    }
}
