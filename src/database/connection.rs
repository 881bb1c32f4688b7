//! PostgreSQL connection
//!
//! Opens the pool and applies the bundled migrations.

use anyhow::Result;
use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Connect to the database described by `config`
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    info!("🔗 Connecting to database: {}", mask_database_url(&config.url));
    let pool = config.create_pool().await?;
    info!("✅ Database connected");
    Ok(pool)
}

/// Apply the migrations under `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Migrations applied");
    Ok(())
}

/// Hide credentials in a database URL before logging it
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    match url.rfind('@') {
        Some(at_pos) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
