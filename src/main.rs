use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use asset_registry::config::{DatabaseConfig, EnvironmentConfig};
use asset_registry::database::{create_pool, run_migrations};
use asset_registry::routes::create_app_router;
use asset_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🏫 School Asset Registry");
    info!("========================");
    info!("🌍 Environment: {}", config.environment);

    let pool = match create_pool(&DatabaseConfig::from_env()?).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error connecting to the database: {}", e);
            return Err(e);
        }
    };

    if config.run_migrations {
        run_migrations(&pool).await?;
    } else {
        warn!("⚠️ RUN_MIGRATIONS disabled, assuming schema is up to date");
    }

    let addr = config.server_url();
    let app = create_app_router(AppState::new(pool, config));

    info!("🌐 Server listening on http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET    /health");
    info!("   GET    /assets?school_id=&type_code=&category_code=&search=&skip=&limit=");
    info!("   POST   /assets");
    info!("   GET    /assets/:id | /assets/barcode/:barcode");
    info!("   PUT    /assets/:id");
    info!("   DELETE /assets/:id");
    info!("   GET    /service-histories?search=&skip=&limit=");
    info!("   POST   /service-histories");
    info!("   PUT    /service-histories/:id");
    info!("   GET    /logs?search=&skip=&limit=");
    info!("   GET    /areas | /areas/:id | /areas/:id/schools | /schools/:id");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Server error: {}", e);
            e
        })?;

    info!("👋 Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
