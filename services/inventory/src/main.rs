use std::sync::Arc;

use bootstrap::{Infrastructure, init_runtime, shutdown_signal};
use config::AppConfig;
use inventory::api;
use inventory::application::ServiceHandler;
use inventory::infrastructure::persistence::{
    PostgresMaterialRepository, PostgresTransactionRepository,
};
use inventory::infrastructure::settings::FileWarehouseStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load("config")?;
    init_runtime(&config);

    info!(
        app_name = %config.app_name,
        app_env = %config.app_env,
        "Starting inventory service"
    );

    let infra = Infrastructure::from_config(config).await?;
    let config = infra.config();
    let pool = infra.postgres_pool();

    let materials = Arc::new(PostgresMaterialRepository::new(pool.clone()));
    let transactions = Arc::new(PostgresTransactionRepository::new(pool));
    let warehouses = Arc::new(FileWarehouseStore::new(
        config.settings.warehouse_file.clone(),
    ));

    let handler = Arc::new(ServiceHandler::new(materials, transactions, warehouses));

    let app = api::routes(handler)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Inventory service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Inventory service stopped");
    Ok(())
}
