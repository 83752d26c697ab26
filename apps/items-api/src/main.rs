//! Items API - REST server backed by PostgreSQL

use axum_helpers::serve;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_items::PgItemRepository;
use items_api::{build_app, config::Config};
use migration::Migrator;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;
    database::postgres::check_health(&db).await?;

    if config.run_migrations {
        database::postgres::run_migrations::<Migrator>(&db, "items-api").await?;
    }

    let app = build_app(PgItemRepository::new(db.clone()));

    info!("Starting Items API with graceful shutdown (30s cleanup timeout)");

    serve(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
