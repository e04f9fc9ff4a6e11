use sea_orm::Database;
use tracing::info;

use fittrack_core::config::Config;
use fittrack_core::middleware::cors_layer;
use fittrack_core::tracing::init_tracing;
use fittrack_tracker::config::TrackerConfig;
use fittrack_tracker::router::build_router;
use fittrack_tracker::state::AppState;
use fittrack_tracker_migration::{Migrator, MigratorTrait};

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = TrackerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to apply migrations");
        info!("database migrations applied");
    }

    let state = AppState { db };

    let router = build_router(state).layer(cors_layer(&config.cors_allowed_origins));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("tracker service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
