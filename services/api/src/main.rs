use sea_orm::Database;
use tracing::info;

use gigboard_core::config::Config;
use gigboard_core::tracing::init_tracing;

use gigboard_api::config::ApiConfig;
use gigboard_api::router::build_router;
use gigboard_api::seed::reset_and_seed;
use gigboard_api::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    reset_and_seed(&db, &config.seed_dir)
        .await
        .expect("failed to seed database");

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("api service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
