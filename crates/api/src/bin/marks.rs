//! Student marks service entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campusdb_api::config::ServerConfig;
use campusdb_api::state::AppState;
use campusdb_api::{router, seed};
use campusdb_db::Store;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "campusdb_api=debug,campusdb_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Loaded server configuration");

    let data_dir = ServerConfig::data_dir("MARKS_DATA_DIR", "data/marks");
    let store = Arc::new(Store::open(&data_dir).expect("Failed to open document store"));
    tracing::info!(path = %store.path().display(), "Document store ready");

    // Seeding races the listener; a request arriving first sees a
    // partially-seeded collection.
    tokio::spawn(seed::seed_marks(Arc::clone(&store)));

    let app = router::build_marks_app(AppState { store });

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("HOST/PORT must form a valid socket address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "marks-api listening");

    axum::serve(listener, app).await.expect("Server error");
}
