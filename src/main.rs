use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use fyyur_server::config::{Config, SecurityHeaders, StoreKind};
use fyyur_server::routes::create_routes;
use fyyur_server::store::{MemoryStore, PgStore};
use fyyur_server::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let state = match config.store {
        StoreKind::Postgres => {
            let store = PgStore::connect(&config.database_url, config.max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Successfully connected to database");

            store.migrate().await.expect("Failed to run migrations");
            tracing::info!("Migrations run successfully");

            AppState::new(store)
        }
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store, data is lost on exit");
            AppState::new(MemoryStore::new())
        }
    };

    let app = create_routes(state, SecurityHeaders::new(config.production));

    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
