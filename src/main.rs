use std::net::SocketAddr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

use stockledger_backend::logging::{init_logging, LoggingConfig};
use stockledger_backend::state::AppState;
use stockledger_backend::{app, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "stockledger.db".to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(&database_path)
                .create_if_missing(true),
        )
        .await?;

    // Equivalent of a create_all: the single table is bootstrapped on startup.
    db::create_schema(&pool).await?;
    tracing::info!("Database ready at {}", database_path);

    let state = AppState { pool };
    let app = app::create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Stockledger backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
