use std::net::SocketAddr;

use tokio::net::TcpListener;
use trade_service::config::Config;
use trade_service::db;
use trade_service::router::create_router;
use trade_service::state::AppState;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    tracing::info!("Starting trade intake service");

    let config = Config::from_env()?;

    // Connect to the document store; unreachable store is fatal at startup
    let client = db::connect(&config.mongodb_uri).await?;

    let state = AppState::new(&client);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
