/**
 * Postgate Server Entry Point
 *
 * Loads configuration, connects to PostgreSQL and serves the HTTP API.
 */

use postgate::backend::server::{config::ServerConfig, init::create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    if dotenv::dotenv().is_err() {
        eprintln!("[STARTUP] No .env file found, using process environment");
    }

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = ServerConfig::from_env()?;
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
