//! Voyage Planner HTTP Server Binary
//!
//! Loads configuration, builds the repository and optimizer, and serves the
//! REST API.
//!
//! # Usage
//!
//! ```bash
//! # In-memory repository with demo data, basic planning only
//! SEED_DEMO_DATA=true cargo run --bin voyage-server
//!
//! # With an external optimization service
//! AI_API_URL=http://localhost:5000 AI_API_KEY=secret cargo run --bin voyage-server
//! ```
//!
//! # Environment Variables
//!
//! - `VOYAGE_CONFIG`: Path to a TOML config file (default: `voyage.toml` if present)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 3000)
//! - `REPOSITORY_TYPE`: Repository backend (default: local)
//! - `AI_API_URL`, `AI_API_KEY`, `AI_TIMEOUT_SECS`: External optimizer settings
//! - `SEED_DEMO_DATA`: Insert a demo ship, voyage and maintenance job at startup
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use chrono::Utc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use voyage_planner::config::AppConfig;
use voyage_planner::db::{seed_demo_data, RepositoryFactory};
use voyage_planner::http::{create_router, AppState};
use voyage_planner::optimizer::Advisor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Voyage Planner HTTP Server");

    let config = AppConfig::load()?;

    let repository = RepositoryFactory::from_settings(&config.repository)?;
    info!(
        "Repository initialized ({})",
        config.repository.repo_type.as_str()
    );

    if config.seed_demo_data {
        let seed = seed_demo_data(repository.as_ref(), Utc::now()).await?;
        info!("Demo data available for ship {}", seed.ship_id);
    }

    let advisor = Advisor::from_settings(&config.ai)?;
    if advisor.is_enabled() {
        info!("External optimization service enabled");
    } else {
        info!("External optimization service not configured, using basic planning");
    }

    let state = AppState::new(repository, advisor);
    let app = create_router(state);

    let addr: SocketAddr = config.bind_address().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
