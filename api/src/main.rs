//! Star stub server
//!
//! Serves the fake star HTTP service so UI and end-to-end suites have a
//! process to talk to.

use std::sync::Arc;

use stars_api::config::Config;
use stars_api::http::{router, SharedStarHttpService};
use stars_api::test_utils::FakeStarHttpService;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,stars_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting star stub server...");

    let config = Config::from_env();
    let service: SharedStarHttpService = Arc::new(FakeStarHttpService::new());
    let app = router(service);

    let addr = config.socket_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
