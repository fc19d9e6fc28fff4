//! Sum Service
//!
//! A small HTTP service exposing a single arithmetic endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────┐
//!                      │              SUM SERVICE                │
//!                      │                                         │
//!     POST /sum        │  ┌─────────┐    ┌──────────────────┐   │
//!     ─────────────────┼─▶│  http   │───▶│     handlers     │   │
//!                      │  │ server  │    │  (sum + logging) │   │
//!     {"sum": a + b}   │  └─────────┘    └──────────────────┘   │
//!     ◀────────────────┼───────┘                                │
//!                      │                                         │
//!                      │  ┌───────────────────────────────────┐ │
//!                      │  │       Cross-Cutting Concerns       │ │
//!                      │  │  config · tracing · request IDs    │ │
//!                      │  │  timeouts · body limits            │ │
//!                      │  └───────────────────────────────────┘ │
//!                      └────────────────────────────────────────┘
//! ```
//!
//! The bind address and port are fixed; there are no CLI flags, environment
//! variables, or config files. Schema validation of the request payload is
//! delegated to the framework, and every accepted request is logged (payload,
//! then headers) before the response is produced.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sum_service::{HttpServer, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sum_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("sum-service v{} starting", env!("CARGO_PKG_VERSION"));

    // Configuration is hardcoded; defaults are the only source of truth.
    let config = ServiceConfig::default();

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = HttpServer::bind(&config.listener).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
