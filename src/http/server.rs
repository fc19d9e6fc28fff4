//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use std::time::Duration;

use axum::{routing::post, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ListenerConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request_id::UuidRequestId;

/// Errors that can occur while starting or running the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listener address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The serve loop failed.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server for the sum service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router }
    }

    /// Bind a TCP listener on the configured address.
    pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
        TcpListener::bind(&config.bind_address)
            .await
            .map_err(|source| ServerError::Bind {
                addr: config.bind_address.clone(),
                source,
            })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layers added later wrap the ones before them, so the request ID is
    /// assigned outermost and is visible to the trace layer.
    fn build_router(config: &ServiceConfig) -> Router {
        Router::new()
            .route("/sum", post(handlers::sum))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId::default()))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
