//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request_id.rs (attach x-request-id)
//!     → handlers.rs (deserialize payload, log, compute sum)
//!     → JSON response to client
//! ```

pub mod handlers;
pub mod request_id;
pub mod server;

pub use request_id::X_REQUEST_ID;
pub use server::{HttpServer, ServerError};
