//! Sum Service Library

pub mod config;
pub mod http;

pub use config::ServiceConfig;
pub use http::HttpServer;
