//! Request ID generation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for every incoming request
//! - Attach it as `x-request-id` before any other processing
//! - Propagate it onto the response for client-side correlation

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Name of the correlation header.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Assigns a fresh UUID v4 to every incoming request.
#[derive(Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_unique_parseable_ids() {
        let mut make = UuidRequestId;
        let req = Request::builder().body(()).unwrap();

        let first = make.make_request_id(&req).unwrap();
        let second = make.make_request_id(&req).unwrap();

        let first = first.header_value().to_str().unwrap().to_string();
        let second = second.header_value().to_str().unwrap().to_string();

        assert!(Uuid::parse_str(&first).is_ok());
        assert_ne!(first, second);
    }
}
