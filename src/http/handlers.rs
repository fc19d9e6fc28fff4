//! Request handlers and their wire types.

use axum::{http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

/// Payload for the sum operation. Both fields are required; extra fields
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct SumRequest {
    pub a: f64,
    pub b: f64,
}

/// Response carrying the arithmetic sum.
#[derive(Debug, Serialize)]
pub struct SumResponse {
    pub sum: f64,
}

/// Handler for `POST /sum`.
///
/// Logs the parsed payload and the request headers, then returns `a + b`.
/// Schema validation happens in the `Json` extractor; a body that is missing
/// a field or carries a non-numeric value is rejected before this function
/// runs.
pub async fn sum(headers: HeaderMap, Json(payload): Json<SumRequest>) -> Json<SumResponse> {
    tracing::info!(payload = ?payload, "Received payload");
    tracing::info!(headers = ?headers, "Request headers");

    Json(SumResponse {
        sum: payload.a + payload.b,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn adds_two_numbers() {
        let Json(resp) = sum(HeaderMap::new(), Json(SumRequest { a: 2.5, b: 3.5 })).await;
        assert_eq!(resp.sum, 6.0);
    }

    #[tokio::test]
    async fn negative_and_positive_cancel() {
        let Json(resp) = sum(HeaderMap::new(), Json(SumRequest { a: -1.0, b: 1.0 })).await;
        assert_eq!(resp.sum, 0.0);
    }

    #[tokio::test]
    async fn sum_is_commutative() {
        for (a, b) in [(0.1, 0.2), (-7.25, 3.5), (1e9, 1e-9)] {
            let Json(x) = sum(HeaderMap::new(), Json(SumRequest { a, b })).await;
            let Json(y) = sum(HeaderMap::new(), Json(SumRequest { a: b, b: a })).await;
            assert_eq!(x.sum, y.sum);
        }
    }

    #[test]
    fn missing_field_is_rejected() {
        assert!(serde_json::from_str::<SumRequest>(r#"{"a": 1.0}"#).is_err());
    }

    #[test]
    fn non_numeric_field_is_rejected() {
        assert!(serde_json::from_str::<SumRequest>(r#"{"a": "x", "b": 2.0}"#).is_err());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let req: SumRequest =
            serde_json::from_str(r#"{"a": 1.5, "b": 2.5, "note": "ignored"}"#).unwrap();
        assert_eq!(req.a + req.b, 4.0);
    }

    #[test]
    fn response_serializes_with_single_sum_key() {
        let body = serde_json::to_value(SumResponse { sum: 6.0 }).unwrap();
        assert_eq!(body, serde_json::json!({"sum": 6.0}));
    }
}
