//! Request extractors carrying the API's error contract.
//!
//! axum's stock `Path<u64>` and `Json<T>` reject with 400/415/422. The todo
//! API instead treats a non-numeric id as an unmatched route (404) and any
//! body decoding failure as a plain-text 400, regardless of content type.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// The numeric `{id}` segment of a `/todo/{id}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub u64);

/// Parse an id segment. Only non-empty runs of ASCII digits that fit in a
/// `u64` are accepted; signs and whitespace are not.
pub fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;
        parse_id(&raw).map(TodoId).ok_or(ApiError::NotFound)
    }
}

/// JSON request body decoded with `serde_json`, ignoring `content-type`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| ApiError::BadRequest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;
    use crate::types::TodoInput;

    fn request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/todo")
            .body(Body::from(body))
            .unwrap()
    }

    #[test]
    fn parse_id_accepts_digits() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("6"), Some(6));
        assert_eq!(parse_id("007"), Some(7));
    }

    #[test]
    fn parse_id_rejects_non_digits() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id(" 1"), None);
    }

    #[test]
    fn parse_id_rejects_overflow() {
        assert_eq!(parse_id("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_id("18446744073709551616"), None);
    }

    #[tokio::test]
    async fn json_body_decodes_without_content_type() {
        let JsonBody(input) = JsonBody::<TodoInput>::from_request(request(r#"{"todo":"x"}"#), &())
            .await
            .unwrap();
        assert_eq!(input.text, "x");
    }

    #[tokio::test]
    async fn json_body_reports_syntax_error() {
        let err = JsonBody::<TodoInput>::from_request(request(r#"{"todo":"#), &())
            .await
            .unwrap_err();
        match err {
            ApiError::BadRequest(msg) => assert!(!msg.is_empty()),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn json_body_rejects_empty_body() {
        let err = JsonBody::<TodoInput>::from_request(request(""), &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
