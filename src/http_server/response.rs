//! # Response Formatting
//!
//! Record bodies are written as pretty JSON with two-space indentation,
//! the same layout as the store file.

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::errors::RestError;

/// Pretty-printed JSON response body
#[derive(Debug, Clone)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            Err(e) => RestError::Internal(e.to_string()).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_body_is_indented() {
        let response = PrettyJson(json!({"id": "b-1", "title": "t"})).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(text, "{\n  \"id\": \"b-1\",\n  \"title\": \"t\"\n}");
    }

    #[tokio::test]
    async fn test_arrays_are_indented() {
        let response = PrettyJson(vec![json!({"id": "a"})]).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"[\n  {\n    \"id\""));
    }
}
