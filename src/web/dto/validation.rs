//! Request extraction for Web API DTOs.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::web::error::ApiError;

/// A JSON extractor whose rejection uses the API error body.
///
/// Malformed or non-JSON bodies become a 400 with empty `attributes`. Field
/// rules are checked later by the service so that every entry point shares
/// them.
///
/// # Example
///
/// ```ignore
/// use noticeboard::web::dto::ApiJson;
///
/// async fn create_board(
///     ApiJson(payload): ApiJson<BoardCreateRequest>,
/// ) -> Result<Json<BoardView>, ApiError> {
///     // ...
/// }
/// ```
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(ApiJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::dto::BoardCreateRequest;
    use crate::web::error::ErrorCode;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/boards")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_json() {
        let req = json_request(r#"{"title":"Hello","content":"World","writer":"Ann"}"#);
        let ApiJson(payload) = ApiJson::<BoardCreateRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(payload.title, "Hello");
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let req = json_request(r#"{"title":"#);
        let err = ApiJson::<BoardCreateRequest>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert!(err.message().starts_with("Invalid JSON"));
        assert!(err.attributes().is_empty());
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = Request::builder()
            .method("POST")
            .uri("/boards")
            .body(Body::from("{}"))
            .unwrap();
        let err = ApiJson::<BoardCreateRequest>::from_request(req, &())
            .await
            .err()
            .unwrap();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }
}
