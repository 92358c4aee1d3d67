//! Router configuration for Web API.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::dto::{
    BoardCreateRequest, BoardPageResponse, BoardUpdateRequest, PageableInfo, SortInfo,
};
use super::error::ErrorBody;
use super::handlers::{
    self, create_board, delete_board, get_board, list_boards, server_port, update_board, AppState,
};
use super::middleware::create_cors_layer;
use crate::board::BoardView;

/// OpenAPI document for the board API.
#[derive(OpenApi)]
#[openapi(
    info(title = "Noticeboard API", description = "Board posting service"),
    paths(
        handlers::board::create_board,
        handlers::board::update_board,
        handlers::board::delete_board,
        handlers::board::list_boards,
        handlers::board::get_board,
        handlers::server_port,
    ),
    components(schemas(
        BoardView,
        BoardCreateRequest,
        BoardUpdateRequest,
        BoardPageResponse,
        PageableInfo,
        SortInfo,
        ErrorBody,
    )),
    tags(
        (name = "Boards", description = "Board CRUD and listing"),
        (name = "Health", description = "Liveness and port checks")
    )
)]
pub struct ApiDoc;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(server_port))
        .route("/boards", get(list_boards).post(create_board))
        .route(
            "/boards/:board_id",
            get(get_board).put(update_board).delete(delete_board),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Create the Swagger UI router serving the OpenAPI document.
pub fn create_swagger_router() -> Router {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();

        assert!(json["paths"]["/boards"]["get"].is_object());
        assert!(json["paths"]["/boards"]["post"].is_object());
        assert!(json["paths"]["/boards/{boardId}"]["put"].is_object());
        assert!(json["paths"]["/boards/{boardId}"]["delete"].is_object());
        assert!(json["components"]["schemas"]["BoardView"].is_object());
    }

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
    }
}
