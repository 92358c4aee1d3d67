//! Board handlers for Web API.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use axum_extra::extract::{Query, QueryRejection};
use std::sync::Arc;

use crate::board::{BoardService, BoardView};
use crate::web::dto::{
    ApiJson, BoardCreateRequest, BoardPageResponse, BoardUpdateRequest, PageQuery,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;

fn board_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id)
        .map_err(|e| ApiError::bad_request(format!("Invalid board id: {}", e.body_text())))
}

/// POST /boards - Create a board.
#[utoipa::path(
    post,
    path = "/boards",
    tag = "Boards",
    request_body = BoardCreateRequest,
    responses(
        (status = 200, description = "Created board", body = BoardView),
        (status = 400, description = "Blank field or malformed body", body = crate::web::error::ErrorBody),
        (status = 500, description = "Storage failure", body = crate::web::error::ErrorBody)
    )
)]
pub async fn create_board(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<BoardCreateRequest>,
) -> Result<Json<BoardView>, ApiError> {
    let service = BoardService::new(&state.db, state.timezone);
    let view = service.create(req.into()).await?;
    Ok(Json(view))
}

/// PUT /boards/:board_id - Change a board's title and content.
#[utoipa::path(
    put,
    path = "/boards/{boardId}",
    tag = "Boards",
    params(("boardId" = i64, Path, description = "Board ID")),
    request_body = BoardUpdateRequest,
    responses(
        (status = 200, description = "Updated board", body = BoardView),
        (status = 400, description = "Blank field or malformed body", body = crate::web::error::ErrorBody),
        (status = 404, description = "Board not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn update_board(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    ApiJson(req): ApiJson<BoardUpdateRequest>,
) -> Result<Json<BoardView>, ApiError> {
    let id = board_id(path)?;
    let service = BoardService::new(&state.db, state.timezone);
    let view = service.update(id, req.into()).await?;
    Ok(Json(view))
}

/// DELETE /boards/:board_id - Delete a board.
#[utoipa::path(
    delete,
    path = "/boards/{boardId}",
    tag = "Boards",
    params(("boardId" = i64, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board deleted"),
        (status = 404, description = "Board not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn delete_board(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<(), ApiError> {
    let id = board_id(path)?;
    let service = BoardService::new(&state.db, state.timezone);
    service.delete(id).await?;
    Ok(())
}

/// GET /boards - List boards page by page.
#[utoipa::path(
    get,
    path = "/boards",
    tag = "Boards",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of boards", body = BoardPageResponse),
        (status = 400, description = "Invalid sort", body = crate::web::error::ErrorBody)
    )
)]
pub async fn list_boards(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<BoardPageResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::bad_request(format!("Invalid query: {e}")))?;

    let request = query.to_page_request(state.pagination)?;

    let service = BoardService::new(&state.db, state.timezone);
    let page = service.find_all(&request).await?;
    Ok(Json(page.into()))
}

/// GET /boards/:board_id - Get a board.
#[utoipa::path(
    get,
    path = "/boards/{boardId}",
    tag = "Boards",
    params(("boardId" = i64, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board", body = BoardView),
        (status = 404, description = "Board not found", body = crate::web::error::ErrorBody)
    )
)]
pub async fn get_board(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<BoardView>, ApiError> {
    let id = board_id(path)?;
    let service = BoardService::new(&state.db, state.timezone);
    let view = service.find_by_id(id).await?;
    Ok(Json(view))
}
