//! Board management handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::Database;
use crate::domain::{Board, BoardChanges, NewBoard};
use crate::service::BoardService;

use super::response::{ApiErrorResponse, ApiResponse, MessageResponse, format_instant};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    #[schema(example = "6f1c2a9e-3d4b-4c55-9a0e-1f2b3c4d5e6f")]
    pub id: String,
    #[schema(example = "Product roadmap")]
    pub title: String,
    pub description: String,
    #[schema(example = "#0079bf")]
    pub background_color: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Board> for BoardResponse {
    fn from(board: Board) -> Self {
        let p = board.to_primitives();
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            background_color: p.background_color,
            created_at: format_instant(p.created_at),
            updated_at: format_instant(p.updated_at),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    #[schema(example = "Product roadmap")]
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "#0079bf")]
    pub background_color: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/boards",
    tag = "boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Board created", body = ApiResponse<BoardResponse>),
        (status = 400, description = "Invalid request", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_board<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateBoardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<BoardResponse>>), ApiErrorResponse> {
    let Json(req) = payload?;
    let board = BoardService::new(state.db())
        .create(NewBoard {
            title: req.title,
            description: req.description,
            background_color: req.background_color,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(board.into(), "Board created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/boards",
    tag = "boards",
    responses(
        (status = 200, description = "All boards", body = ApiResponse<Vec<BoardResponse>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_boards<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<ApiResponse<Vec<BoardResponse>>>, ApiErrorResponse> {
    let boards = BoardService::new(state.db()).list().await?;
    let items = boards.into_iter().map(BoardResponse::from).collect();
    Ok(Json(ApiResponse::ok(items, "Boards retrieved")))
}

#[utoipa::path(
    get,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board found", body = ApiResponse<BoardResponse>),
        (status = 404, description = "Board not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiErrorResponse> {
    let board = BoardService::new(state.db()).get(&id).await?;
    Ok(Json(ApiResponse::ok(board.into(), "Board retrieved")))
}

#[utoipa::path(
    put,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Board updated", body = ApiResponse<BoardResponse>),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 404, description = "Board not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBoardRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BoardResponse>>, ApiErrorResponse> {
    let Json(req) = payload?;
    let board = BoardService::new(state.db())
        .update(
            &id,
            BoardChanges {
                title: req.title,
                description: req.description,
                background_color: req.background_color,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(
        board.into(),
        "Board updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/boards/{id}",
    tag = "boards",
    params(("id" = String, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board deleted", body = MessageResponse),
        (status = 404, description = "Board not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_board<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    BoardService::new(state.db()).delete(&id).await?;
    Ok(Json(MessageResponse::ok("Board deleted successfully")))
}
