//! List management handlers.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::Database;
use crate::domain::{List, ListChanges};
use crate::service::{CreateList, ListService};

use super::response::{ApiErrorResponse, ApiResponse, MessageResponse, format_instant};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub id: String,
    pub board_id: String,
    #[schema(example = "To Do")]
    pub title: String,
    #[schema(example = 0)]
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        let p = list.to_primitives();
        Self {
            id: p.id,
            board_id: p.board_id,
            title: p.title,
            position: p.position,
            created_at: format_instant(p.created_at),
            updated_at: format_instant(p.updated_at),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub board_id: String,
    #[schema(example = "To Do")]
    pub title: String,
    /// Defaults to the end of the board
    pub position: Option<i64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    pub title: Option<String>,
    pub position: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MoveListRequest {
    #[schema(example = 2)]
    pub position: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct ListListsQuery {
    /// Only lists of this board
    pub board_id: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/lists",
    tag = "lists",
    request_body = CreateListRequest,
    responses(
        (status = 201, description = "List created", body = ApiResponse<ListResponse>),
        (status = 400, description = "Invalid request or unknown board", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_list<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateListRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<ListResponse>>), ApiErrorResponse> {
    let Json(req) = payload?;
    let list = ListService::new(state.db())
        .create(CreateList {
            board_id: req.board_id,
            title: req.title,
            position: req.position,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(list.into(), "List created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/lists",
    tag = "lists",
    params(ListListsQuery),
    responses(
        (status = 200, description = "Lists ordered by position", body = ApiResponse<Vec<ListResponse>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_lists<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<ListListsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<ListResponse>>>, ApiErrorResponse> {
    let Query(query) = query?;
    let lists = ListService::new(state.db())
        .list(query.board_id.as_deref())
        .await?;
    let items = lists.into_iter().map(ListResponse::from).collect();
    Ok(Json(ApiResponse::ok(items, "Lists retrieved")))
}

#[utoipa::path(
    get,
    path = "/lists/{id}",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    responses(
        (status = 200, description = "List found", body = ApiResponse<ListResponse>),
        (status = 404, description = "List not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ListResponse>>, ApiErrorResponse> {
    let list = ListService::new(state.db()).get(&id).await?;
    Ok(Json(ApiResponse::ok(list.into(), "List retrieved")))
}

#[utoipa::path(
    put,
    path = "/lists/{id}",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    request_body = UpdateListRequest,
    responses(
        (status = 200, description = "List updated", body = ApiResponse<ListResponse>),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 404, description = "List not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateListRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ListResponse>>, ApiErrorResponse> {
    let Json(req) = payload?;
    let list = ListService::new(state.db())
        .update(
            &id,
            ListChanges {
                title: req.title,
                position: req.position,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(list.into(), "List updated successfully")))
}

#[utoipa::path(
    put,
    path = "/lists/{id}/move",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    request_body = MoveListRequest,
    responses(
        (status = 200, description = "List moved", body = ApiResponse<ListResponse>),
        (status = 400, description = "Invalid position", body = MessageResponse),
        (status = 404, description = "List not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn move_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<MoveListRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ListResponse>>, ApiErrorResponse> {
    let Json(req) = payload?;
    let list = ListService::new(state.db())
        .move_list(&id, req.position)
        .await?;
    Ok(Json(ApiResponse::ok(list.into(), "List moved successfully")))
}

#[utoipa::path(
    delete,
    path = "/lists/{id}",
    tag = "lists",
    params(("id" = String, Path, description = "List ID")),
    responses(
        (status = 200, description = "List deleted", body = MessageResponse),
        (status = 404, description = "List not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_list<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    ListService::new(state.db()).delete(&id).await?;
    Ok(Json(MessageResponse::ok("List deleted successfully")))
}
