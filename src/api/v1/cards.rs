//! Card management handlers.

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
use crate::domain::Card;
use crate::service::{CardService, CreateCard, UpdateCard};

use super::response::{ApiErrorResponse, ApiResponse, MessageResponse, format_instant};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub id: String,
    pub list_id: String,
    #[schema(example = "Write release notes")]
    pub title: String,
    pub description: String,
    #[schema(example = 0)]
    pub position: i64,
    /// RFC 3339 instant, `null` when unset
    pub due_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Card> for CardResponse {
    fn from(card: Card) -> Self {
        let p = card.to_primitives();
        Self {
            id: p.id,
            list_id: p.list_id,
            title: p.title,
            description: p.description,
            position: p.position,
            due_date: p.due_date.map(format_instant),
            created_at: format_instant(p.created_at),
            updated_at: format_instant(p.updated_at),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub list_id: String,
    #[schema(example = "Write release notes")]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to the end of the list
    pub position: Option<i64>,
    /// `YYYY-MM-DD` or RFC 3339
    #[schema(example = "2025-03-01T17:00:00Z")]
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Option<i64>,
    /// Omit to keep, `null` to clear
    #[serde(default, deserialize_with = "crate::serde_utils::double_option")]
    #[schema(value_type = Option<String>)]
    pub due_date: Option<Option<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoveCardRequest {
    pub list_id: String,
    #[schema(example = 0)]
    pub position: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct ListCardsQuery {
    /// Only cards of this list
    pub list_id: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct UpcomingCardsQuery {
    /// Window in days (default 7)
    #[param(example = 7)]
    pub days: Option<i64>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    post,
    path = "/cards",
    tag = "cards",
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card created", body = ApiResponse<CardResponse>),
        (status = 400, description = "Invalid request or unknown list", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_card<D: Database>(
    State(state): State<AppState<D>>,
    payload: Result<Json<CreateCardRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<CardResponse>>), ApiErrorResponse> {
    let Json(req) = payload?;
    let card = CardService::new(state.db())
        .create(CreateCard {
            list_id: req.list_id,
            title: req.title,
            description: req.description,
            position: req.position,
            due_date: req.due_date,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(card.into(), "Card created successfully")),
    ))
}

#[utoipa::path(
    get,
    path = "/cards",
    tag = "cards",
    params(ListCardsQuery),
    responses(
        (status = 200, description = "Cards ordered by position", body = ApiResponse<Vec<CardResponse>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_cards<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<ListCardsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<CardResponse>>>, ApiErrorResponse> {
    let Query(query) = query?;
    let cards = CardService::new(state.db())
        .list(query.list_id.as_deref())
        .await?;
    let items = cards.into_iter().map(CardResponse::from).collect();
    Ok(Json(ApiResponse::ok(items, "Cards retrieved")))
}

#[utoipa::path(
    get,
    path = "/cards/overdue",
    tag = "cards",
    responses(
        (status = 200, description = "Cards past their due date", body = ApiResponse<Vec<CardResponse>>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn overdue_cards<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<ApiResponse<Vec<CardResponse>>>, ApiErrorResponse> {
    let cards = CardService::new(state.db()).get_overdue_cards().await?;
    let items = cards.into_iter().map(CardResponse::from).collect();
    Ok(Json(ApiResponse::ok(items, "Overdue cards retrieved")))
}

#[utoipa::path(
    get,
    path = "/cards/upcoming",
    tag = "cards",
    params(UpcomingCardsQuery),
    responses(
        (status = 200, description = "Cards due soon", body = ApiResponse<Vec<CardResponse>>),
        (status = 400, description = "Invalid window", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn upcoming_cards<D: Database>(
    State(state): State<AppState<D>>,
    query: Result<Query<UpcomingCardsQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<Vec<CardResponse>>>, ApiErrorResponse> {
    let Query(query) = query?;
    let cards = CardService::new(state.db())
        .get_upcoming_cards(query.days)
        .await?;
    let items = cards.into_iter().map(CardResponse::from).collect();
    Ok(Json(ApiResponse::ok(items, "Upcoming cards retrieved")))
}

#[utoipa::path(
    get,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card found", body = ApiResponse<CardResponse>),
        (status = 404, description = "Card not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<CardResponse>>, ApiErrorResponse> {
    let card = CardService::new(state.db()).get(&id).await?;
    Ok(Json(ApiResponse::ok(card.into(), "Card retrieved")))
}

#[utoipa::path(
    put,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    request_body = UpdateCardRequest,
    responses(
        (status = 200, description = "Card updated", body = ApiResponse<CardResponse>),
        (status = 400, description = "Invalid request", body = MessageResponse),
        (status = 404, description = "Card not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateCardRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CardResponse>>, ApiErrorResponse> {
    let Json(req) = payload?;
    let card = CardService::new(state.db())
        .update(
            &id,
            UpdateCard {
                title: req.title,
                description: req.description,
                position: req.position,
                due_date: req.due_date,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(card.into(), "Card updated successfully")))
}

/// Moving to another list answers with the recreated card and its new id.
#[utoipa::path(
    put,
    path = "/cards/{id}/move",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    request_body = MoveCardRequest,
    responses(
        (status = 200, description = "Card moved", body = ApiResponse<CardResponse>),
        (status = 400, description = "Invalid position or unknown list", body = MessageResponse),
        (status = 404, description = "Card not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn move_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
    payload: Result<Json<MoveCardRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CardResponse>>, ApiErrorResponse> {
    let Json(req) = payload?;
    let card = CardService::new(state.db())
        .move_card(&id, &req.list_id, req.position)
        .await?;
    Ok(Json(ApiResponse::ok(card.into(), "Card moved successfully")))
}

#[utoipa::path(
    delete,
    path = "/cards/{id}",
    tag = "cards",
    params(("id" = String, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card deleted", body = MessageResponse),
        (status = 404, description = "Card not found", body = MessageResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_card<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiErrorResponse> {
    CardService::new(state.db()).delete(&id).await?;
    Ok(Json(MessageResponse::ok("Card deleted successfully")))
}
