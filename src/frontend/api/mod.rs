//! Browser-side client for the REST API (same origin).

use gloo_net::http::Request;
use kanban::view::{ApiEnvelope, BoardSummary, CardView, ListView};
use serde::de::DeserializeOwned;

/// API client error type
#[derive(Debug, Clone)]
pub enum ApiClientError {
    Network(String),
    Server { status: u16, message: String },
    Deserialization(String),
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiClientError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiClientError::Server { status, message } => write!(f, "{} ({})", message, status),
            ApiClientError::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

type Result<T> = std::result::Result<T, ApiClientError>;

fn network(e: gloo_net::Error) -> ApiClientError {
    ApiClientError::Network(e.to_string())
}

/// Send a request and decode the envelope; non-2xx answers carry the
/// envelope's message.
async fn send<T: DeserializeOwned>(
    request: std::result::Result<Request, gloo_net::Error>,
) -> Result<ApiEnvelope<T>> {
    let response = request.map_err(network)?.send().await.map_err(network)?;
    let status = response.status();
    let body = response.text().await.map_err(network)?;

    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body)
            .map(|e| e.message)
            .unwrap_or(body);
        return Err(ApiClientError::Server { status, message });
    }

    serde_json::from_str(&body).map_err(|e| ApiClientError::Deserialization(e.to_string()))
}

async fn data<T: DeserializeOwned>(
    request: std::result::Result<Request, gloo_net::Error>,
) -> Result<T> {
    send::<T>(request)
        .await?
        .data
        .ok_or_else(|| ApiClientError::Deserialization("response carried no data".into()))
}

async fn no_content(request: std::result::Result<Request, gloo_net::Error>) -> Result<()> {
    send::<serde_json::Value>(request).await.map(|_| ())
}

pub mod boards {
    use super::*;

    pub async fn list() -> Result<Vec<BoardSummary>> {
        data(Request::get("/boards").build()).await
    }

    pub async fn get(id: &str) -> Result<BoardSummary> {
        data(Request::get(&format!("/boards/{}", id)).build()).await
    }

    pub async fn create(title: &str) -> Result<BoardSummary> {
        data(Request::post("/boards").json(&serde_json::json!({ "title": title }))).await
    }

    pub async fn delete(id: &str) -> Result<()> {
        no_content(Request::delete(&format!("/boards/{}", id)).build()).await
    }
}

pub mod lists {
    use super::*;

    pub async fn for_board(board_id: &str) -> Result<Vec<ListView>> {
        data(
            Request::get("/lists")
                .query([("boardId", board_id)])
                .build(),
        )
        .await
    }

    pub async fn create(board_id: &str, title: &str) -> Result<ListView> {
        data(
            Request::post("/lists")
                .json(&serde_json::json!({ "boardId": board_id, "title": title })),
        )
        .await
    }

    pub async fn rename(id: &str, title: &str) -> Result<ListView> {
        data(Request::put(&format!("/lists/{}", id)).json(&serde_json::json!({ "title": title })))
            .await
    }

    pub async fn delete(id: &str) -> Result<()> {
        no_content(Request::delete(&format!("/lists/{}", id)).build()).await
    }
}

pub mod cards {
    use super::*;

    pub async fn for_list(list_id: &str) -> Result<Vec<CardView>> {
        data(Request::get("/cards").query([("listId", list_id)]).build()).await
    }

    pub async fn create(list_id: &str, title: &str) -> Result<CardView> {
        data(
            Request::post("/cards")
                .json(&serde_json::json!({ "listId": list_id, "title": title })),
        )
        .await
    }

    pub async fn rename(id: &str, title: &str) -> Result<CardView> {
        data(Request::put(&format!("/cards/{}", id)).json(&serde_json::json!({ "title": title })))
            .await
    }

    /// The answer carries a new id when `list_id` differs from the card's list.
    pub async fn move_to(id: &str, list_id: &str, position: i64) -> Result<CardView> {
        data(
            Request::put(&format!("/cards/{}/move", id))
                .json(&serde_json::json!({ "listId": list_id, "position": position })),
        )
        .await
    }

    pub async fn delete(id: &str) -> Result<()> {
        no_content(Request::delete(&format!("/cards/{}", id)).build()).await
    }
}

/// Fetch a board with its lists and every list's cards.
pub async fn load_board(id: &str) -> Result<(BoardSummary, Vec<ListView>, Vec<CardView>)> {
    let board = boards::get(id).await?;
    let lists = lists::for_board(id).await?;
    let mut all_cards = Vec::new();
    for list in &lists {
        all_cards.extend(cards::for_list(&list.id).await?);
    }
    Ok((board, lists, all_cards))
}
