//! Card CLI commands

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, or_dash, require_force, truncate_with_ellipsis};
use crate::view::CardView;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub list_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// `Some(None)` is sent as `null` and clears the due date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<String>>,
}

#[derive(Tabled)]
struct CardDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Pos")]
    position: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "List")]
    list_id: String,
}

impl From<&CardView> for CardDisplay {
    fn from(card: &CardView) -> Self {
        Self {
            id: card.id.clone(),
            position: card.position,
            title: truncate_with_ellipsis(&card.title, 40),
            due: card.due_day().unwrap_or("-").to_string(),
            list_id: card.list_id.clone(),
        }
    }
}

fn format_table(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return "No cards found.".to_string();
    }

    let rows: Vec<CardDisplay> = cards.iter().map(|c| c.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

fn format_detail(card: &CardView) -> String {
    use tabled::builder::Builder;

    let position = card.position.to_string();
    let mut builder = Builder::default();
    builder.push_record(["Card ID", &card.id]);
    builder.push_record(["List ID", &card.list_id]);
    builder.push_record(["Title", &card.title]);
    builder.push_record(["Description", &or_dash(&card.description)]);
    builder.push_record(["Position", &position]);
    builder.push_record(["Due", card.due_date.as_deref().unwrap_or("-")]);
    builder.push_record(["Created", &card.created_at]);
    builder.push_record(["Updated", &card.updated_at]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

fn render(cards: &[CardView], format: &str) -> CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(cards)?),
        _ => Ok(format_table(cards)),
    }
}

/// List cards, optionally only those of one list
pub async fn list_cards(
    api_client: &ApiClient,
    list_id: Option<&str>,
    format: &str,
) -> CliResult<String> {
    let mut request = api_client.get("/cards");
    if let Some(l) = list_id {
        request = request.query(&[("listId", l)]);
    }

    let cards: Vec<CardView> = ApiClient::handle_response(request.send().await?).await?;
    render(&cards, format)
}

/// Cards whose due date has passed
pub async fn overdue_cards(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/cards/overdue").send().await?;
    let cards: Vec<CardView> = ApiClient::handle_response(response).await?;
    render(&cards, format)
}

/// Cards due within the next `days` days (server default when omitted)
pub async fn upcoming_cards(
    api_client: &ApiClient,
    days: Option<i64>,
    format: &str,
) -> CliResult<String> {
    let mut request = api_client.get("/cards/upcoming");
    if let Some(d) = days {
        request = request.query(&[("days", d.to_string())]);
    }

    let cards: Vec<CardView> = ApiClient::handle_response(request.send().await?).await?;
    render(&cards, format)
}

pub async fn get_card(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let response = api_client.get(&format!("/cards/{}", id)).send().await?;
    let card: CardView = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&card)?),
        _ => Ok(format_detail(&card)),
    }
}

pub async fn create_card(api_client: &ApiClient, request: CreateCardRequest) -> CliResult<String> {
    let response = api_client.post("/cards").json(&request).send().await?;
    let card: CardView = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Created card: {} ({})", card.title, card.id))
}

pub async fn update_card(
    api_client: &ApiClient,
    id: &str,
    request: UpdateCardRequest,
) -> CliResult<String> {
    let response = api_client
        .put(&format!("/cards/{}", id))
        .json(&request)
        .send()
        .await?;
    let card: CardView = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Updated card: {} ({})", card.title, card.id))
}

/// Move a card; a move to another list gives the card a new ID
pub async fn move_card(
    api_client: &ApiClient,
    id: &str,
    list_id: &str,
    position: i64,
) -> CliResult<String> {
    let response = api_client
        .put(&format!("/cards/{}/move", id))
        .json(&serde_json::json!({ "listId": list_id, "position": position }))
        .send()
        .await?;
    let card: CardView = ApiClient::handle_response(response).await?;

    if card.id == id {
        Ok(format!("✓ Moved card {} to position {}", card.id, card.position))
    } else {
        Ok(format!(
            "✓ Moved card to list {} at position {} (new ID: {})",
            card.list_id, card.position, card.id
        ))
    }
}

pub async fn delete_card(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    let response = api_client.delete(&format!("/cards/{}", id)).send().await?;
    ApiClient::handle_message(response).await?;
    Ok(format!("✓ Deleted card: {}", id))
}
