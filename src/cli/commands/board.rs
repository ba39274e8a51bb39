//! Board CLI commands

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, or_dash, require_force, truncate_with_ellipsis};
use crate::view::BoardSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Tabled)]
struct BoardDisplay {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&BoardSummary> for BoardDisplay {
    fn from(board: &BoardSummary) -> Self {
        Self {
            id: board.id.clone(),
            title: truncate_with_ellipsis(&board.title, 40),
            color: board.background_color.clone(),
            description: or_dash(&truncate_with_ellipsis(&board.description, 50)),
        }
    }
}

fn format_table(boards: &[BoardSummary]) -> String {
    if boards.is_empty() {
        return "No boards found.".to_string();
    }

    let rows: Vec<BoardDisplay> = boards.iter().map(|b| b.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

fn format_detail(board: &BoardSummary) -> String {
    use tabled::builder::Builder;

    let mut builder = Builder::default();
    builder.push_record(["Board ID", &board.id]);
    builder.push_record(["Title", &board.title]);
    builder.push_record(["Description", &or_dash(&board.description)]);
    builder.push_record(["Color", &board.background_color]);
    builder.push_record(["Created", &board.created_at]);
    builder.push_record(["Updated", &board.updated_at]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// List all boards
pub async fn list_boards(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let response = api_client.get("/boards").send().await?;
    let boards: Vec<BoardSummary> = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&boards)?),
        _ => Ok(format_table(&boards)),
    }
}

/// Get a single board by ID
pub async fn get_board(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let response = api_client.get(&format!("/boards/{}", id)).send().await?;
    let board: BoardSummary = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&board)?),
        _ => Ok(format_detail(&board)),
    }
}

pub async fn create_board(api_client: &ApiClient, request: CreateBoardRequest) -> CliResult<String> {
    let response = api_client.post("/boards").json(&request).send().await?;
    let board: BoardSummary = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Created board: {} ({})", board.title, board.id))
}

/// Update a board; omitted fields keep their value
pub async fn update_board(
    api_client: &ApiClient,
    id: &str,
    request: UpdateBoardRequest,
) -> CliResult<String> {
    let response = api_client
        .put(&format!("/boards/{}", id))
        .json(&request)
        .send()
        .await?;
    let board: BoardSummary = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Updated board: {} ({})", board.title, board.id))
}

/// Delete a board with all its lists and cards (requires --force)
pub async fn delete_board(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    let response = api_client.delete(&format!("/boards/{}", id)).send().await?;
    ApiClient::handle_message(response).await?;
    Ok(format!("✓ Deleted board: {}", id))
}
