//! List CLI commands

use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;
use crate::cli::utils::{apply_table_style, require_force, truncate_with_ellipsis};
use crate::view::ListView;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub board_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateListRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

#[derive(Tabled)]
pub(crate) struct ListDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Pos")]
    pub(crate) position: i64,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Board")]
    pub(crate) board_id: String,
}

impl From<&ListView> for ListDisplay {
    fn from(list: &ListView) -> Self {
        Self {
            id: list.id.clone(),
            position: list.position,
            title: truncate_with_ellipsis(&list.title, 40),
            board_id: list.board_id.clone(),
        }
    }
}

fn format_table(lists: &[ListView]) -> String {
    if lists.is_empty() {
        return "No lists found.".to_string();
    }

    let rows: Vec<ListDisplay> = lists.iter().map(|l| l.into()).collect();
    let mut table = Table::new(rows);
    apply_table_style(&mut table);
    table.to_string()
}

fn format_detail(list: &ListView) -> String {
    use tabled::builder::Builder;

    let position = list.position.to_string();
    let mut builder = Builder::default();
    builder.push_record(["List ID", &list.id]);
    builder.push_record(["Board ID", &list.board_id]);
    builder.push_record(["Title", &list.title]);
    builder.push_record(["Position", &position]);
    builder.push_record(["Created", &list.created_at]);
    builder.push_record(["Updated", &list.updated_at]);

    let mut table = builder.build();
    apply_table_style(&mut table);
    table.to_string()
}

/// List lists, optionally only those of one board
pub async fn list_lists(
    api_client: &ApiClient,
    board_id: Option<&str>,
    format: &str,
) -> CliResult<String> {
    let mut request = api_client.get("/lists");
    if let Some(b) = board_id {
        request = request.query(&[("boardId", b)]);
    }

    let lists: Vec<ListView> = ApiClient::handle_response(request.send().await?).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&lists)?),
        _ => Ok(format_table(&lists)),
    }
}

pub async fn get_list(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let response = api_client.get(&format!("/lists/{}", id)).send().await?;
    let list: ListView = ApiClient::handle_response(response).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&list)?),
        _ => Ok(format_detail(&list)),
    }
}

pub async fn create_list(api_client: &ApiClient, request: CreateListRequest) -> CliResult<String> {
    let response = api_client.post("/lists").json(&request).send().await?;
    let list: ListView = ApiClient::handle_response(response).await?;
    Ok(format!(
        "✓ Created list: {} ({}) at position {}",
        list.title, list.id, list.position
    ))
}

pub async fn update_list(
    api_client: &ApiClient,
    id: &str,
    request: UpdateListRequest,
) -> CliResult<String> {
    let response = api_client
        .put(&format!("/lists/{}", id))
        .json(&request)
        .send()
        .await?;
    let list: ListView = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Updated list: {} ({})", list.title, list.id))
}

pub async fn move_list(api_client: &ApiClient, id: &str, position: i64) -> CliResult<String> {
    let response = api_client
        .put(&format!("/lists/{}/move", id))
        .json(&serde_json::json!({ "position": position }))
        .send()
        .await?;
    let list: ListView = ApiClient::handle_response(response).await?;
    Ok(format!("✓ Moved list {} to position {}", list.id, list.position))
}

/// Delete a list and its cards (requires --force)
pub async fn delete_list(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    let response = api_client.delete(&format!("/lists/{}", id)).send().await?;
    ApiClient::handle_message(response).await?;
    Ok(format!("✓ Deleted list: {}", id))
}
