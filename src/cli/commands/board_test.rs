use crate::cli::api_client::ApiClient;
use crate::cli::commands::board::*;
use crate::cli::commands::spawn_test_server;
use crate::cli::error::CliError;

fn create_request(title: &str) -> CreateBoardRequest {
    CreateBoardRequest {
        title: title.to_string(),
        description: None,
        background_color: None,
    }
}

async fn first_board_id(api_client: &ApiClient) -> String {
    let output = list_boards(api_client, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    parsed[0]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_delete_board_without_force() {
    let api_client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
    let err = delete_board(&api_client, "any", false).await.unwrap_err();
    assert!(err.to_string().contains("--force"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_boards_empty() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let output = list_boards(&api_client, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 0);

    let table = list_boards(&api_client, "table").await.unwrap();
    assert_eq!(table, "No boards found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_and_get_board() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let output = create_board(&api_client, create_request("Roadmap")).await.unwrap();
    assert!(output.contains("Created board: Roadmap"));

    let id = first_board_id(&api_client).await;
    let detail = get_board(&api_client, &id, "table").await.unwrap();
    assert!(detail.contains("Roadmap"));
    assert!(detail.contains("#0079bf"));

    let json = get_board(&api_client, &id, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["backgroundColor"], "#0079bf");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_board() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    create_board(&api_client, create_request("Old")).await.unwrap();
    let id = first_board_id(&api_client).await;

    let request = UpdateBoardRequest {
        title: Some("New".to_string()),
        ..Default::default()
    };
    let output = update_board(&api_client, &id, request).await.unwrap();
    assert!(output.contains("Updated board: New"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_color_surfaces_api_error() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));

    let request = CreateBoardRequest {
        title: "Bad".to_string(),
        description: None,
        background_color: Some("red".to_string()),
    };
    match create_board(&api_client, request).await {
        Err(CliError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.contains("red"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_board() {
    let (url, _handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    create_board(&api_client, create_request("Temp")).await.unwrap();
    let id = first_board_id(&api_client).await;

    let output = delete_board(&api_client, &id, true).await.unwrap();
    assert!(output.contains(&id));

    match get_board(&api_client, &id, "json").await {
        Err(CliError::ApiError { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, format!("Board '{}' not found", id));
        }
        other => panic!("expected 404, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_server_is_connection_error() {
    let api_client = ApiClient::new(Some("http://127.0.0.1:9".to_string()));
    let err = list_boards(&api_client, "json").await.unwrap_err();
    assert!(matches!(err, CliError::ConnectionFailed { .. }));
}
