use crate::cli::api_client::ApiClient;
use crate::cli::commands::board::{CreateBoardRequest, create_board, list_boards};
use crate::cli::commands::list::*;
use crate::cli::commands::spawn_test_server;
use crate::cli::error::CliError;

async fn setup() -> (ApiClient, String, tokio::task::JoinHandle<()>) {
    let (url, handle) = spawn_test_server().await;
    let api_client = ApiClient::new(Some(url));
    create_board(
        &api_client,
        CreateBoardRequest {
            title: "Board".to_string(),
            description: None,
            background_color: None,
        },
    )
    .await
    .unwrap();
    let boards: serde_json::Value =
        serde_json::from_str(&list_boards(&api_client, "json").await.unwrap()).unwrap();
    let board_id = boards[0]["id"].as_str().unwrap().to_string();
    (api_client, board_id, handle)
}

fn new_list(board_id: &str, title: &str) -> CreateListRequest {
    CreateListRequest {
        board_id: board_id.to_string(),
        title: title.to_string(),
        position: None,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_lists_in_order() {
    let (api_client, board_id, _handle) = setup().await;

    let first = create_list(&api_client, new_list(&board_id, "Todo")).await.unwrap();
    assert!(first.contains("at position 0"));
    let second = create_list(&api_client, new_list(&board_id, "Done")).await.unwrap();
    assert!(second.contains("at position 1"));

    let output = list_lists(&api_client, Some(&board_id), "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let titles: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Todo", "Done"]);

    let table = list_lists(&api_client, Some(&board_id), "table").await.unwrap();
    assert!(table.contains("Todo"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_list_for_missing_board() {
    let (api_client, _, _handle) = setup().await;

    match create_list(&api_client, new_list("ghost", "X")).await {
        Err(CliError::ApiError { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Board 'ghost' not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_move_update_and_delete_list() {
    let (api_client, board_id, _handle) = setup().await;
    create_list(&api_client, new_list(&board_id, "Todo")).await.unwrap();
    let lists: serde_json::Value = serde_json::from_str(
        &list_lists(&api_client, Some(&board_id), "json").await.unwrap(),
    )
    .unwrap();
    let id = lists[0]["id"].as_str().unwrap().to_string();

    let moved = move_list(&api_client, &id, 4).await.unwrap();
    assert!(moved.contains("position 4"));

    let updated = update_list(
        &api_client,
        &id,
        UpdateListRequest {
            title: Some("Backlog".to_string()),
            position: None,
        },
    )
    .await
    .unwrap();
    assert!(updated.contains("Backlog"));

    let detail = get_list(&api_client, &id, "table").await.unwrap();
    assert!(detail.contains("Backlog"));
    assert!(detail.contains('4'));

    assert!(delete_list(&api_client, &id, false).await.is_err());
    delete_list(&api_client, &id, true).await.unwrap();
    assert_eq!(
        list_lists(&api_client, None, "table").await.unwrap(),
        "No lists found."
    );
}
