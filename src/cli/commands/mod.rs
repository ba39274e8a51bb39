pub mod api;
pub mod board;
pub mod card;
pub mod list;

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

#[cfg(test)]
#[path = "list_test.rs"]
mod list_test;


#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Spawn an API server on an ephemeral port backed by an in-memory database.
#[cfg(test)]
pub(crate) async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    use crate::api::{AppState, routes};
    use crate::db::{Database, SqliteDatabase};

    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    let app = routes::create_router(AppState::new(db), false);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (url, handle)
}
