//! API server command - starts the REST API with the embedded frontend

use std::net::IpAddr;
use std::path::PathBuf;

use miette::Result;

use crate::api::{self, Config};
use crate::db::{Database, SqliteDatabase};
use crate::paths::get_db_path;

/// Run the API server
pub async fn run(
    host: IpAddr,
    port: u16,
    db: Option<PathBuf>,
    verbosity: u8,
    enable_docs: bool,
) -> Result<()> {
    let db_path = db.unwrap_or_else(get_db_path);

    println!("Opening database at {:?}", db_path);
    let db = SqliteDatabase::open(&db_path).await?;

    db.migrate().await?;
    println!("Database migrations complete");

    // Banner goes out before tracing is initialized
    println!();
    println!("kanban API server starting...");
    println!("   API:      http://{}:{}/boards", host, port);
    println!("   Frontend: http://{}:{}/", host, port);
    if enable_docs {
        println!("   Docs:     http://{}:{}/docs", host, port);
    }
    println!();

    api::run(
        Config {
            host,
            port,
            verbosity,
            enable_docs,
        },
        db,
    )
    .await?;

    Ok(())
}
