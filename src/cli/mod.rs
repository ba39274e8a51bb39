//! `kb` command-line client.

pub mod api_client;
mod commands;
pub mod error;
mod utils;


use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::api_client::ApiClient;
use crate::cli::error::CliResult;

#[derive(Parser)]
#[command(name = "kb")]
#[command(author, version, about = "Kanban board manager", long_about = None)]
pub struct Cli {
    /// API URL (default: http://localhost:3000)
    #[arg(long, global = true, env = "KANBAN_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Board management commands
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// List management commands
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Card management commands
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Start the API server with the embedded frontend
    Api {
        /// Host address to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Database file (default: $KANBAN_HOME or XDG data dir, kanban.db)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Serve API documentation at /docs
        #[arg(long)]
        docs: bool,
        /// Increase log verbosity (-v, -vv, -vvv)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,
    },
}

#[derive(Subcommand)]
enum BoardCommands {
    /// List all boards
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a board
    Get {
        id: String,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a board
    Create {
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Hex color, e.g. #0079bf
        #[arg(long)]
        color: Option<String>,
    },
    /// Update a board
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a board with its lists and cards
    Delete {
        id: String,
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// List lists
    List {
        /// Only lists of this board
        #[arg(long)]
        board: Option<String>,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a list
    Get {
        id: String,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a list (appended when no position is given)
    Create {
        /// Board ID
        board: String,
        title: String,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Update a list
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Move a list to another position
    Move { id: String, position: i64 },
    /// Delete a list with its cards
    Delete {
        id: String,
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// List cards
    List {
        /// Only cards of this list
        #[arg(long)]
        list: Option<String>,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Cards past their due date
    Overdue {
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Cards due soon
    Upcoming {
        /// Window in days (server default: 7)
        #[arg(long, allow_negative_numbers = true)]
        days: Option<i64>,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a card
    Get {
        id: String,
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a card (appended when no position is given)
    Create {
        /// List ID
        list: String,
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        position: Option<i64>,
        /// YYYY-MM-DD or RFC 3339
        #[arg(long)]
        due: Option<String>,
    },
    /// Update a card
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        position: Option<i64>,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        /// Remove the due date
        #[arg(long)]
        clear_due: bool,
    },
    /// Move a card; moving to another list assigns a new ID
    Move {
        id: String,
        /// Target list ID
        list: String,
        #[arg(long, default_value = "0")]
        position: i64,
    },
    /// Delete a card
    Delete {
        id: String,
        #[arg(long)]
        force: bool,
    },
}

pub async fn run() -> miette::Result<()> {
    let cli = Cli::parse();
    let api_client = ApiClient::new(cli.api_url);

    let output = match cli.command {
        Some(Commands::Api {
            host,
            port,
            db,
            docs,
            verbose,
        }) => return commands::api::run(host, port, db, verbose, docs).await,
        Some(Commands::Board { command }) => run_board(&api_client, command).await?,
        Some(Commands::List { command }) => run_list(&api_client, command).await?,
        Some(Commands::Card { command }) => run_card(&api_client, command).await?,
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["kb", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}

async fn run_board(api_client: &ApiClient, command: BoardCommands) -> CliResult<String> {
    use commands::board::*;

    match command {
        BoardCommands::List { format } => list_boards(api_client, &format).await,
        BoardCommands::Get { id, format } => get_board(api_client, &id, &format).await,
        BoardCommands::Create {
            title,
            description,
            color,
        } => {
            let request = CreateBoardRequest {
                title,
                description,
                background_color: color,
            };
            create_board(api_client, request).await
        }
        BoardCommands::Update {
            id,
            title,
            description,
            color,
        } => {
            let request = UpdateBoardRequest {
                title,
                description,
                background_color: color,
            };
            update_board(api_client, &id, request).await
        }
        BoardCommands::Delete { id, force } => delete_board(api_client, &id, force).await,
    }
}

async fn run_list(api_client: &ApiClient, command: ListCommands) -> CliResult<String> {
    use commands::list::*;

    match command {
        ListCommands::List { board, format } => {
            list_lists(api_client, board.as_deref(), &format).await
        }
        ListCommands::Get { id, format } => get_list(api_client, &id, &format).await,
        ListCommands::Create {
            board,
            title,
            position,
        } => {
            let request = CreateListRequest {
                board_id: board,
                title,
                position,
            };
            create_list(api_client, request).await
        }
        ListCommands::Update {
            id,
            title,
            position,
        } => update_list(api_client, &id, UpdateListRequest { title, position }).await,
        ListCommands::Move { id, position } => move_list(api_client, &id, position).await,
        ListCommands::Delete { id, force } => delete_list(api_client, &id, force).await,
    }
}

async fn run_card(api_client: &ApiClient, command: CardCommands) -> CliResult<String> {
    use commands::card::*;

    match command {
        CardCommands::List { list, format } => {
            list_cards(api_client, list.as_deref(), &format).await
        }
        CardCommands::Overdue { format } => overdue_cards(api_client, &format).await,
        CardCommands::Upcoming { days, format } => {
            upcoming_cards(api_client, days, &format).await
        }
        CardCommands::Get { id, format } => get_card(api_client, &id, &format).await,
        CardCommands::Create {
            list,
            title,
            description,
            position,
            due,
        } => {
            let request = CreateCardRequest {
                list_id: list,
                title,
                description,
                position,
                due_date: due,
            };
            create_card(api_client, request).await
        }
        CardCommands::Update {
            id,
            title,
            description,
            position,
            due,
            clear_due,
        } => {
            let due_date = if clear_due { Some(None) } else { due.map(Some) };
            let request = UpdateCardRequest {
                title,
                description,
                position,
                due_date,
            };
            update_card(api_client, &id, request).await
        }
        CardCommands::Move { id, list, position } => {
            move_card(api_client, &id, &list, position).await
        }
        CardCommands::Delete { id, force } => delete_card(api_client, &id, force).await,
    }
}
