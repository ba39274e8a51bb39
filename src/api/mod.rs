//! REST API server: routing, handlers, tracing setup and the embedded UI.

mod handlers;
pub mod routes;
mod state;
pub mod static_assets;
pub mod v1;

#[cfg(test)]
mod mod_test;

use std::net::{IpAddr, Ipv4Addr};

use miette::Diagnostic;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

pub use state::AppState;

/// API server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Number of `-v` flags given on the command line
    pub verbosity: u8,
    /// Serve the Scalar UI at `/docs`
    pub enable_docs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            verbosity: 0,
            enable_docs: false,
        }
    }
}

/// Errors that stop the server from starting or serving.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to bind {addr}: {source}")]
    #[diagnostic(
        code(kanban::api::bind),
        help("Is another process already listening on this port?")
    )]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    #[diagnostic(code(kanban::api::serve))]
    Serve(#[source] std::io::Error),
}

/// Default filter for a given number of `-v` flags.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "kanban=info,tower_http=warn",
        1 => "kanban=debug,tower_http=info",
        2 => "kanban=debug,tower_http=debug",
        _ => "kanban=trace,tower_http=trace,sqlx=debug",
    }
}

/// Initialize tracing subscriber with env filter. `RUST_LOG` wins over verbosity.
pub fn init_tracing(verbosity: u8) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity).into());

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Run the API server with the given configuration and database.
pub async fn run<D: Database>(config: Config, db: D) -> Result<(), ApiError> {
    init_tracing(config.verbosity);

    let state = AppState::new(db);
    let app = routes::create_router(state, config.enable_docs).layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiError::Bind {
            addr: addr.clone(),
            source,
        })?;
    info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(ApiError::Serve)?;
    Ok(())
}
