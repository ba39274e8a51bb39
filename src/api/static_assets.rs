//! Embedded frontend assets for production builds.
//!
//! In release mode: Assets are embedded into the binary at compile time.
//! In debug mode: rust-embed reads from filesystem (dist/) at runtime.

use axum::{
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

/// Embedded frontend assets (WASM, JS, CSS, HTML, etc.)
///
/// Folder points to Trunk's output directory.
#[derive(RustEmbed)]
#[folder = "dist/"]
#[allow_missing = true]
#[include = "*.html"]
#[include = "*.js"]
#[include = "*.wasm"]
#[include = "*.css"]
#[include = "snippets/**/*"]
struct FrontendAssets;

const API_PREFIXES: &[&str] = &["boards", "lists", "cards", "health", "docs"];

/// Whether `path` (without leading slash) belongs to the REST surface.
pub fn is_api_path(path: &str) -> bool {
    API_PREFIXES.iter().any(|prefix| {
        path == *prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Serve embedded frontend assets with SPA fallback routing.
///
/// Routing logic:
/// 1. Unmatched API paths answer 404
/// 2. Try exact file match (e.g., /style.css, /app.wasm)
/// 3. Fallback to index.html for client routes (e.g., /b/{id})
/// 4. Return 500 if index.html is missing (frontend not built)
pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if is_api_path(path) {
        return StatusCode::NOT_FOUND.into_response();
    }

    let asset_path = if path.is_empty() { "index.html" } else { path };

    match FrontendAssets::get(asset_path) {
        Some(content) => {
            let mime = mime_guess::from_path(asset_path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    // Trunk hashes asset names
                    (header::CACHE_CONTROL, "public, max-age=31536000".to_string()),
                ],
                content.data,
            )
                .into_response()
        }
        None => match FrontendAssets::get("index.html") {
            Some(index) => (
                [
                    (header::CONTENT_TYPE, "text/html"),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                index.data,
            )
                .into_response(),
            None => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Frontend assets not found. Run 'trunk build --release' first.",
            )
                .into_response(),
        },
    }
}
