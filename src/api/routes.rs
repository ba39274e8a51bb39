//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{self, HealthResponse};
use super::state::AppState;
use super::static_assets;
use super::v1::{
    self, BoardResponse, CardResponse, CreateBoardRequest, CreateCardRequest, CreateListRequest,
    ListResponse, MessageResponse, MoveCardRequest, MoveListRequest, UpdateBoardRequest,
    UpdateCardRequest, UpdateListRequest,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kanban API",
        version = "0.1.0",
        description = "Boards, lists and cards",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        v1::create_board,
        v1::list_boards,
        v1::get_board,
        v1::update_board,
        v1::delete_board,
        v1::create_list,
        v1::list_lists,
        v1::get_list,
        v1::update_list,
        v1::move_list,
        v1::delete_list,
        v1::create_card,
        v1::list_cards,
        v1::overdue_cards,
        v1::upcoming_cards,
        v1::get_card,
        v1::update_card,
        v1::move_card,
        v1::delete_card,
    ),
    components(
        schemas(
            HealthResponse,
            MessageResponse,
            BoardResponse,
            CreateBoardRequest,
            UpdateBoardRequest,
            ListResponse,
            CreateListRequest,
            UpdateListRequest,
            MoveListRequest,
            CardResponse,
            CreateCardRequest,
            UpdateCardRequest,
            MoveCardRequest,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "boards", description = "Board management endpoints"),
        (name = "lists", description = "List management endpoints"),
        (name = "cards", description = "Card management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router, optionally serving OpenAPI docs at `/docs`.
///
/// Any GET path not claimed by the API falls through to the embedded UI.
pub fn create_router<D: Database>(state: AppState<D>, enable_docs: bool) -> Router {
    let system_routes = Router::new().route("/health", get(handlers::health));

    let board_routes = routes!(D => {
        post "/boards" => v1::create_board,
        get "/boards" => v1::list_boards,
        get "/boards/{id}" => v1::get_board,
        put "/boards/{id}" => v1::update_board,
        delete "/boards/{id}" => v1::delete_board,
    });

    let list_routes = routes!(D => {
        post "/lists" => v1::create_list,
        get "/lists" => v1::list_lists,
        get "/lists/{id}" => v1::get_list,
        put "/lists/{id}" => v1::update_list,
        put "/lists/{id}/move" => v1::move_list,
        delete "/lists/{id}" => v1::delete_list,
    });

    let card_routes = routes!(D => {
        post "/cards" => v1::create_card,
        get "/cards" => v1::list_cards,
        get "/cards/overdue" => v1::overdue_cards,
        get "/cards/upcoming" => v1::upcoming_cards,
        get "/cards/{id}" => v1::get_card,
        put "/cards/{id}" => v1::update_card,
        put "/cards/{id}/move" => v1::move_card,
        delete "/cards/{id}" => v1::delete_card,
    });

    let mut router = system_routes
        .merge(board_routes)
        .merge(list_routes)
        .merge(card_routes);

    if enable_docs {
        router = router.merge(Scalar::with_url("/docs", ApiDoc::openapi()));
    }

    router
        .fallback(static_assets::serve_frontend)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
