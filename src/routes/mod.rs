//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the JSON API, the static upload directory, and the health endpoint
//! under a single Axum router. Identity is resolved exclusively through the
//! extractors in [`auth`]; handlers never read cookies themselves.

pub mod auth;
pub mod boards;
pub mod users;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router: API routes plus static serving for
/// uploaded profile images.
pub fn app(state: AppState, uploads_dir: PathBuf) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/board", get(boards::list_boards).post(boards::create_board))
        .route("/api/board/shared", get(boards::list_shared_boards))
        .route("/api/board/{id}", get(boards::get_board))
        .route("/api/board/{id}/content", put(boards::save_content))
        .route("/api/users/{id}/profile", get(users::user_profile))
        .route("/api/users/avatar", post(users::upload_avatar))
        .route("/healthz", get(healthz))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
