//! Board routes — listing, creation, detail, and content saves.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::routes::auth::{AuthUser, OptionalAuthUser};
use crate::services::board::{self, BoardError, BoardRow};
use crate::state::AppState;

#[derive(Serialize)]
pub struct BoardResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub is_public: bool,
    pub editors: Vec<Uuid>,
    pub data: String,
    pub created_at: String,
}

fn to_response(row: BoardRow) -> BoardResponse {
    BoardResponse {
        id: row.id,
        author_id: row.author_id,
        title: row.title,
        is_public: row.is_public,
        editors: row.editors,
        data: row.data,
        created_at: row.created_at,
    }
}

pub(crate) fn board_error_to_status(err: &BoardError) -> StatusCode {
    match err {
        BoardError::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        BoardError::NotFound(_) => StatusCode::NOT_FOUND,
        BoardError::Forbidden(_) => StatusCode::FORBIDDEN,
        BoardError::Validation(_) => StatusCode::BAD_REQUEST,
        BoardError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Status mapping for the content-save path. Not-found and forbidden are
/// deliberately indistinguishable to the caller so that a write probe cannot
/// confirm a private board exists; logs keep the real reason.
pub(crate) fn save_error_to_status(err: &BoardError) -> StatusCode {
    match err {
        BoardError::NotFound(_) | BoardError::Forbidden(_) => StatusCode::NOT_FOUND,
        other => board_error_to_status(other),
    }
}

/// `GET /api/board` — list every board the caller may read.
pub async fn list_boards(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
) -> Result<Json<Vec<BoardResponse>>, StatusCode> {
    let rows = board::list_visible_boards(&state.pool, user.map(|u| u.id))
        .await
        .map_err(|e| board_error_to_status(&e))?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

/// `GET /api/board/shared` — boards shared with the caller as an editor.
pub async fn list_shared_boards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<BoardResponse>>, StatusCode> {
    let rows = board::list_shared_boards(&state.pool, auth.user.id)
        .await
        .map_err(|e| board_error_to_status(&e))?;
    Ok(Json(rows.into_iter().map(to_response).collect()))
}

#[derive(Deserialize)]
pub struct CreateBoardBody {
    pub title: String,
    #[serde(default = "default_is_public")]
    pub is_public: bool,
    #[serde(default)]
    pub editors: Vec<Uuid>,
}

fn default_is_public() -> bool {
    true
}

/// `POST /api/board` — create a new board.
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateBoardBody>,
) -> Result<(StatusCode, Json<BoardResponse>), StatusCode> {
    let row = board::create_board(&state.pool, Some(auth.user.id), &body.title, body.is_public, &body.editors)
        .await
        .map_err(|e| board_error_to_status(&e))?;
    Ok((StatusCode::CREATED, Json(to_response(row))))
}

/// `GET /api/board/{id}` — fetch one board. Read access is checked inside
/// the lookup; not-found and forbidden stay distinct on this path.
pub async fn get_board(
    State(state): State<AppState>,
    OptionalAuthUser(user): OptionalAuthUser,
    Path(board_id): Path<Uuid>,
) -> Result<Json<BoardResponse>, StatusCode> {
    let row = board::get_board(&state.pool, board_id, user.map(|u| u.id))
        .await
        .map_err(|e| board_error_to_status(&e))?;
    Ok(Json(to_response(row)))
}

#[derive(Deserialize)]
pub struct SaveContentBody {
    pub data: String,
}

/// `PUT /api/board/{id}/content` — replace the board's document.
pub async fn save_content(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<Uuid>,
    Json(body): Json<SaveContentBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    board::save_board_content(&state.pool, board_id, &body.data, Some(auth.user.id))
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, %board_id, caller = %auth.user.id, "content save rejected");
            save_error_to_status(&e)
        })?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
