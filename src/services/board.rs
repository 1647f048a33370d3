//! Board lifecycle service — listing, creation, lookup, and content saves.
//!
//! DESIGN
//! ======
//! Every operation takes the resolved caller identity as an explicit
//! parameter; nothing in this module reaches into request context. Lookups
//! apply [`access::can_read`] internally so there is no ungated read path,
//! and content saves re-check [`access::can_write`] against a fresh row on
//! every call.
//!
//! ERROR HANDLING
//! ==============
//! `NotFound` and `Forbidden` stay distinguishable here so tests and logs can
//! tell them apart; the content-save HTTP handler collapses the two into one
//! generic denial so unauthorized callers cannot probe board existence.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::services::access;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("authentication required")]
    AuthenticationRequired,
    #[error("board not found: {0}")]
    NotFound(Uuid),
    #[error("access denied to board: {0}")]
    Forbidden(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from board queries. `created_at` is formatted in SQL as an
/// ISO-8601 UTC string.
#[derive(Debug, Clone)]
pub struct BoardRow {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub is_public: bool,
    pub editors: Vec<Uuid>,
    pub data: String,
    pub created_at: String,
}

type BoardTuple = (Uuid, Uuid, String, bool, Vec<Uuid>, String, String);

fn row_to_board((id, author_id, title, is_public, editors, data, created_at): BoardTuple) -> BoardRow {
    BoardRow { id, author_id, title, is_public, editors, data, created_at }
}

const BOARD_COLUMNS: &str = "id, author_id, title, is_public, editors, data, \
     to_char(created_at, 'YYYY-MM-DD\"T\"HH24:MI:SS\"Z\"')";

// =============================================================================
// NORMALIZATION
// =============================================================================

/// Normalize a requested editor list: duplicates removed (first occurrence
/// wins, order otherwise preserved) and the author removed — the author is
/// privileged independently and never appears in `editors`.
#[must_use]
pub fn normalize_editors(author_id: Uuid, editor_ids: &[Uuid]) -> Vec<Uuid> {
    let mut seen = std::collections::HashSet::new();
    editor_ids
        .iter()
        .copied()
        .filter(|id| *id != author_id && seen.insert(*id))
        .collect()
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// List every board the caller may read, newest first.
///
/// The visibility rule is pushed down as a single store predicate: public,
/// owned by the caller, or the caller is on the editor list. Anonymous
/// callers keep only the public clause.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_visible_boards(pool: &PgPool, caller: Option<Uuid>) -> Result<Vec<BoardRow>, BoardError> {
    let rows = match caller {
        Some(caller_id) => {
            sqlx::query_as::<_, BoardTuple>(&format!(
                "SELECT {BOARD_COLUMNS}
                 FROM boards
                 WHERE is_public = TRUE OR author_id = $1 OR editors @> ARRAY[$1]
                 ORDER BY created_at DESC"
            ))
            .bind(caller_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, BoardTuple>(&format!(
                "SELECT {BOARD_COLUMNS}
                 FROM boards
                 WHERE is_public = TRUE
                 ORDER BY created_at DESC"
            ))
            .fetch_all(pool)
            .await?
        }
    };

    Ok(rows.into_iter().map(row_to_board).collect())
}

/// List boards shared with the caller: boards where the caller is on the
/// editor list but is not the author.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_shared_boards(pool: &PgPool, caller_id: Uuid) -> Result<Vec<BoardRow>, BoardError> {
    let rows = sqlx::query_as::<_, BoardTuple>(&format!(
        "SELECT {BOARD_COLUMNS}
         FROM boards
         WHERE editors @> ARRAY[$1]
         ORDER BY created_at DESC"
    ))
    .bind(caller_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_board).collect())
}

/// Create a new board owned by the caller with an empty document.
///
/// # Errors
///
/// `AuthenticationRequired` for an anonymous caller, `Validation` for an
/// empty title, or a database error if the insert fails.
pub async fn create_board(
    pool: &PgPool,
    caller: Option<Uuid>,
    title: &str,
    is_public: bool,
    editor_ids: &[Uuid],
) -> Result<BoardRow, BoardError> {
    let author_id = caller.ok_or(BoardError::AuthenticationRequired)?;

    let title = title.trim();
    if title.is_empty() {
        return Err(BoardError::Validation("title must not be empty".into()));
    }

    let editors = normalize_editors(author_id, editor_ids);
    let row = sqlx::query_as::<_, BoardTuple>(&format!(
        "INSERT INTO boards (author_id, title, is_public, editors, data)
         VALUES ($1, $2, $3, $4, '')
         RETURNING {BOARD_COLUMNS}"
    ))
    .bind(author_id)
    .bind(title)
    .bind(is_public)
    .bind(&editors)
    .fetch_one(pool)
    .await?;

    let board = row_to_board(row);
    info!(board_id = %board.id, %author_id, editors = board.editors.len(), "board created");
    Ok(board)
}

/// Fetch one board, applying the read rule internally. This is the only
/// point lookup — there is no ungated accessor.
///
/// # Errors
///
/// `NotFound` if the board does not exist, `Forbidden` if the caller may not
/// read it, or a database error if the query fails.
pub async fn get_board(pool: &PgPool, board_id: Uuid, caller: Option<Uuid>) -> Result<BoardRow, BoardError> {
    let row = sqlx::query_as::<_, BoardTuple>(&format!(
        "SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1"
    ))
    .bind(board_id)
    .fetch_optional(pool)
    .await?
    .ok_or(BoardError::NotFound(board_id))?;

    let board = row_to_board(row);
    if !access::can_read(&board, caller) {
        return Err(BoardError::Forbidden(board_id));
    }
    Ok(board)
}

/// Overwrite a board's document with `content`.
///
/// Full-document replace: concurrent writers race and the later call wins
/// outright. No version token is checked.
///
/// # Errors
///
/// `NotFound` if the board does not exist, `Forbidden` if the caller may not
/// write it, or a database error if the lookup or update fails.
pub async fn save_board_content(
    pool: &PgPool,
    board_id: Uuid,
    content: &str,
    caller: Option<Uuid>,
) -> Result<(), BoardError> {
    let row = sqlx::query_as::<_, BoardTuple>(&format!(
        "SELECT {BOARD_COLUMNS} FROM boards WHERE id = $1"
    ))
    .bind(board_id)
    .fetch_optional(pool)
    .await?
    .ok_or(BoardError::NotFound(board_id))?;

    let board = row_to_board(row);
    if !access::can_write(&board, caller) {
        return Err(BoardError::Forbidden(board_id));
    }

    sqlx::query("UPDATE boards SET data = $2 WHERE id = $1")
        .bind(board_id)
        .bind(content)
        .execute(pool)
        .await?;

    info!(%board_id, bytes = content.len(), "board content saved");
    Ok(())
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
