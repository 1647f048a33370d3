//! Access-control evaluator for boards.
//!
//! DESIGN
//! ======
//! Pure predicates over a board row and an optional caller identity. These
//! are the single source of truth for read/write eligibility: the lifecycle
//! operations in [`crate::services::board`] call them before touching the
//! store, and nothing else decides access. Absence of a board is a lookup
//! concern and is reported by the lookup, never by these predicates.

use uuid::Uuid;

use crate::services::board::BoardRow;

/// True iff the caller may read the board: the board is public, or the
/// caller is its author, or the caller is on the editor list. An anonymous
/// caller satisfies only the public case.
#[must_use]
pub fn can_read(board: &BoardRow, caller: Option<Uuid>) -> bool {
    if board.is_public {
        return true;
    }
    match caller {
        Some(id) => id == board.author_id || board.editors.contains(&id),
        None => false,
    }
}

/// True iff the caller may write the board: an identity is present and it is
/// the author or an editor. Visibility grants no write access — a public
/// board is read-open but write-closed to non-editors.
#[must_use]
pub fn can_write(board: &BoardRow, caller: Option<Uuid>) -> bool {
    match caller {
        Some(id) => id == board.author_id || board.editors.contains(&id),
        None => false,
    }
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
