//! Autosave session for one open board document.
//!
//! DESIGN
//! ======
//! The session tracks the live buffer, the last persisted content, and a
//! tri-state save status. Every edit re-arms a single debounce task —
//! arming always aborts the previous handle, so at most one timer is ever
//! pending. When the timer fires (or on a manual save) the buffer is read
//! at that moment and shipped whole; edits made while a save is in flight
//! are picked up by the next debounce cycle, not merged into the current
//! request.
//!
//! ERROR HANDLING
//! ==============
//! Public operations never fail: save outcomes arrive as a status
//! transition plus a notice on the channel. A failed save leaves the
//! document `Unsaved` with no retry — the next edit or manual save is the
//! retry. Once issued, a save runs to completion; later edits and even
//! dropping the session do not cancel it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use crate::api::SaveContent;

/// Quiet period between the last edit and the autosave it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1500);

/// Relationship between the buffer and persisted storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    /// Buffer matches what was last persisted.
    #[default]
    Saved,
    /// Buffer has edits not yet shipped (includes failed saves).
    Unsaved,
    /// A save request is in flight.
    Saving,
}

/// User-facing save outcome, delivered on the notice channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorNotice {
    /// A save completed; the UI shows its success toast.
    Saved,
    /// A save failed with the given message.
    SaveFailed(String),
}

struct Inner {
    buffer: String,
    saved_content: String,
    status: SaveStatus,
    /// Pending debounce timer. Replaced (aborted) on every edit.
    pending: Option<JoinHandle<()>>,
}

/// Handle to one editing session. Cheap to clone; all clones share state.
///
/// Requires a Tokio runtime: edits spawn the debounce timer and saves run as
/// detached tasks.
pub struct EditorSession<S> {
    board_id: Uuid,
    debounce: Duration,
    saver: Arc<S>,
    inner: Arc<Mutex<Inner>>,
    notices: mpsc::UnboundedSender<EditorNotice>,
}

impl<S> Clone for EditorSession<S> {
    fn clone(&self) -> Self {
        Self {
            board_id: self.board_id,
            debounce: self.debounce,
            saver: Arc::clone(&self.saver),
            inner: Arc::clone(&self.inner),
            notices: self.notices.clone(),
        }
    }
}

impl<S: SaveContent> EditorSession<S> {
    /// Create a session over the given initial document (the content the
    /// page loaded with). Returns the session and the notice receiver.
    #[must_use]
    pub fn new(
        board_id: Uuid,
        initial_content: impl Into<String>,
        saver: Arc<S>,
        debounce: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<EditorNotice>) {
        let initial = initial_content.into();
        let (tx, rx) = mpsc::unbounded_channel();
        let session = Self {
            board_id,
            debounce,
            saver,
            inner: Arc::new(Mutex::new(Inner {
                buffer: initial.clone(),
                saved_content: initial,
                status: SaveStatus::Saved,
                pending: None,
            })),
            notices: tx,
        };
        (session, rx)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Apply a local edit: replace the buffer, mark the document unsaved,
    /// and re-arm the debounce timer (cancelling any previous one).
    pub fn edit(&self, content: impl Into<String>) {
        let mut inner = self.lock();
        inner.buffer = content.into();
        inner.status = SaveStatus::Unsaved;

        if let Some(handle) = inner.pending.take() {
            handle.abort();
        }

        let session = self.clone();
        inner.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(session.debounce).await;
            debug!(board_id = %session.board_id, "debounce elapsed, issuing autosave");
            session.issue_save();
        }));
    }

    /// Issue a save immediately with the current buffer. Does not wait for
    /// or cancel a pending debounce timer, and does not coalesce with a save
    /// already in flight — overlapping saves each complete independently.
    pub fn save_now(&self) {
        self.issue_save();
    }

    /// Capture the buffer as of this moment and ship it. The in-flight task
    /// owns its content copy, so edits made during the request affect only
    /// the next cycle.
    fn issue_save(&self) {
        let content = {
            let mut inner = self.lock();
            inner.status = SaveStatus::Saving;
            inner.buffer.clone()
        };

        let session = self.clone();
        tokio::spawn(async move {
            let result = session.saver.save(session.board_id, &content).await;
            let mut inner = session.lock();
            match result {
                Ok(()) => {
                    inner.saved_content = content;
                    inner.status = SaveStatus::Saved;
                    let _ = session.notices.send(EditorNotice::Saved);
                }
                Err(e) => {
                    inner.status = SaveStatus::Unsaved;
                    let _ = session.notices.send(EditorNotice::SaveFailed(e.to_string()));
                }
            }
        });
    }

    #[must_use]
    pub fn buffer(&self) -> String {
        self.lock().buffer.clone()
    }

    #[must_use]
    pub fn saved_content(&self) -> String {
        self.lock().saved_content.clone()
    }

    #[must_use]
    pub fn status(&self) -> SaveStatus {
        self.lock().status
    }

    /// True when the buffer differs from the last persisted content.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        let inner = self.lock();
        inner.buffer != inner.saved_content
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
