//! Board API client and the save seam the editor session drives.
//!
//! DESIGN
//! ======
//! The session state machine only knows the [`SaveContent`] trait, so tests
//! drive it with an in-process recorder and the app wires in [`HttpApi`].
//! Errors collapse to two kinds: the server said no (`Denied`) or the bytes
//! never made a round trip (`Transport`). Both reach the user as a notice
//! string; neither is retried.

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("save rejected: {0}")]
    Denied(String),
    #[error("transport error: {0}")]
    Transport(String),
}

/// The single persistence operation the editor session invokes.
#[async_trait]
pub trait SaveContent: Send + Sync + 'static {
    /// Replace the board's document with `content`.
    ///
    /// # Errors
    ///
    /// `Denied` when the server refuses the write, `Transport` when the
    /// request never completes.
    async fn save(&self, board_id: Uuid, content: &str) -> Result<(), SaveError>;
}

/// A board as returned by `GET /api/board/{id}` — the reload baseline.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct BoardDetail {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub is_public: bool,
    pub editors: Vec<Uuid>,
    pub data: String,
    pub created_at: String,
}

/// HTTP client for the board API, authenticated with the session cookie.
pub struct HttpApi {
    base_url: String,
    session_token: Option<String>,
    client: reqwest::Client,
}

impl HttpApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, session_token: None, client: reqwest::Client::new() }
    }

    /// Attach the session token carried in the `session_token` cookie.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn cookie_header(&self) -> Option<String> {
        self.session_token
            .as_deref()
            .map(|token| format!("session_token={token}"))
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.cookie_header() {
            Some(cookie) => builder.header(reqwest::header::COOKIE, cookie),
            None => builder,
        }
    }

    /// Fetch one board. A page load calls this to establish the editing
    /// baseline; there is no client-side cache to fall back on.
    ///
    /// # Errors
    ///
    /// `Denied` on a non-success status, `Transport` on network or decode
    /// failure.
    pub async fn load_board(&self, board_id: Uuid) -> Result<BoardDetail, SaveError> {
        let url = self.endpoint(&format!("/api/board/{board_id}"));
        let resp = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SaveError::Denied(format!("{status}: {body}")));
        }

        resp.json::<BoardDetail>()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))
    }
}

#[async_trait]
impl SaveContent for HttpApi {
    async fn save(&self, board_id: Uuid, content: &str) -> Result<(), SaveError> {
        let url = self.endpoint(&format!("/api/board/{board_id}/content"));
        let resp = self
            .request(self.client.put(&url))
            .json(&serde_json::json!({ "data": content }))
            .send()
            .await
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SaveError::Denied(format!("{status}: {body}")));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
