//! HTTP client for the `/api/notes` endpoints.

use eznotes_core::types::NoteId;
use reqwest::{Response, StatusCode};

use crate::models::{Note, NoteDraft, NoteEnvelope};

/// Default API base URL when `NOTES_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/notes";

/// Failure talking to the notes API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, ...)
    /// or the body could not be decoded.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Thin typed wrapper over the five note endpoints.
#[derive(Debug, Clone)]
pub struct NotesApi {
    http: reqwest::Client,
    base_url: String,
}

impl NotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn note_url(&self, id: NoteId) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// GET / -- every note.
    pub async fn list(&self) -> Result<Vec<Note>, ClientError> {
        let response = self.http.get(&self.base_url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// GET /{id}
    pub async fn get(&self, id: NoteId) -> Result<Note, ClientError> {
        let response = self.http.get(self.note_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }

    /// POST / -- returns the created note.
    pub async fn create(&self, draft: &NoteDraft) -> Result<Note, ClientError> {
        let response = self.http.post(&self.base_url).json(draft).send().await?;
        let envelope: NoteEnvelope = check(response).await?.json().await?;
        Ok(envelope.note)
    }

    /// PUT /{id} -- returns the updated note.
    pub async fn update(&self, id: NoteId, draft: &NoteDraft) -> Result<Note, ClientError> {
        let response = self.http.put(self.note_url(id)).json(draft).send().await?;
        let envelope: NoteEnvelope = check(response).await?.json().await?;
        Ok(envelope.note)
    }

    /// DELETE /{id} -- returns the server's confirmation string.
    pub async fn delete(&self, id: NoteId) -> Result<String, ClientError> {
        let response = self.http.delete(self.note_url(id)).send().await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Turn a non-success status into [`ClientError::Status`].
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!(%status, body = %body, "Notes API returned an error");
    Err(ClientError::Status { status, body })
}
