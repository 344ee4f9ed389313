//! HTTP client for the book-reading service

use crate::error::{ClientError, Result};
use lectern_core::{Book, BookMetadata, SelectedImages};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Envelope for the catalogue endpoint
#[derive(Debug, Deserialize)]
struct BooksEnvelope {
    books: Vec<String>,
}

/// Envelope for the book-detail endpoint
#[derive(Debug, Deserialize)]
struct BookEnvelope {
    book: Book,
}

/// Typed client for the book-reading service
///
/// Every operation is a single idempotent GET with no retry, backoff, or
/// caching; resilience policy belongs to the caller. Responses are decoded
/// strictly: a missing envelope key or a shape violation is a
/// [`ClientError::Malformed`], never a silently patched value.
#[derive(Debug, Clone)]
pub struct ContentClient {
    http: reqwest::Client,
    base_url: String,
}

impl ContentClient {
    /// Create a client for a service rooted at `base_url`
    /// (e.g. `http://127.0.0.1:5000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the catalogue: the identifiers of every book the service
    /// knows, in service order
    pub async fn list_books(&self) -> Result<Vec<String>> {
        let envelope: BooksEnvelope = self
            .get_json("list_books", "/api/books".to_string(), None)
            .await?;
        Ok(envelope.books)
    }

    /// Fetch the full summarized content of one book.
    ///
    /// The payload is validated against the book invariants (non-empty
    /// chapters, aligned paragraph summaries, increasing chapter numbers)
    /// before being returned.
    pub async fn get_book(&self, id: &str) -> Result<Book> {
        let envelope: BookEnvelope = self
            .get_json("get_book", format!("/api/books/{}", id), Some(id))
            .await?;

        let book = envelope.book;
        book.validate().map_err(|e| ClientError::Malformed {
            operation: "get_book",
            reason: e.to_string(),
        })?;
        Ok(book)
    }

    /// Fetch a book's metadata (title, author)
    pub async fn get_book_metadata(&self, id: &str) -> Result<BookMetadata> {
        self.get_json(
            "get_book_metadata",
            format!("/api/books/{}/metadata", id),
            Some(id),
        )
        .await
    }

    /// Fetch the selection-state record for one book.
    ///
    /// A book with no prior selections yields an all-empty record, not an
    /// error. The record is not checked against any book's shape here;
    /// callers must reconcile it against the current book before indexing,
    /// since the two fetches are independent and can drift.
    pub async fn get_selected_images(&self, id: &str) -> Result<SelectedImages> {
        self.get_json(
            "get_selected_images",
            format!("/api/books/{}/images/selected", id),
            Some(id),
        )
        .await
    }

    /// Issue one GET and decode the body, mapping failures onto the
    /// client error taxonomy. `id` is the book identifier a 404 should
    /// be attributed to, for endpoints scoped to one book.
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: String,
        id: Option<&str>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, operation, "fetching");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            if let Some(id) = id {
                return Err(ClientError::NotFound { id: id.to_string() });
            }
        }
        if !status.is_success() {
            tracing::debug!(operation, status = status.as_u16(), "request failed");
            return Err(ClientError::Status {
                operation,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport { operation, source })?;

        serde_json::from_str(&body).map_err(|e| ClientError::Malformed {
            operation,
            reason: e.to_string(),
        })
    }
}
