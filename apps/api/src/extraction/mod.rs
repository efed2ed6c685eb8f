//! Extraction boundary — the one network-dependent, latency-bearing,
//! failure-prone operation in the system. Everything downstream consumes an
//! already-normalized `ProfileDocument`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::profile::ProfileDocument;

pub mod gemini;
pub mod prompts;
pub mod schema;

/// Payload forwarded by the uploader: pasted text, or an encoded document
/// plus its original media type.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionPayload {
    Text(String),
    Document {
        encoded_data: String,
        media_type: String,
    },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The document-understanding boundary.
///
/// `AppState` holds an `Arc<dyn CvExtractor>` so the hosted-model client can
/// be swapped or mocked without touching the handlers.
#[async_trait]
pub trait CvExtractor: Send + Sync {
    async fn extract(&self, payload: ExtractionPayload) -> Result<ProfileDocument, ExtractError>;
}
