//! Error types for the estimator's boundaries.
//!
//! The estimation engine itself is total over its inputs and raises no
//! domain errors; everything here belongs to the edges (catalog loading,
//! document ingestion, the remote model, report export).

use std::path::PathBuf;
use std::time::Duration;

/// Errors from loading or parsing a material price list.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A row did not parse as `name,price`.
    #[error("malformed price row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// The file contained no usable rows.
    #[error("price list is empty")]
    EmptyPriceList,

    /// I/O error reading the file.
    #[error("failed to read price list: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from ingesting a scope document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// File extension we do not know how to read.
    #[error("unsupported document format: .{extension} (expected .txt or .md)")]
    Unsupported { extension: String },

    /// I/O error reading the document.
    #[error("failed to read document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the remote completion API.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Authentication failed or no API key configured.
    #[error("Authentication failed for provider {provider}")]
    AuthFailed { provider: String },

    /// Request could not be completed.
    #[error("Request to {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    /// Provider rate-limited the request.
    #[error("Rate limited by {provider}")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Errors from quantity inference over a job description.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    /// Model returned an empty completion.
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// Errors from exporting a rendered estimate.
#[derive(Debug, thiserror::Error)]
#[error("failed to write report to {path}: {source}")]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
