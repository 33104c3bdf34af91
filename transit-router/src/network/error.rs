//! Network loading error types.

use crate::domain::CatalogueError;
use crate::router::RouterError;

/// Errors that can occur while loading a network document.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The document could not be read
    #[error("failed to read network document: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("invalid network document: {0}")]
    Json(#[from] serde_json::Error),

    /// A stop, bus or distance was rejected by the catalogue
    #[error("invalid network: {0}")]
    Catalogue(#[from] CatalogueError),

    /// The routing graph could not be built
    #[error("cannot build router: {0}")]
    Router(#[from] RouterError),
}
