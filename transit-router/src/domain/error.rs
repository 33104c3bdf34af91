//! Catalogue error types.
//!
//! These errors mean the input network is corrupt or inconsistent. They are
//! raised while the catalogue is being populated, never at query time.

/// Errors raised while populating the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    /// A bus or distance refers to a stop that was never added
    #[error("unknown stop {stop:?} referenced by {context}")]
    UnknownStop { stop: String, context: String },

    /// A stop with this name is already registered
    #[error("stop {0:?} is already registered")]
    DuplicateStop(String),

    /// A bus with this name is already registered
    #[error("bus {0:?} is already registered")]
    DuplicateBus(String),

    /// A bus must call at one stop at least
    #[error("bus {0:?} has no stops")]
    EmptyBus(String),
}
