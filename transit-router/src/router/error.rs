//! Router error types.

/// Errors from building the router or answering a route query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouterError {
    /// Routing settings would produce invalid edge weights
    #[error("invalid routing settings: {0}")]
    InvalidSettings(String),

    /// A query named a stop the catalogue does not know
    #[error("stop {0:?} not found")]
    StopNotFound(String),

    /// An edge endpoint does not belong to any registered stop
    #[error("vertex {vertex} is out of range for a graph of {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// A path refers to an edge the graph does not contain
    #[error("edge {0} does not exist")]
    UnknownEdge(usize),

    /// No bus explains a ride edge; the graph and catalogue disagree
    #[error("no bus rides from {from:?} to {to:?} over {distance} m")]
    InconsistentRide {
        from: String,
        to: String,
        distance: f64,
    },

    /// Several buses explain a ride edge and ambiguity is rejected
    #[error("ride from {from:?} to {to:?} is ambiguous between {}", .candidates.join(", "))]
    AmbiguousRide {
        from: String,
        to: String,
        candidates: Vec<String>,
    },
}
