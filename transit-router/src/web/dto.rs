//! Data transfer objects for web requests and responses.
//!
//! Stop, bus and route bodies share their shape with the network
//! document's statistics answers.

use serde::{Deserialize, Serialize};

pub use crate::network::{
    BusAnswer, RouteAnswer, RouteItemAnswer, StatRequest, StatResponse, StopAnswer,
};

/// Query string for a route search.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
