//! Web layer for the transit router.
//!
//! Provides HTTP endpoints for stop and bus information, route queries and
//! batched statistics requests.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
