//! Domain types for the transit router.
//!
//! Stops are identified by dense [`StopId`] indices rather than references,
//! so buses and distances stay valid however the catalogue is moved around.

mod bus;
mod error;
mod stop;

pub use bus::Bus;
pub use error::CatalogueError;
pub use stop::{Coordinates, EARTH_RADIUS_M, Stop, StopId};
