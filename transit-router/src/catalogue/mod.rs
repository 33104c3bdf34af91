//! The transport catalogue: stops, buses and road distances.
//!
//! The catalogue is populated once by a loader and then handed to the
//! router. It also answers per-bus statistics and per-stop bus lists.

mod stats;
mod store;

pub use stats::BusStats;
pub use store::Catalogue;
