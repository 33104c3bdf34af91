//! Fastest-journey routing over the transport catalogue.
//!
//! A finalized catalogue is turned into a weighted graph with two vertices
//! per stop, shortest paths are found with Dijkstra's algorithm, and each
//! path is translated back into the waits and bus rides a rider takes.

mod config;
mod error;
mod graph;
mod route_info;
mod segments;
mod shortest_path;
mod transport;

#[cfg(test)]
mod router_tests;

pub use config::{METRES_PER_KM, MINUTES_PER_HOUR, RoutingSettings, TieBreak};
pub use error::RouterError;
pub use graph::{DirectedWeightedGraph, Edge, EdgeId, build_graph};
pub use route_info::{RouteInfo, RouteItem};
pub use segments::{RideMatch, reconstruct, ride_candidates};
pub use shortest_path::{PathInfo, ShortestPaths};
pub use transport::TransportRouter;
