//! The finalized, query-only router.

use tracing::{debug, trace};

use super::graph::{DirectedWeightedGraph, build_graph};
use super::segments::reconstruct;
use super::shortest_path::ShortestPaths;
use super::{RouteInfo, RouterError, RoutingSettings};
use crate::catalogue::{BusStats, Catalogue};

impl Catalogue {
    /// Finish building: construct the routing graph and shortest-path engine.
    ///
    /// The catalogue is consumed, so no stop, bus or distance can be added
    /// once the graph exists.
    pub fn finalize(self, settings: RoutingSettings) -> Result<TransportRouter, RouterError> {
        TransportRouter::new(self, settings)
    }
}

/// A catalogue frozen together with its routing graph.
///
/// All methods take `&self`; share it between threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use transit_router::catalogue::Catalogue;
/// use transit_router::domain::Coordinates;
/// use transit_router::router::{RouteItem, RoutingSettings};
///
/// let mut catalogue = Catalogue::new();
/// catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
/// catalogue.add_stop("B", Coordinates::new(0.0, 0.01)).unwrap();
/// catalogue.add_distance("A", "B", 1000).unwrap();
/// catalogue.add_bus("14", &["A", "B"], false).unwrap();
///
/// let router = catalogue.finalize(RoutingSettings::new(5.0, 30.0)).unwrap();
/// let route = router.get_route("A", "B").unwrap();
///
/// assert_eq!(route.total_time, Some(7.0));
/// assert_eq!(
///     route.items[1],
///     RouteItem::Bus { bus: "14".into(), span_count: 1, time: 2.0 }
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TransportRouter {
    catalogue: Catalogue,
    settings: RoutingSettings,
    engine: ShortestPaths,
}

impl TransportRouter {
    /// Build the graph and engine for a fully populated catalogue.
    pub fn new(catalogue: Catalogue, settings: RoutingSettings) -> Result<Self, RouterError> {
        let graph = build_graph(&catalogue, &settings)?;
        debug!(
            stops = catalogue.stop_count(),
            buses = catalogue.buses().len(),
            distances = catalogue.distance_count(),
            "Transport router finalized"
        );

        Ok(Self {
            catalogue,
            settings,
            engine: ShortestPaths::new(graph),
        })
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        self.engine.graph()
    }

    /// Statistics for a bus, or `None` if no such bus exists.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        self.catalogue.bus_stats(name)
    }

    /// Fastest journey between two named stops.
    ///
    /// An unreachable destination is not an error: the result then has no
    /// total time and no items. Unknown stop names are reported as
    /// [`RouterError::StopNotFound`].
    pub fn get_route(&self, from: &str, to: &str) -> Result<RouteInfo, RouterError> {
        let from_id = self
            .catalogue
            .stop_id(from)
            .ok_or_else(|| RouterError::StopNotFound(from.to_string()))?;
        let to_id = self
            .catalogue
            .stop_id(to)
            .ok_or_else(|| RouterError::StopNotFound(to.to_string()))?;

        if from_id == to_id {
            return Ok(RouteInfo::same_stop());
        }

        let Some(path) = self
            .engine
            .build_route(from_id.arrival_vertex(), to_id.arrival_vertex())
        else {
            trace!(from, to, "No route");
            return Ok(RouteInfo::unreachable());
        };

        let info = reconstruct(&self.catalogue, self.engine.graph(), &self.settings, &path)?;
        trace!(
            from,
            to,
            total_time = path.weight,
            items = info.items.len(),
            "Route found"
        );
        Ok(info)
    }
}
