//! Per-bus aggregate figures.

use std::collections::HashSet;

use super::Catalogue;
use crate::domain::Bus;

/// Aggregate figures for one bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusStats {
    /// Stops visited along the full itinerary (2n - 1 for linear buses).
    pub stop_count: usize,

    /// Distinct stops in the stop list.
    pub unique_stop_count: usize,

    /// Road length of the full itinerary, in metres.
    pub route_length: u64,

    /// Road length divided by great-circle length.
    ///
    /// Reported as 0.0 when the great-circle length is zero.
    pub curvature: f64,
}

impl Catalogue {
    /// Compute statistics for a bus, or `None` if no such bus exists.
    pub fn bus_stats(&self, name: &str) -> Option<BusStats> {
        let bus = self.bus(name)?;

        let route_length = self.road_length(bus);
        let geo_length = self.geo_length(bus);
        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            0.0
        };

        Some(BusStats {
            stop_count: bus.route_stop_count(),
            unique_stop_count: bus.stops.iter().collect::<HashSet<_>>().len(),
            route_length,
            curvature,
        })
    }

    /// Sum of directed road distances along the full itinerary.
    ///
    /// The return leg of a linear bus uses the reverse-direction entries.
    fn road_length(&self, bus: &Bus) -> u64 {
        let itinerary: Vec<_> = bus.full_route().collect();
        itinerary
            .windows(2)
            .map(|pair| u64::from(self.distance(pair[0], pair[1])))
            .sum()
    }

    /// Sum of great-circle distances along the full itinerary.
    fn geo_length(&self, bus: &Bus) -> f64 {
        let itinerary: Vec<_> = bus
            .full_route()
            .map(|id| self.stops()[id.0].coordinates)
            .collect();
        itinerary
            .windows(2)
            .map(|pair| pair[0].distance_to(&pair[1]))
            .sum()
    }
}
