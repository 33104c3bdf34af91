//! Bus route type.

use super::StopId;

/// A named bus route over registered stops.
///
/// A round-trip bus runs its stop list exactly as given (usually ending
/// where it started). A linear bus runs the list forward and then back
/// again, so the return leg is implied rather than spelled out.
///
/// # Examples
///
/// ```
/// use transit_router::domain::{Bus, StopId};
///
/// let bus = Bus::new("750".into(), vec![StopId(0), StopId(1), StopId(2)], false);
/// let full: Vec<_> = bus.full_route().map(|s| s.0).collect();
/// assert_eq!(full, vec![0, 1, 2, 1, 0]);
/// assert_eq!(bus.traversals().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn new(name: String, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name,
            stops,
            is_roundtrip,
        }
    }

    /// Independent directions a rider can travel on this bus.
    ///
    /// Round trips have a single forward traversal. Linear buses add the
    /// reversed stop list as a second traversal, modelling the return leg.
    pub fn traversals(&self) -> Vec<Vec<StopId>> {
        let mut traversals = vec![self.stops.clone()];
        if !self.is_roundtrip {
            traversals.push(self.stops.iter().rev().copied().collect());
        }
        traversals
    }

    /// The physical itinerary: the stop list, followed for linear buses by
    /// its reverse without repeating the turnaround stop.
    pub fn full_route(&self) -> impl Iterator<Item = StopId> + '_ {
        let back_len = if self.is_roundtrip {
            0
        } else {
            self.stops.len().saturating_sub(1)
        };
        self.stops
            .iter()
            .chain(self.stops[..back_len].iter().rev())
            .copied()
    }

    /// Number of stops visited along [`Bus::full_route`].
    pub fn route_stop_count(&self) -> usize {
        if self.is_roundtrip || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }

    /// Returns true if the bus calls at `stop` at least once.
    pub fn serves(&self, stop: StopId) -> bool {
        self.stops.contains(&stop)
    }
}
