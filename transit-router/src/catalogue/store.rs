//! Indexed storage for stops, buses and road distances.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Bus, CatalogueError, Coordinates, Stop, StopId};

/// The transport catalogue in its mutable, building state.
///
/// Stops receive dense [`StopId`]s in insertion order. Buses store stop ids
/// rather than references, and road distances are keyed by directed pairs
/// of stop ids.
///
/// Once every stop, bus and distance has been added, the catalogue is
/// consumed by `Catalogue::finalize` to produce a read-only
/// [`TransportRouter`](crate::router::TransportRouter).
///
/// # Examples
///
/// ```
/// use transit_router::catalogue::Catalogue;
/// use transit_router::domain::Coordinates;
///
/// let mut catalogue = Catalogue::new();
/// catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
/// catalogue.add_stop("B", Coordinates::new(0.0, 0.01)).unwrap();
/// catalogue.add_distance("A", "B", 1000).unwrap();
///
/// // Missing reverse entries fall back to the forward one
/// assert_eq!(catalogue.distance_by_name("B", "A"), Some(1000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stop_index: HashMap<String, StopId>,
    bus_index: HashMap<String, usize>,
    /// Names of the buses serving each stop, indexed by `StopId`.
    stop_to_buses: Vec<Vec<String>>,
    /// Directed road distances in metres.
    distances: HashMap<(StopId, StopId), u32>,
}

impl Catalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop and return its index.
    pub fn add_stop(
        &mut self,
        name: &str,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        if self.stop_index.contains_key(name) {
            return Err(CatalogueError::DuplicateStop(name.to_string()));
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop {
            id,
            name: name.to_string(),
            coordinates,
        });
        self.stop_index.insert(name.to_string(), id);
        self.stop_to_buses.push(Vec::new());

        trace!(stop = name, %id, "Added stop");
        Ok(id)
    }

    /// Register a bus over already-registered stops.
    ///
    /// Every stop name must resolve; otherwise nothing is recorded and the
    /// unknown name is reported.
    pub fn add_bus(
        &mut self,
        name: &str,
        stop_names: &[&str],
        is_roundtrip: bool,
    ) -> Result<(), CatalogueError> {
        if self.bus_index.contains_key(name) {
            return Err(CatalogueError::DuplicateBus(name.to_string()));
        }
        if stop_names.is_empty() {
            return Err(CatalogueError::EmptyBus(name.to_string()));
        }

        let stops = stop_names
            .iter()
            .map(|stop| {
                self.stop_id(stop).ok_or_else(|| CatalogueError::UnknownStop {
                    stop: stop.to_string(),
                    context: format!("bus {name}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for stop in &stops {
            let serving = &mut self.stop_to_buses[stop.0];
            if !serving.iter().any(|bus| bus == name) {
                serving.push(name.to_string());
            }
        }

        self.bus_index.insert(name.to_string(), self.buses.len());
        self.buses.push(Bus::new(name.to_string(), stops, is_roundtrip));

        trace!(
            bus = name,
            stops = stop_names.len(),
            is_roundtrip,
            "Added bus"
        );
        Ok(())
    }

    /// Record the road distance from one stop to another, in metres.
    ///
    /// Distances are directional. Adding the same pair again overwrites it.
    pub fn add_distance(
        &mut self,
        from: &str,
        to: &str,
        metres: u32,
    ) -> Result<(), CatalogueError> {
        let resolve = |stop: &str| {
            self.stop_id(stop).ok_or_else(|| CatalogueError::UnknownStop {
                stop: stop.to_string(),
                context: format!("distance {from} -> {to}"),
            })
        };
        let key = (resolve(from)?, resolve(to)?);
        self.distances.insert(key, metres);
        Ok(())
    }

    /// Look up a stop by name.
    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a stop by index.
    pub fn stop_by_id(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.0)
    }

    /// Look up the index of a stop.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a bus by name.
    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_index.get(name).map(|&idx| &self.buses[idx])
    }

    /// Road distance between two stops, in metres.
    ///
    /// Falls back to the reverse direction when the forward pair is absent,
    /// and to 0 when neither direction was recorded.
    pub fn distance(&self, from: StopId, to: StopId) -> u32 {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .unwrap_or(0)
    }

    /// Road distance between two stops looked up by name.
    ///
    /// Returns `None` if either stop is unknown.
    pub fn distance_by_name(&self, from: &str, to: &str) -> Option<u32> {
        Some(self.distance(self.stop_id(from)?, self.stop_id(to)?))
    }

    /// Names of the buses serving a stop, in the order they were added.
    ///
    /// Returns `None` for an unknown stop and an empty slice for a stop no
    /// bus calls at.
    pub fn buses_for_stop(&self, name: &str) -> Option<&[String]> {
        self.stop_id(name).map(|id| self.stop_to_buses[id.0].as_slice())
    }

    /// Names of the buses serving a stop, sorted for presentation.
    pub fn stop_buses_sorted(&self, name: &str) -> Option<Vec<&str>> {
        let mut buses: Vec<&str> = self
            .buses_for_stop(name)?
            .iter()
            .map(String::as_str)
            .collect();
        buses.sort_unstable();
        Some(buses)
    }

    /// All stops, in insertion order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// All buses, in insertion order.
    pub fn buses(&self) -> &[Bus] {
        &self.buses
    }

    /// Number of registered stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of recorded directed distances.
    pub fn distance_count(&self) -> usize {
        self.distances.len()
    }
}
