//! The JSON network document.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use super::{NetworkError, StatRequest};
use crate::catalogue::Catalogue;
use crate::domain::Coordinates;
use crate::router::{RoutingSettings, TransportRouter};

/// A stop declaration, with road distances to its neighbours.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopRequest {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Metres by road from this stop to each named stop.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

/// A bus declaration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusRequest {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// One entry of `base_requests`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopRequest),
    Bus(BusRequest),
}

/// A complete network description.
///
/// Keys the loader does not know about (rendering settings, for example)
/// are ignored.
///
/// # Examples
///
/// ```
/// use transit_router::network::NetworkDocument;
///
/// let json = r#"{
///     "base_requests": [
///         {"type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false},
///         {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0,
///          "road_distances": {"B": 1000}},
///         {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01}
///     ],
///     "routing_settings": {"bus_wait_time": 5, "bus_velocity": 30}
/// }"#;
///
/// let router = NetworkDocument::from_reader(json.as_bytes())
///     .unwrap()
///     .into_router()
///     .unwrap();
/// assert_eq!(router.get_route("B", "A").unwrap().total_time, Some(7.0));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NetworkDocument {
    pub base_requests: Vec<BaseRequest>,
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

impl NetworkDocument {
    /// Parse a document from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, NetworkError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and parse a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let document = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            requests = document.base_requests.len(),
            "Loaded network document"
        );
        Ok(document)
    }

    /// Populate a catalogue from the base requests.
    ///
    /// Requests may appear in any order: every stop is registered first,
    /// then every road distance, then every bus.
    pub fn build_catalogue(&self) -> Result<Catalogue, NetworkError> {
        let mut catalogue = Catalogue::new();

        let stops: Vec<&StopRequest> = self
            .base_requests
            .iter()
            .filter_map(|request| match request {
                BaseRequest::Stop(stop) => Some(stop),
                BaseRequest::Bus(_) => None,
            })
            .collect();

        for stop in &stops {
            catalogue.add_stop(&stop.name, Coordinates::new(stop.latitude, stop.longitude))?;
        }

        for stop in &stops {
            for (to, &metres) in &stop.road_distances {
                catalogue.add_distance(&stop.name, to, metres)?;
            }
        }

        for request in &self.base_requests {
            if let BaseRequest::Bus(bus) = request {
                let stops: Vec<&str> = bus.stops.iter().map(String::as_str).collect();
                catalogue.add_bus(&bus.name, &stops, bus.is_roundtrip)?;
            }
        }

        debug!(
            stops = catalogue.stop_count(),
            buses = catalogue.buses().len(),
            distances = catalogue.distance_count(),
            "Built catalogue from document"
        );
        Ok(catalogue)
    }

    /// Build the catalogue and finalize it with the document's settings.
    pub fn into_router(self) -> Result<TransportRouter, NetworkError> {
        let catalogue = self.build_catalogue()?;
        Ok(catalogue.finalize(self.routing_settings)?)
    }
}
