//! Stop types.

use std::fmt;

/// Mean Earth radius used for great-circle distances, in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Dense, zero-based index of a stop in the catalogue.
///
/// Indices are handed out in insertion order and never change, which makes
/// them the basis for graph vertex numbering: stop `i` owns the arrival
/// vertex `2i` and the departure vertex `2i + 1`.
///
/// # Examples
///
/// ```
/// use transit_router::domain::StopId;
///
/// let stop = StopId(3);
/// assert_eq!(stop.arrival_vertex(), 6);
/// assert_eq!(stop.departure_vertex(), 7);
/// assert_eq!(StopId::from_vertex(7), stop);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl StopId {
    /// Vertex reached when arriving at this stop.
    pub fn arrival_vertex(self) -> usize {
        self.0 * 2
    }

    /// Vertex from which buses can be boarded at this stop.
    pub fn departure_vertex(self) -> usize {
        self.0 * 2 + 1
    }

    /// The stop owning a graph vertex.
    pub fn from_vertex(vertex: usize) -> Self {
        StopId(vertex / 2)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle ("as the crow flies") distance to `other`, in metres.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlng = (self.lng - other.lng).abs().to_radians();
        // Rounding can push the cosine just outside [-1, 1] for near-identical points.
        let cos_angle =
            (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos()).clamp(-1.0, 1.0);
        cos_angle.acos() * EARTH_RADIUS_M
    }
}

/// A named stop with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    pub coordinates: Coordinates,
}
