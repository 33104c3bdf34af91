//! Routing configuration.

use serde::{Deserialize, Serialize};

use super::RouterError;

pub const METRES_PER_KM: f64 = 1000.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// How to choose a bus when several explain the same ride.
///
/// A ride edge only records its endpoints and its duration. When more than
/// one bus (or more than one pass of the same bus) covers the same stop
/// pair over the same road distance, the reconstructor has to pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The first match in bus insertion order (forward direction before the
    /// return leg, earliest boarding position first).
    #[default]
    FirstByInsertion,

    /// The match with the fewest stop-to-stop hops; insertion order among equals.
    ShortestSpan,

    /// Fail the query when candidates disagree on bus or span.
    RejectAmbiguous,
}

/// Network-wide routing parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoutingSettings {
    /// Time spent waiting at a stop before every boarding (minutes).
    pub bus_wait_time: f64,

    /// Bus speed (km/h).
    pub bus_velocity: f64,

    /// Policy for ambiguous ride reconstruction.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl RoutingSettings {
    /// Create settings with the default tie-break policy.
    pub fn new(bus_wait_time: f64, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
            tie_break: TieBreak::default(),
        }
    }

    /// Replace the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Check the settings can produce non-negative, finite edge weights.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !self.bus_wait_time.is_finite() || self.bus_wait_time < 0.0 {
            return Err(RouterError::InvalidSettings(format!(
                "bus_wait_time must be a non-negative number of minutes, got {}",
                self.bus_wait_time
            )));
        }
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(RouterError::InvalidSettings(format!(
                "bus_velocity must be a positive speed in km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Distance covered per minute of riding, in metres.
    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * METRES_PER_KM / MINUTES_PER_HOUR
    }

    /// Minutes needed to ride `metres` of road.
    pub fn ride_time(&self, metres: u64) -> f64 {
        metres as f64 / self.metres_per_minute()
    }

    /// Road distance implied by a ride of `minutes`.
    pub fn implied_distance(&self, minutes: f64) -> f64 {
        minutes * self.metres_per_minute()
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6.0,
            bus_velocity: 40.0,
            tie_break: TieBreak::FirstByInsertion,
        }
    }
}
