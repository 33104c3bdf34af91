//! Route query results.

/// One step of a journey as a rider experiences it.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteItem {
    /// Wait at a stop before boarding.
    Wait { stop_name: String, time: f64 },

    /// Ride one bus for `span_count` stop-to-stop hops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Duration of this step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }
}

/// Answer to a route query.
///
/// `total_time` is `None` when the destination cannot be reached; `items`
/// is then empty.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteInfo {
    pub total_time: Option<f64>,
    pub items: Vec<RouteItem>,
}

impl RouteInfo {
    /// No journey exists.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Origin and destination coincide: nothing to do.
    pub fn same_stop() -> Self {
        Self {
            total_time: Some(0.0),
            items: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.total_time.is_some()
    }

    /// Number of buses boarded.
    pub fn boardings(&self) -> usize {
        self.items.iter().filter(|item| !item.is_wait()).count()
    }
}
