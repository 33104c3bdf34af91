//! Statistics requests and their answers.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::catalogue::BusStats;
use crate::router::{RouteInfo, RouteItem, RouterError, TransportRouter};

const NOT_FOUND: &str = "not found";
const NOT_SUPPORTED: &str = "not supported";

/// One entry of `stat_requests`.
///
/// Map rendering is not provided, so `Map` requests are answered with an
/// error message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    Map { id: i64 },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. }
            | StatRequest::Bus { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Buses serving a stop, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopAnswer {
    pub buses: Vec<String>,
}

/// Figures for one bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusAnswer {
    pub curvature: f64,
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl From<BusStats> for BusAnswer {
    fn from(stats: BusStats) -> Self {
        Self {
            curvature: stats.curvature,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

/// A step of a route answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItemAnswer {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&RouteItem> for RouteItemAnswer {
    fn from(item: &RouteItem) -> Self {
        match item {
            RouteItem::Wait { stop_name, time } => RouteItemAnswer::Wait {
                stop_name: stop_name.clone(),
                time: *time,
            },
            RouteItem::Bus {
                bus,
                span_count,
                time,
            } => RouteItemAnswer::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

/// A reachable journey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnswer {
    pub total_time: f64,
    pub items: Vec<RouteItemAnswer>,
}

impl RouteAnswer {
    /// Convert a route, or `None` if the destination is unreachable.
    pub fn from_route(route: &RouteInfo) -> Option<Self> {
        Some(Self {
            total_time: route.total_time?,
            items: route.items.iter().map(RouteItemAnswer::from).collect(),
        })
    }
}

/// The body of a statistics answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatAnswer {
    Stop(StopAnswer),
    Bus(BusAnswer),
    Route(RouteAnswer),
    Error { error_message: String },
}

impl StatAnswer {
    fn error(message: &str) -> Self {
        StatAnswer::Error {
            error_message: message.to_string(),
        }
    }
}

/// An answer tagged with the id of the request it answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,
    #[serde(flatten)]
    pub answer: StatAnswer,
}

/// Answer one statistics request.
pub fn answer_stat_request(router: &TransportRouter, request: &StatRequest) -> StatResponse {
    let answer = match request {
        StatRequest::Stop { name, .. } => match router.catalogue().stop_buses_sorted(name) {
            Some(buses) => StatAnswer::Stop(StopAnswer {
                buses: buses.into_iter().map(str::to_string).collect(),
            }),
            None => StatAnswer::error(NOT_FOUND),
        },
        StatRequest::Bus { name, .. } => match router.bus_stats(name) {
            Some(stats) => StatAnswer::Bus(stats.into()),
            None => StatAnswer::error(NOT_FOUND),
        },
        StatRequest::Route { from, to, .. } => match router.get_route(from, to) {
            Ok(route) => RouteAnswer::from_route(&route)
                .map(StatAnswer::Route)
                .unwrap_or_else(|| StatAnswer::error(NOT_FOUND)),
            Err(RouterError::StopNotFound(_)) => StatAnswer::error(NOT_FOUND),
            Err(e) => {
                warn!(
                    from = from.as_str(),
                    to = to.as_str(),
                    error = %e,
                    "Route request failed"
                );
                StatAnswer::Error {
                    error_message: e.to_string(),
                }
            }
        },
        StatRequest::Map { .. } => StatAnswer::error(NOT_SUPPORTED),
    };

    trace!(request_id = request.id(), "Answered stat request");
    StatResponse {
        request_id: request.id(),
        answer,
    }
}

/// Answer a batch of statistics requests, in order.
pub fn answer_stat_requests(
    router: &TransportRouter,
    requests: &[StatRequest],
) -> Vec<StatResponse> {
    requests
        .iter()
        .map(|request| answer_stat_request(router, request))
        .collect()
}
