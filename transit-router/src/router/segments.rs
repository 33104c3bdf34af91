//! Translating graph paths back into waits and rides.
//!
//! A ride edge only knows its endpoints and its duration. The bus that
//! produced it is recovered by searching the catalogue for a traversal in
//! which the origin is followed by the destination and the summed road
//! distance between them rides in exactly that duration.

use std::collections::HashSet;

use tracing::error;

use super::graph::DirectedWeightedGraph;
use super::shortest_path::PathInfo;
use super::{RouteInfo, RouteItem, RouterError, RoutingSettings, TieBreak};
use crate::catalogue::Catalogue;
use crate::domain::StopId;

/// A bus that explains a ride edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RideMatch<'a> {
    pub bus: &'a str,
    pub span_count: usize,
}

/// Every ride from `from` to `to` lasting exactly `minutes`, in bus
/// insertion order, forward traversal before the return leg, then by
/// boarding and alighting position.
///
/// Durations are recomputed from summed road metres the same way the graph
/// builder computed them, so a matching ride reproduces the edge weight
/// bit for bit however long the ride is.
pub fn ride_candidates<'a>(
    catalogue: &'a Catalogue,
    settings: &RoutingSettings,
    from: StopId,
    to: StopId,
    minutes: f64,
) -> Vec<RideMatch<'a>> {
    let mut matches = Vec::new();

    for bus in catalogue.buses() {
        if !bus.serves(from) || !bus.serves(to) {
            continue;
        }
        for traversal in bus.traversals() {
            for (p, _) in traversal.iter().enumerate().filter(|(_, s)| **s == from) {
                let mut metres: u64 = 0;
                for q in (p + 1)..traversal.len() {
                    metres += u64::from(catalogue.distance(traversal[q - 1], traversal[q]));
                    let ride_time = settings.ride_time(metres);
                    // Distances are non-negative, so the duration only grows
                    if ride_time > minutes {
                        break;
                    }
                    if traversal[q] == to && ride_time == minutes {
                        matches.push(RideMatch {
                            bus: &bus.name,
                            span_count: q - p,
                        });
                    }
                }
            }
        }
    }

    matches
}

/// Pick one candidate according to the tie-break policy.
fn choose<'a>(
    candidates: Vec<RideMatch<'a>>,
    tie_break: TieBreak,
    from: &str,
    to: &str,
) -> Result<Option<RideMatch<'a>>, RouterError> {
    match tie_break {
        TieBreak::FirstByInsertion => Ok(candidates.into_iter().next()),
        TieBreak::ShortestSpan => Ok(candidates.into_iter().min_by_key(|m| m.span_count)),
        TieBreak::RejectAmbiguous => {
            let mut seen = HashSet::new();
            let distinct: Vec<RideMatch<'a>> = candidates
                .into_iter()
                .filter(|m| seen.insert((m.bus, m.span_count)))
                .collect();
            if distinct.len() > 1 {
                return Err(RouterError::AmbiguousRide {
                    from: from.to_string(),
                    to: to.to_string(),
                    candidates: distinct
                        .iter()
                        .map(|m| format!("{} (span {})", m.bus, m.span_count))
                        .collect(),
                });
            }
            Ok(distinct.into_iter().next())
        }
    }
}

fn stop_name(
    catalogue: &Catalogue,
    vertex: usize,
    vertex_count: usize,
) -> Result<&str, RouterError> {
    catalogue
        .stop_by_id(StopId::from_vertex(vertex))
        .map(|stop| stop.name.as_str())
        .ok_or(RouterError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
}

/// Turn a shortest path into the rider's sequence of waits and rides.
pub fn reconstruct(
    catalogue: &Catalogue,
    graph: &DirectedWeightedGraph,
    settings: &RoutingSettings,
    path: &PathInfo,
) -> Result<RouteInfo, RouterError> {
    let vertex_count = graph.vertex_count();
    let mut items = Vec::with_capacity(path.edges.len());

    for &edge_id in &path.edges {
        let edge = graph
            .edge(edge_id)
            .ok_or(RouterError::UnknownEdge(edge_id))?;

        if edge.is_wait() {
            items.push(RouteItem::Wait {
                stop_name: stop_name(catalogue, edge.from, vertex_count)?.to_string(),
                time: edge.weight,
            });
            continue;
        }

        let from_name = stop_name(catalogue, edge.from, vertex_count)?;
        let to_name = stop_name(catalogue, edge.to, vertex_count)?;

        let candidates = ride_candidates(
            catalogue,
            settings,
            StopId::from_vertex(edge.from),
            StopId::from_vertex(edge.to),
            edge.weight,
        );
        let Some(ride) = choose(candidates, settings.tie_break, from_name, to_name)? else {
            let distance = settings.implied_distance(edge.weight);
            error!(
                from = from_name,
                to = to_name,
                distance,
                edge = edge_id,
                "Ride edge matches no bus; graph and catalogue disagree"
            );
            return Err(RouterError::InconsistentRide {
                from: from_name.to_string(),
                to: to_name.to_string(),
                distance,
            });
        };

        items.push(RouteItem::Bus {
            bus: ride.bus.to_string(),
            span_count: ride.span_count,
            time: edge.weight,
        });
    }

    Ok(RouteInfo {
        total_time: Some(path.weight),
        items,
    })
}
