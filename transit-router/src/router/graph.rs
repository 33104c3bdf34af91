//! Weighted graph encoding waits and rides.
//!
//! Every stop `i` owns two vertices: `2i` (arrived at the stop) and `2i + 1`
//! (ready to board). A wait edge `2i -> 2i + 1` charges the boarding wait.
//! A ride edge `2i + 1 -> 2j` covers one uninterrupted ride from stop `i` to
//! a later stop `j` on the same traversal of one bus, however many hops lie
//! in between, so a shortest path lists exactly the waits and rides a rider
//! experiences.

use tracing::debug;

use super::{RouterError, RoutingSettings};
use crate::catalogue::Catalogue;

/// Index of an edge in the graph.
pub type EdgeId = usize;

/// A directed, weighted edge. Weights are minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: f64,
}

impl Edge {
    /// Returns true if this edge is the wait at a stop rather than a ride.
    pub fn is_wait(&self) -> bool {
        self.from % 2 == 0 && self.to == self.from + 1
    }
}

/// Directed graph with per-vertex incidence lists.
#[derive(Debug, Clone, Default)]
pub struct DirectedWeightedGraph {
    edges: Vec<Edge>,
    incidence: Vec<Vec<EdgeId>>,
}

impl DirectedWeightedGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add an edge, returning its id.
    pub fn add_edge(&mut self, edge: Edge) -> Result<EdgeId, RouterError> {
        for vertex in [edge.from, edge.to] {
            if vertex >= self.vertex_count() {
                return Err(RouterError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }

        let id = self.edges.len();
        self.edges.push(edge);
        self.incidence[edge.from].push(id);
        Ok(id)
    }

    /// Look up an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Ids of the edges leaving `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: usize) -> &[EdgeId] {
        self.incidence.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the routing graph from a fully populated catalogue.
///
/// Waits come first, one per stop in index order. Then, for each bus in
/// insertion order and each of its traversals, every ordered pair of
/// positions `p < q` gets a ride edge weighted by the road distance summed
/// hop by hop along that traversal.
pub fn build_graph(
    catalogue: &Catalogue,
    settings: &RoutingSettings,
) -> Result<DirectedWeightedGraph, RouterError> {
    settings.validate()?;

    let mut graph = DirectedWeightedGraph::new(catalogue.stop_count() * 2);

    for stop in catalogue.stops() {
        graph.add_edge(Edge {
            from: stop.id.arrival_vertex(),
            to: stop.id.departure_vertex(),
            weight: settings.bus_wait_time,
        })?;
    }

    for bus in catalogue.buses() {
        for traversal in bus.traversals() {
            for (p, &board) in traversal.iter().enumerate() {
                let mut metres: u64 = 0;
                for q in (p + 1)..traversal.len() {
                    metres += u64::from(catalogue.distance(traversal[q - 1], traversal[q]));
                    graph.add_edge(Edge {
                        from: board.departure_vertex(),
                        to: traversal[q].arrival_vertex(),
                        weight: settings.ride_time(metres),
                    })?;
                }
            }
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        buses = catalogue.buses().len(),
        "Built routing graph"
    );

    Ok(graph)
}
