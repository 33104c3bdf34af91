//! Single-source shortest paths over the routing graph.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::{DirectedWeightedGraph, EdgeId};

/// A minimum-weight path: its edges in travel order and their total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    pub edges: Vec<EdgeId>,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    vertex: usize,
}

impl Eq for State {}

// Flipped so that `BinaryHeap` pops the cheapest state first. Ties fall back
// to the vertex to keep `Ord` consistent with `PartialEq`.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra's algorithm over an immutable graph.
///
/// The graph is fixed at construction. Queries borrow it immutably and keep
/// their scratch space local, so one instance can serve any number of
/// queries, from any number of threads. Edge weights must be non-negative,
/// which the graph builder guarantees.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    graph: DirectedWeightedGraph,
}

impl ShortestPaths {
    pub fn new(graph: DirectedWeightedGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Find a minimum-weight path between two vertices.
    ///
    /// Returns `None` if `to` is unreachable from `from` or either vertex is
    /// out of range. A path from a vertex to itself is empty with weight 0.
    /// Results are deterministic: among equal-weight alternatives the edge
    /// inserted first wins.
    pub fn build_route(&self, from: usize, to: usize) -> Option<PathInfo> {
        let n = self.graph.vertex_count();
        if from >= n || to >= n {
            return None;
        }
        if from == to {
            return Some(PathInfo {
                edges: Vec::new(),
                weight: 0.0,
            });
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[from] = 0.0;
        heap.push(State {
            cost: 0.0,
            vertex: from,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if vertex == to {
                break;
            }
            if cost > dist[vertex] {
                continue;
            }

            for &edge_id in self.graph.incident_edges(vertex) {
                let Some(edge) = self.graph.edge(edge_id) else {
                    continue;
                };
                let next = cost + edge.weight;
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    prev_edge[edge.to] = Some(edge_id);
                    heap.push(State {
                        cost: next,
                        vertex: edge.to,
                    });
                }
            }
        }

        if !dist[to].is_finite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut vertex = to;
        while vertex != from {
            let edge_id = prev_edge[vertex]?;
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id)?.from;
        }
        edges.reverse();

        Some(PathInfo {
            edges,
            weight: dist[to],
        })
    }
}
