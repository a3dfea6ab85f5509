//! Single-source shortest paths over any petgraph `DiGraph` with non-negative edge costs

mod state;

use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use state::State;

/// Edge payloads usable as Dijkstra weights
pub trait EdgeCost {
    /// Must be non-negative
    fn cost(&self) -> f64;
}

impl EdgeCost for f64 {
    fn cost(&self) -> f64 {
        *self
    }
}

/// Cheapest path between two vertices
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub total_weight: f64,
    /// Edges from the source to the target, in travel order
    pub edges: Vec<EdgeIndex>,
}

/// Result of one Dijkstra run from a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: NodeIndex,
    distances: Vec<f64>,
    predecessors: Vec<Option<(NodeIndex, EdgeIndex)>>,
    settled: FixedBitSet,
}

impl ShortestPathTree {
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Final distance to a vertex, `None` if the search never settled it
    pub fn distance_to(&self, target: NodeIndex) -> Option<f64> {
        if self.settled.contains(target.index()) {
            Some(self.distances[target.index()])
        } else {
            None
        }
    }

    /// Rebuilds the edge sequence leading to `target`
    pub fn route_to(&self, target: NodeIndex) -> Option<ShortestPath> {
        let total_weight = self.distance_to(target)?;

        let mut edges = Vec::new();
        let mut current = target;
        while current != self.start {
            let (prev, edge) = self.predecessors[current.index()]?;
            edges.push(edge);
            current = prev;
        }
        edges.reverse();

        Some(ShortestPath {
            total_weight,
            edges,
        })
    }

    /// Number of vertices whose distance is final
    pub fn settled_count(&self) -> usize {
        self.settled.count_ones(..)
    }
}

/// Dijkstra's algorithm with lazy deletion.
///
/// With a `target` the search stops as soon as the target is settled,
/// otherwise every reachable vertex is settled. Exact ties are resolved by
/// heap insertion order and outgoing edges are relaxed in edge insertion
/// order, so among parallel edges of equal cost the oldest one wins.
/// The graph is only read; each call owns its scratch state.
pub fn dijkstra<N, E: EdgeCost>(
    graph: &DiGraph<N, E>,
    start: NodeIndex,
    target: Option<NodeIndex>,
) -> ShortestPathTree {
    let node_count = graph.node_count();
    let mut tree = ShortestPathTree {
        start,
        distances: vec![f64::INFINITY; node_count],
        predecessors: vec![None; node_count],
        settled: FixedBitSet::with_capacity(node_count),
    };
    if start.index() >= node_count {
        return tree;
    }

    let mut heap = BinaryHeap::new();
    let mut seq = 0_u64;

    // Start node has distance 0
    tree.distances[start.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        seq,
        node: start,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Stale entry, a cheaper one was settled already
        if tree.settled.contains(node.index()) {
            continue;
        }
        tree.settled.insert(node.index());

        if target == Some(node) {
            break;
        }

        // petgraph lists outgoing edges newest first
        for edge in graph.edges(node).sorted_unstable_by_key(|edge| edge.id()) {
            let weight = edge.weight().cost();
            debug_assert!(weight >= 0.0, "negative edge cost {weight}");

            let next = edge.target();
            let next_cost = cost + weight;
            if next_cost < tree.distances[next.index()] {
                tree.distances[next.index()] = next_cost;
                tree.predecessors[next.index()] = Some((node, edge.id()));
                seq += 1;
                heap.push(State {
                    cost: next_cost,
                    seq,
                    node: next,
                });
            }
        }
    }

    tree
}

/// Cheapest path from `from` to `to`, `None` if `to` is unreachable
pub fn shortest_path<N, E: EdgeCost>(
    graph: &DiGraph<N, E>,
    from: NodeIndex,
    to: NodeIndex,
) -> Option<ShortestPath> {
    dijkstra(graph, from, Some(to)).route_to(to)
}
