//! Routing graph built on top of the catalogue

use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};

use crate::routing::dijkstra::EdgeCost;
use crate::{Minutes, RouteId, StopId};

/// Which side of the wait-edge a vertex sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    /// Reached when a bus drops a rider off, or where a journey starts
    Arrival,
    /// Reached after waiting, buses leave from here
    Departure,
}

/// Graph vertex payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertex {
    pub stop: StopId,
    pub role: VertexRole,
}

/// Pair of vertices representing one stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopVertices {
    pub arrival: NodeIndex,
    pub departure: NodeIndex,
}

/// What a graph edge means to a rider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeDescriptor {
    /// Waiting for a bus at a stop
    Wait { stop: StopId, time: Minutes },
    /// Riding one bus through `span_count` consecutive hops without leaving it
    Bus {
        route: RouteId,
        span_count: usize,
        time: Minutes,
    },
}

impl EdgeDescriptor {
    pub fn time(&self) -> Minutes {
        match *self {
            EdgeDescriptor::Wait { time, .. } | EdgeDescriptor::Bus { time, .. } => time,
        }
    }
}

impl EdgeCost for EdgeDescriptor {
    fn cost(&self) -> f64 {
        self.time()
    }
}

/// Directed weighted graph of a bus network.
///
/// Every served stop owns an arrival and a departure vertex joined by a
/// wait-edge; ride-edges go from a departure vertex to an arrival vertex.
/// The graph is never modified once built.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    pub(crate) graph: DiGraph<StopVertex, EdgeDescriptor>,
    /// Vertex pair for each catalogue stop, `None` for stops no bus serves
    pub(crate) stop_vertices: Vec<Option<StopVertices>>,
}

impl TransitGraph {
    pub(crate) fn with_stop_capacity(stop_count: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(stop_count * 2, stop_count * 2),
            stop_vertices: vec![None; stop_count],
        }
    }

    /// Registers both vertices of a stop and the wait-edge between them
    pub(crate) fn add_stop(&mut self, stop: StopId, wait_time: Minutes) -> StopVertices {
        let arrival = self.graph.add_node(StopVertex {
            stop,
            role: VertexRole::Arrival,
        });
        let departure = self.graph.add_node(StopVertex {
            stop,
            role: VertexRole::Departure,
        });
        self.graph.add_edge(
            arrival,
            departure,
            EdgeDescriptor::Wait {
                stop,
                time: wait_time,
            },
        );

        let vertices = StopVertices { arrival, departure };
        self.stop_vertices[stop.0] = Some(vertices);
        vertices
    }

    pub(crate) fn add_ride(
        &mut self,
        from: StopVertices,
        to: StopVertices,
        descriptor: EdgeDescriptor,
    ) -> EdgeIndex {
        self.graph.add_edge(from.departure, to.arrival, descriptor)
    }

    /// Vertex pair of a stop, `None` if no route serves it
    pub fn vertices_of(&self, stop: StopId) -> Option<StopVertices> {
        self.stop_vertices.get(stop.0).copied().flatten()
    }

    /// Descriptor of an edge of this graph
    ///
    /// # Panics
    ///
    /// Panics if `edge` does not belong to this graph.
    pub fn descriptor(&self, edge: EdgeIndex) -> &EdgeDescriptor {
        &self.graph[edge]
    }

    pub fn vertex(&self, vertex: NodeIndex) -> Option<&StopVertex> {
        self.graph.node_weight(vertex)
    }

    /// Underlying petgraph graph, for running generic algorithms
    pub fn inner(&self) -> &DiGraph<StopVertex, EdgeDescriptor> {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// All edges with their descriptors, in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &EdgeDescriptor)> {
        self.graph.edge_indices().zip(self.graph.edge_weights())
    }
}
