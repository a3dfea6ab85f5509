//! Data model for bus network routing
//!
//! Contains the transit catalogue and the routing graph derived from it.

pub mod catalogue;
pub mod graph;
pub mod types;

pub use catalogue::Catalogue;
pub use graph::{EdgeDescriptor, StopVertex, StopVertices, TransitGraph, VertexRole};
pub use types::{BusRoute, RouteInfo, RouteKind, Stop};
