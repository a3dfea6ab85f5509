// Re-export key components
pub use crate::loading::{RoutingSettings, build_transit_graph};
pub use crate::model::{
    BusRoute, Catalogue, EdgeDescriptor, RouteInfo, RouteKind, Stop, StopVertices, TransitGraph,
};
pub use crate::routing::dijkstra::{
    EdgeCost, ShortestPath, ShortestPathTree, dijkstra, shortest_path,
};
pub use crate::routing::{Itinerary, ItineraryItem, TransitRouter};
pub use crate::{Error, RoutingError};

// Core handle and unit types
pub use crate::Meters;
pub use crate::Minutes;
pub use crate::RouteId;
pub use crate::StopId;
