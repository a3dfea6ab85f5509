//! Shortest-time routing over the transit graph

pub mod dijkstra;
pub mod itinerary;
pub mod transit_router;

pub use itinerary::{Itinerary, ItineraryItem};
pub use transit_router::TransitRouter;
