//! Core of the bus network router.
//!
//! Holds the transit catalogue (stops, bus routes, road distances), turns it
//! into a weighted directed graph and answers fastest-itinerary queries over
//! that graph.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::{Error, RoutingError};
pub use loading::{RoutingSettings, build_transit_graph};
pub use model::{BusRoute, Catalogue, RouteInfo, RouteKind, Stop, TransitGraph};
pub use routing::{Itinerary, ItineraryItem, TransitRouter};

/// Travel and wait durations, in minutes
pub type Minutes = f64;

/// Road distance between two stops, in meters
pub type Meters = u32;

/// Dense handle of a stop inside the [`Catalogue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

/// Dense handle of a bus route inside the [`Catalogue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub usize);
