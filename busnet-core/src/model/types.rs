//! Catalogue entities

use geo::{Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::StopId;

/// Named bus stop
#[derive(Debug, Clone)]
pub struct Stop {
    /// Unique stop name
    pub name: String,
    /// Stop coordinates, `x` is longitude and `y` is latitude
    pub geometry: Point<f64>,
}

impl Stop {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            geometry: Point::new(longitude, latitude),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.y()
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.x()
    }

    /// Great-circle distance to another stop in meters
    pub fn geo_distance_to(&self, other: &Stop) -> f64 {
        if self.geometry == other.geometry {
            return 0.0;
        }
        Haversine.distance(self.geometry, other.geometry)
    }
}

/// How a bus travels along its stop list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    /// The stop list is ridden once in declared order; the last stop repeats the first
    Circular,
    /// The stop list is ridden forward, then backward to the first stop
    Reverse,
}

/// Named bus route over catalogue stops
#[derive(Debug, Clone)]
pub struct BusRoute {
    /// Unique route (bus) name
    pub name: String,
    /// Stops in declared order
    pub stops: Vec<StopId>,
    pub kind: RouteKind,
}

impl BusRoute {
    /// Number of stops visited by one full traversal
    pub fn stops_on_route(&self) -> usize {
        match self.kind {
            RouteKind::Circular => self.stops.len(),
            RouteKind::Reverse => self.stops.len() * 2 - 1,
        }
    }

    pub fn unique_stop_count(&self) -> usize {
        let mut unique = self.stops.clone();
        unique.sort_unstable();
        unique.dedup();
        unique.len()
    }

    /// Independent directions a bus rides along this route.
    ///
    /// Circular routes have a single direction, reverse routes have the
    /// declared order and its mirror.
    pub fn directions(&self) -> Vec<Vec<StopId>> {
        match self.kind {
            RouteKind::Circular => vec![self.stops.clone()],
            RouteKind::Reverse => {
                let backward = self.stops.iter().rev().copied().collect();
                vec![self.stops.clone(), backward]
            }
        }
    }
}

/// Statistics reported for a bus route
#[derive(Debug, Clone, PartialEq)]
pub struct RouteInfo {
    /// Stops on the full traversal, counting repeats
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road network length in meters
    pub road_length: u64,
    /// Great-circle length in meters
    pub geo_length: f64,
    /// `road_length / geo_length`, zero when the geographic length is zero
    pub curvature: f64,
}
