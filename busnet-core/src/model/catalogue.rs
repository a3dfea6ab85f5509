//! Transit catalogue: stops, bus routes and road distances

use std::collections::BTreeSet;

use hashbrown::HashMap;
use itertools::Itertools;
use log::warn;

use super::types::{BusRoute, RouteInfo, RouteKind, Stop};
use crate::{Error, Meters, RouteId, StopId};

/// Owner of all stops, routes and road distances of a network.
///
/// Entities live in dense vectors and are referenced by [`StopId`] and
/// [`RouteId`] handles; names resolve to handles through separate indices.
/// The catalogue is filled once while loading and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    stops: Vec<Stop>,
    stop_index: HashMap<String, StopId>,
    routes: Vec<BusRoute>,
    route_index: HashMap<String, RouteId>,
    /// Routes through each stop, indexed by `StopId`
    stop_routes: Vec<BTreeSet<RouteId>>,
    distances: HashMap<(StopId, StopId), Meters>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stop, or returns the id of the stop already registered under `name`
    pub fn add_stop(&mut self, name: &str, latitude: f64, longitude: f64) -> StopId {
        if let Some(&id) = self.stop_index.get(name) {
            return id;
        }

        let id = StopId(self.stops.len());
        self.stops.push(Stop::new(name, latitude, longitude));
        self.stop_index.insert(name.to_string(), id);
        self.stop_routes.push(BTreeSet::new());
        id
    }

    /// Adds a bus route over already known stops
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStopReference`] if a stop name is not in the
    /// catalogue and [`Error::InvalidData`] if fewer than two stops are given.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: &str,
        stop_names: &[S],
        kind: RouteKind,
    ) -> Result<RouteId, Error> {
        if let Some(&id) = self.route_index.get(name) {
            warn!("Bus route {name} is already registered, ignoring duplicate");
            return Ok(id);
        }

        if stop_names.len() < 2 {
            return Err(Error::InvalidData(format!(
                "bus route {name} must have at least two stops, got {}",
                stop_names.len()
            )));
        }

        let stops = stop_names
            .iter()
            .map(|stop| self.stop_id(stop.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = RouteId(self.routes.len());
        for stop in &stops {
            self.stop_routes[stop.0].insert(id);
        }
        self.routes.push(BusRoute {
            name: name.to_string(),
            stops,
            kind,
        });
        self.route_index.insert(name.to_string(), id);
        Ok(id)
    }

    /// Records the road distance `from -> to`.
    ///
    /// The opposite direction is seeded with the same value unless it was
    /// set before; a later explicit `to -> from` overwrites the seed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStopReference`] if either stop is unknown.
    pub fn set_distance(&mut self, from: &str, to: &str, meters: Meters) -> Result<(), Error> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.distances.insert((from, to), meters);
        self.distances.entry((to, from)).or_insert(meters);
        Ok(())
    }

    /// Road distance between two stops by name
    ///
    /// # Errors
    ///
    /// [`Error::UnknownStopReference`] for unknown stops and
    /// [`Error::DistanceNotFound`] if no distance was recorded for the pair.
    pub fn distance(&self, from: &str, to: &str) -> Result<Meters, Error> {
        self.distance_between(self.stop_id(from)?, self.stop_id(to)?)
    }

    /// Road distance between two stops by id
    ///
    /// # Errors
    ///
    /// [`Error::DistanceNotFound`] if neither direction was recorded.
    pub fn distance_between(&self, from: StopId, to: StopId) -> Result<Meters, Error> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| Error::DistanceNotFound {
                from: self.stops[from.0].name.clone(),
                to: self.stops[to.0].name.clone(),
            })
    }

    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.stop_index.get(name).map(|id| &self.stops[id.0])
    }

    pub fn find_stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn find_route(&self, name: &str) -> Option<&BusRoute> {
        self.route_index.get(name).map(|id| &self.routes[id.0])
    }

    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    pub fn route(&self, id: RouteId) -> &BusRoute {
        &self.routes[id.0]
    }

    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(idx, stop)| (StopId(idx), stop))
    }

    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &BusRoute)> {
        self.routes
            .iter()
            .enumerate()
            .map(|(idx, route)| (RouteId(idx), route))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Whether at least one bus route passes through the stop
    pub fn is_stop_served(&self, id: StopId) -> bool {
        !self.stop_routes[id.0].is_empty()
    }

    /// Names of the routes through a stop, sorted and without repeats.
    ///
    /// `None` means the stop is unknown, an empty list means no bus serves it.
    pub fn routes_through_stop(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.find_stop_id(name)?;
        let mut names = self.stop_routes[id.0]
            .iter()
            .map(|route| self.routes[route.0].name.as_str())
            .collect::<Vec<_>>();
        names.sort_unstable();
        Some(names)
    }

    /// Statistics for a route, `None` if no route has this name
    ///
    /// # Errors
    ///
    /// [`Error::DistanceNotFound`] if a consecutive pair of stops has no road distance.
    pub fn route_info(&self, name: &str) -> Result<Option<RouteInfo>, Error> {
        let Some(route) = self.find_route(name) else {
            return Ok(None);
        };

        let mut road_length = 0_u64;
        for direction in route.directions() {
            for (from, to) in direction.iter().tuple_windows() {
                road_length += u64::from(self.distance_between(*from, *to)?);
            }
        }

        let mut geo_length: f64 = route
            .stops
            .iter()
            .tuple_windows()
            .map(|(from, to)| self.stop(*from).geo_distance_to(self.stop(*to)))
            .sum();
        if route.kind == RouteKind::Reverse {
            geo_length *= 2.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let curvature = if geo_length > 0.0 {
            road_length as f64 / geo_length
        } else {
            0.0
        };

        Ok(Some(RouteInfo {
            stop_count: route.stops_on_route(),
            unique_stop_count: route.unique_stop_count(),
            road_length,
            geo_length,
            curvature,
        }))
    }

    fn stop_id(&self, name: &str) -> Result<StopId, Error> {
        self.find_stop_id(name)
            .ok_or_else(|| Error::UnknownStopReference(name.to_string()))
    }
}
