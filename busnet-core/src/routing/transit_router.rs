use log::trace;

use super::dijkstra::{dijkstra, shortest_path};
use super::itinerary::Itinerary;
use crate::loading::{RoutingSettings, build_transit_graph};
use crate::model::StopVertices;
use crate::{Catalogue, Error, Minutes, RoutingError, TransitGraph};

/// Fastest-itinerary queries over a loaded catalogue.
///
/// The graph is built once in [`TransitRouter::new`] and only read
/// afterwards, so one router can serve queries from many threads.
#[derive(Debug)]
pub struct TransitRouter<'c> {
    catalogue: &'c Catalogue,
    settings: RoutingSettings,
    graph: TransitGraph,
}

impl<'c> TransitRouter<'c> {
    /// Builds the routing graph for `catalogue`
    ///
    /// # Errors
    ///
    /// Fails on invalid settings or a route with a missing road distance.
    pub fn new(catalogue: &'c Catalogue, settings: RoutingSettings) -> Result<Self, Error> {
        let graph = build_transit_graph(catalogue, &settings)?;
        Ok(Self {
            catalogue,
            settings,
            graph,
        })
    }

    /// Fastest itinerary between two stops
    ///
    /// Returns `Ok(None)` when both stops are known but no bus connects them.
    /// A stop routed to itself yields an empty itinerary.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownStop`] if a stop is not in the catalogue or no
    /// route serves it.
    pub fn build_route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, RoutingError> {
        if from == to && self.catalogue.find_stop_id(from).is_some() {
            return Ok(Some(Itinerary::empty()));
        }

        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        // Start before the wait-edge of the origin so the first wait is paid
        let path = shortest_path(self.graph.inner(), source.arrival, target.arrival);
        trace!(
            "Route {from} -> {to}: {}",
            path.as_ref()
                .map_or_else(|| "unreachable".to_string(), |p| format!("{} min", p.total_weight))
        );

        Ok(path.map(|path| Itinerary::from_path(&path, &self.graph, self.catalogue)))
    }

    /// Travel time from a stop to every stop reachable from it, fastest first
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownStop`] if the stop has no vertices in the graph.
    pub fn travel_times_from(&self, from: &str) -> Result<Vec<(&'c str, Minutes)>, RoutingError> {
        let source = self.resolve(from)?;
        let tree = dijkstra(self.graph.inner(), source.arrival, None);

        let mut times = self
            .catalogue
            .stops()
            .filter_map(|(stop_id, stop)| {
                let vertices = self.graph.vertices_of(stop_id)?;
                let time = tree.distance_to(vertices.arrival)?;
                Some((stop.name.as_str(), time))
            })
            .collect::<Vec<_>>();
        times.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        Ok(times)
    }

    pub fn catalogue(&self) -> &'c Catalogue {
        self.catalogue
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &TransitGraph {
        &self.graph
    }

    fn resolve(&self, name: &str) -> Result<StopVertices, RoutingError> {
        self.catalogue
            .find_stop_id(name)
            .and_then(|id| self.graph.vertices_of(id))
            .ok_or_else(|| RoutingError::UnknownStop(name.to_string()))
    }
}
