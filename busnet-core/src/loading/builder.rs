use itertools::Itertools;
use log::{debug, info};

use super::config::RoutingSettings;
use crate::model::{EdgeDescriptor, StopVertices};
use crate::{Catalogue, Error, RouteId, StopId, TransitGraph};

/// Builds the routing graph for a fully loaded catalogue
///
/// Every stop served by a route gets an arrival and a departure vertex joined
/// by a wait-edge. Every route direction gets one ride-edge per ordered pair
/// of its stops, so a rider can stay on a bus through several stops without
/// paying the wait again.
///
/// # Errors
///
/// Returns an error if the settings are invalid or a route uses a pair of
/// consecutive stops without a known road distance. No partial graph is
/// produced.
pub fn build_transit_graph(
    catalogue: &Catalogue,
    settings: &RoutingSettings,
) -> Result<TransitGraph, Error> {
    settings.validate()?;

    info!(
        "Building routing graph for {} stops and {} bus routes",
        catalogue.stop_count(),
        catalogue.route_count()
    );

    let mut graph = TransitGraph::with_stop_capacity(catalogue.stop_count());
    add_stop_vertices(&mut graph, catalogue, settings);

    for (route_id, route) in catalogue.routes() {
        for direction in route.directions() {
            add_ride_edges(&mut graph, catalogue, settings, route_id, &direction)?;
        }
        debug!("Added ride edges for bus {}", route.name);
    }

    info!(
        "Routing graph built: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn add_stop_vertices(graph: &mut TransitGraph, catalogue: &Catalogue, settings: &RoutingSettings) {
    for (stop_id, _) in catalogue.stops() {
        if catalogue.is_stop_served(stop_id) {
            graph.add_stop(stop_id, settings.bus_wait_time);
        }
    }
}

/// Adds a ride-edge for every pair `(i, j)`, `i < j`, of one route direction
fn add_ride_edges(
    graph: &mut TransitGraph,
    catalogue: &Catalogue,
    settings: &RoutingSettings,
    route: RouteId,
    direction: &[StopId],
) -> Result<(), Error> {
    // hops[k] is the road distance from direction[k] to direction[k + 1]
    let hops = direction
        .iter()
        .tuple_windows()
        .map(|(from, to)| catalogue.distance_between(*from, *to))
        .collect::<Result<Vec<_>, _>>()?;

    let vertices = direction
        .iter()
        .map(|&stop| stop_vertices(graph, catalogue, stop))
        .collect::<Result<Vec<_>, _>>()?;

    for (start, from) in vertices.iter().enumerate() {
        let mut meters = 0_u64;
        for (end, to) in vertices.iter().enumerate().skip(start + 1) {
            meters += u64::from(hops[end - 1]);
            graph.add_ride(
                *from,
                *to,
                EdgeDescriptor::Bus {
                    route,
                    span_count: end - start,
                    time: settings.travel_time(meters),
                },
            );
        }
    }

    Ok(())
}

fn stop_vertices(
    graph: &TransitGraph,
    catalogue: &Catalogue,
    stop: StopId,
) -> Result<StopVertices, Error> {
    graph
        .vertices_of(stop)
        .ok_or_else(|| Error::UnknownStopReference(catalogue.stop(stop).name.clone()))
}
