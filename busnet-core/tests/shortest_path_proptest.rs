use busnet_core::prelude::*;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Network {
    stop_count: usize,
    /// Road distance for every ordered pair, row-major
    distances: Vec<u32>,
    routes: Vec<(Vec<usize>, bool)>,
    wait: f64,
}

fn network() -> impl Strategy<Value = Network> {
    (2usize..=5).prop_flat_map(|stop_count| {
        let route = (
            prop::collection::vec(0..stop_count, 2..=4),
            any::<bool>(),
        );
        (
            Just(stop_count),
            prop::collection::vec(1u32..5000, stop_count * stop_count),
            prop::collection::vec(route, 1..=3),
            0.0f64..10.0,
        )
            .prop_map(|(stop_count, distances, routes, wait)| Network {
                stop_count,
                distances,
                routes,
                wait,
            })
    })
}

fn stop_name(idx: usize) -> String {
    format!("S{idx}")
}

fn build_catalogue(network: &Network) -> Catalogue {
    let mut catalogue = Catalogue::new();
    for idx in 0..network.stop_count {
        let longitude = f64::from(u32::try_from(idx).unwrap()) * 0.01;
        catalogue.add_stop(&stop_name(idx), 0.0, longitude);
    }
    for from in 0..network.stop_count {
        for to in 0..network.stop_count {
            let meters = network.distances[from * network.stop_count + to];
            catalogue
                .set_distance(&stop_name(from), &stop_name(to), meters)
                .unwrap();
        }
    }
    for (idx, (stops, circular)) in network.routes.iter().enumerate() {
        let names = stops.iter().map(|&s| stop_name(s)).collect::<Vec<_>>();
        let kind = if *circular {
            RouteKind::Circular
        } else {
            RouteKind::Reverse
        };
        catalogue.add_route(&format!("bus{idx}"), &names, kind).unwrap();
    }
    catalogue
}

/// Cheapest simple path by exhaustive enumeration
fn brute_force(graph: &TransitGraph, from: NodeIndex, to: NodeIndex) -> Option<f64> {
    fn walk(
        graph: &TransitGraph,
        node: NodeIndex,
        to: NodeIndex,
        cost: f64,
        visited: &mut [bool],
        best: &mut Option<f64>,
    ) {
        if node == to {
            *best = Some(best.map_or(cost, |b: f64| b.min(cost)));
            return;
        }
        for edge in graph.inner().edges(node) {
            let next = edge.target();
            if visited[next.index()] {
                continue;
            }
            visited[next.index()] = true;
            walk(graph, next, to, cost + edge.weight().time(), visited, best);
            visited[next.index()] = false;
        }
    }

    let mut visited = vec![false; graph.vertex_count()];
    visited[from.index()] = true;
    let mut best = None;
    walk(graph, from, to, 0.0, &mut visited, &mut best);
    best
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn router_matches_exhaustive_search(network in network()) {
        let catalogue = build_catalogue(&network);
        let settings = RoutingSettings::new(network.wait, 40.0);
        let router = TransitRouter::new(&catalogue, settings).unwrap();
        let graph = router.graph();

        for from in 0..network.stop_count {
            for to in 0..network.stop_count {
                let (from_name, to_name) = (stop_name(from), stop_name(to));
                let result = router.build_route(&from_name, &to_name);

                if from == to {
                    prop_assert_eq!(result, Ok(Some(Itinerary::empty())));
                    continue;
                }

                let from_vertices = graph.vertices_of(StopId(from));
                let to_vertices = graph.vertices_of(StopId(to));
                let (Some(source), Some(target)) = (from_vertices, to_vertices) else {
                    prop_assert!(matches!(result, Err(RoutingError::UnknownStop(_))));
                    continue;
                };

                let expected = brute_force(graph, source.arrival, target.arrival);
                match (result.unwrap(), expected) {
                    (None, None) => {}
                    (Some(itinerary), Some(best)) => {
                        prop_assert!((itinerary.total_time - best).abs() < 1e-9);
                        let sum: f64 = itinerary.items.iter().map(ItineraryItem::time).sum();
                        prop_assert!((itinerary.total_time - sum).abs() < 1e-9);
                        prop_assert!(matches!(
                            itinerary.items.first(),
                            Some(ItineraryItem::Wait { .. })
                        ), "itinerary should start with a Wait item");
                    }
                    (found, expected) => {
                        prop_assert!(
                            false,
                            "router found {found:?}, exhaustive search {expected:?}"
                        );
                    }
                }
            }
        }
    }
}
