use approx::assert_relative_eq;
use busnet_core::prelude::*;

/// Stops A(0,0), B(0,1), C(0,2) on one circular bus "1"
fn abc_catalogue() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("A", 0.0, 0.0);
    catalogue.add_stop("B", 0.0, 1.0);
    catalogue.add_stop("C", 0.0, 2.0);
    catalogue.set_distance("A", "B", 100).unwrap();
    catalogue.set_distance("B", "A", 100).unwrap();
    catalogue.set_distance("B", "C", 200).unwrap();
    catalogue.set_distance("C", "B", 200).unwrap();
    catalogue.set_distance("C", "A", 300).unwrap();
    catalogue
        .add_route("1", &["A", "B", "C", "A"], RouteKind::Circular)
        .unwrap();
    catalogue
}

#[test]
fn boarding_once_covers_the_whole_ride() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    let itinerary = router.build_route("A", "C").unwrap().unwrap();

    assert_relative_eq!(itinerary.total_time, 5.3, epsilon = 1e-9);
    assert_eq!(itinerary.items.len(), 2);
    match &itinerary.items[0] {
        ItineraryItem::Wait { stop_name, time } => {
            assert_eq!(stop_name, "A");
            assert_relative_eq!(*time, 5.0);
        }
        other => panic!("expected a wait at A, got {other:?}"),
    }
    match &itinerary.items[1] {
        ItineraryItem::Bus {
            bus,
            span_count,
            time,
        } => {
            assert_eq!(bus, "1");
            assert_eq!(*span_count, 2);
            assert_relative_eq!(*time, 0.3, epsilon = 1e-9);
        }
        other => panic!("expected bus 1, got {other:?}"),
    }
}

#[test]
fn total_time_is_the_sum_of_items() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    for (from, to) in [("A", "B"), ("B", "A"), ("C", "B"), ("B", "C")] {
        let itinerary = router.build_route(from, to).unwrap().unwrap();
        let sum: f64 = itinerary.items.iter().map(ItineraryItem::time).sum();
        assert_relative_eq!(itinerary.total_time, sum, epsilon = 1e-9);
    }
}

#[test]
fn circular_bus_continues_past_the_terminal() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    // C -> A -> B needs a change of direction at A: two boardings
    let itinerary = router.build_route("C", "B").unwrap().unwrap();
    assert_relative_eq!(itinerary.total_time, 5.0 + 0.3 + 5.0 + 0.1, epsilon = 1e-9);
    assert_eq!(itinerary.bus_count(), 2);
    assert_eq!(itinerary.transfers(), 1);
}

#[test]
fn every_stop_reaches_itself_instantly() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    for (_, stop) in catalogue.stops() {
        let itinerary = router.build_route(&stop.name, &stop.name).unwrap().unwrap();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.total_time, 0.0);
    }
}

#[test]
fn disconnected_networks_have_no_route() {
    let mut catalogue = abc_catalogue();
    catalogue.add_stop("X", 10.0, 10.0);
    catalogue.add_stop("Y", 10.0, 10.1);
    catalogue.set_distance("X", "Y", 500).unwrap();
    catalogue
        .add_route("2", &["X", "Y"], RouteKind::Reverse)
        .unwrap();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    assert_eq!(router.build_route("A", "X"), Ok(None));
    assert_eq!(router.build_route("Y", "C"), Ok(None));
    assert!(router.build_route("X", "Y").unwrap().is_some());
}

#[test]
fn unknown_stop_is_not_a_missing_route() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    assert_eq!(
        router.build_route("A", "Nowhere"),
        Err(RoutingError::UnknownStop("Nowhere".to_string()))
    );
    assert_eq!(
        router.build_route("Nowhere", "A"),
        Err(RoutingError::UnknownStop("Nowhere".to_string()))
    );
}

#[test]
fn reverse_route_rides_back_with_its_own_distances() {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("X", 0.0, 0.0);
    catalogue.add_stop("Y", 0.0, 0.01);
    catalogue.add_stop("Z", 0.0, 0.02);
    catalogue.set_distance("X", "Y", 1000).unwrap();
    catalogue.set_distance("Y", "Z", 1000).unwrap();
    catalogue.set_distance("Z", "Y", 4000).unwrap();
    catalogue
        .add_route("r", &["X", "Y", "Z"], RouteKind::Reverse)
        .unwrap();

    let info = catalogue.route_info("r").unwrap().unwrap();
    assert_eq!(info.stop_count, 5);
    assert_eq!(info.unique_stop_count, 3);

    let router = TransitRouter::new(&catalogue, RoutingSettings::new(1.0, 60.0)).unwrap();
    let there = router.build_route("X", "Z").unwrap().unwrap();
    let back = router.build_route("Z", "X").unwrap().unwrap();
    assert_relative_eq!(there.total_time, 1.0 + 2.0, epsilon = 1e-9);
    assert_relative_eq!(back.total_time, 1.0 + 5.0, epsilon = 1e-9);
}

#[test]
fn first_declared_bus_wins_an_exact_tie() {
    let mut catalogue = Catalogue::new();
    catalogue.add_stop("A", 0.0, 0.0);
    catalogue.add_stop("B", 0.0, 1.0);
    catalogue.set_distance("A", "B", 1000).unwrap();
    catalogue.add_route("1", &["A", "B"], RouteKind::Reverse).unwrap();
    catalogue.add_route("2", &["A", "B"], RouteKind::Reverse).unwrap();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(1.0, 60.0)).unwrap();

    for (from, to) in [("A", "B"), ("B", "A")] {
        let itinerary = router.build_route(from, to).unwrap().unwrap();
        assert_relative_eq!(itinerary.total_time, 2.0, epsilon = 1e-9);
        match &itinerary.items[..] {
            [ItineraryItem::Wait { .. }, ItineraryItem::Bus { bus, span_count, .. }] => {
                assert_eq!(bus, "1");
                assert_eq!(*span_count, 1);
            }
            other => panic!("expected a wait and one ride, got {other:?}"),
        }
    }
}

#[test]
fn last_distance_set_for_a_direction_wins() {
    let mut catalogue = abc_catalogue();
    catalogue.set_distance("A", "C", 700).unwrap();
    catalogue.set_distance("C", "A", 900).unwrap();
    catalogue.set_distance("A", "C", 650).unwrap();

    assert_eq!(catalogue.distance("A", "C").unwrap(), 650);
    assert_eq!(catalogue.distance("C", "A").unwrap(), 900);
    // Unrelated pairs are untouched
    assert_eq!(catalogue.distance("A", "B").unwrap(), 100);
}

#[test]
fn router_is_shareable_between_threads() {
    let catalogue = abc_catalogue();
    let router = TransitRouter::new(&catalogue, RoutingSettings::new(5.0, 60.0)).unwrap();

    std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|_| scope.spawn(|| router.build_route("A", "C").unwrap().unwrap().total_time))
            .collect::<Vec<_>>();
        for handle in handles {
            assert_relative_eq!(handle.join().unwrap(), 5.3, epsilon = 1e-9);
        }
    });
}
