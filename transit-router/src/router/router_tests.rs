//! End-to-end tests for route queries.

use super::*;
use crate::catalogue::Catalogue;
use crate::domain::Coordinates;

fn stops(catalogue: &mut Catalogue, names: &[&str]) {
    for (i, name) in names.iter().enumerate() {
        catalogue
            .add_stop(name, Coordinates::new(0.0, i as f64 * 0.01))
            .unwrap();
    }
}

fn wait(stop: &str, time: f64) -> RouteItem {
    RouteItem::Wait {
        stop_name: stop.to_string(),
        time,
    }
}

fn bus_of(item: &RouteItem) -> (&str, usize) {
    match item {
        RouteItem::Bus {
            bus, span_count, ..
        } => (bus.as_str(), *span_count),
        RouteItem::Wait { .. } => panic!("expected a ride, got {item:?}"),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Three stops on one round-trip bus: A -> B -> C, 1000 m per hop.
fn line_abc() -> Catalogue {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "C"]);
    catalogue.add_distance("A", "B", 1000).unwrap();
    catalogue.add_distance("B", "C", 1000).unwrap();
    catalogue.add_bus("1", &["A", "B", "C"], true).unwrap();
    catalogue
}

#[test]
fn rides_through_without_reboarding() {
    let router = line_abc()
        .finalize(RoutingSettings::new(5.0, 30.0))
        .unwrap();

    let route = router.get_route("A", "C").unwrap();

    assert_eq!(route.items.len(), 2);
    assert_eq!(route.items[0], wait("A", 5.0));
    assert_eq!(bus_of(&route.items[1]), ("1", 2));
    // 30 km/h is 500 m/min
    assert_close(route.items[1].time(), 4.0);
    assert_close(route.total_time.unwrap(), 9.0);
}

#[test]
fn same_stop_is_free() {
    let router = line_abc()
        .finalize(RoutingSettings::new(5.0, 30.0))
        .unwrap();

    for stop in ["A", "B", "C"] {
        let route = router.get_route(stop, stop).unwrap();
        assert_eq!(route, RouteInfo::same_stop());
    }
}

#[test]
fn unknown_stop_is_not_found() {
    let router = line_abc()
        .finalize(RoutingSettings::new(5.0, 30.0))
        .unwrap();

    assert_eq!(
        router.get_route("A", "Z"),
        Err(RouterError::StopNotFound("Z".into()))
    );
    assert_eq!(
        router.get_route("Z", "A"),
        Err(RouterError::StopNotFound("Z".into()))
    );
}

#[test]
fn roundtrip_cannot_ride_backwards() {
    let router = line_abc()
        .finalize(RoutingSettings::new(5.0, 30.0))
        .unwrap();

    let route = router.get_route("C", "A").unwrap();
    assert_eq!(route, RouteInfo::unreachable());
}

#[test]
fn disconnected_buses_are_unreachable() {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "X", "Y", "Lonely"]);
    catalogue.add_distance("A", "B", 500).unwrap();
    catalogue.add_distance("X", "Y", 500).unwrap();
    catalogue.add_bus("east", &["A", "B"], false).unwrap();
    catalogue.add_bus("west", &["X", "Y"], false).unwrap();
    let router = catalogue.finalize(RoutingSettings::default()).unwrap();

    let route = router.get_route("A", "Y").unwrap();
    assert!(route.total_time.is_none());
    assert!(route.items.is_empty());

    let route = router.get_route("Lonely", "A").unwrap();
    assert_eq!(route, RouteInfo::unreachable());
}

#[test]
fn single_stop_bus_contributes_no_rides() {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B"]);
    catalogue.add_bus("solo", &["A"], false).unwrap();
    let router = catalogue.finalize(RoutingSettings::default()).unwrap();

    assert_eq!(router.graph().edge_count(), 2);
    assert_eq!(
        router.get_route("A", "B").unwrap(),
        RouteInfo::unreachable()
    );

    let stats = router.bus_stats("solo").unwrap();
    assert_eq!(stats.unique_stop_count, 1);
    assert_eq!(stats.route_length, 0);
}

#[test]
fn transfer_waits_again() {
    // A -1-> B -2-> C
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "C"]);
    catalogue.add_distance("A", "B", 3000).unwrap();
    catalogue.add_distance("B", "C", 1500).unwrap();
    catalogue.add_bus("first", &["A", "B"], false).unwrap();
    catalogue.add_bus("second", &["B", "C"], false).unwrap();
    let router = catalogue.finalize(RoutingSettings::new(4.0, 36.0)).unwrap();

    let route = router.get_route("A", "C").unwrap();
    // 36 km/h is 600 m/min
    assert_eq!(route.items.len(), 4);
    assert_eq!(route.items[0], wait("A", 4.0));
    assert_eq!(bus_of(&route.items[1]), ("first", 1));
    assert_close(route.items[1].time(), 5.0);
    assert_eq!(route.items[2], wait("B", 4.0));
    assert_eq!(bus_of(&route.items[3]), ("second", 1));
    assert_close(route.items[3].time(), 2.5);
    assert_close(route.total_time.unwrap(), 15.5);
    assert_eq!(route.boardings(), 2);
}

#[test]
fn linear_return_leg_uses_directed_distances() {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "C"]);
    catalogue.add_distance("A", "B", 1000).unwrap();
    catalogue.add_distance("B", "C", 1000).unwrap();
    catalogue.add_distance("C", "B", 2000).unwrap();
    catalogue.add_distance("B", "A", 2000).unwrap();
    catalogue.add_bus("line", &["A", "B", "C"], false).unwrap();
    let router = catalogue.finalize(RoutingSettings::new(1.0, 60.0)).unwrap();

    // 60 km/h is 1000 m/min
    let there = router.get_route("A", "C").unwrap();
    assert_close(there.total_time.unwrap(), 1.0 + 2.0);
    let back = router.get_route("C", "A").unwrap();
    assert_close(back.total_time.unwrap(), 1.0 + 4.0);
    assert_eq!(bus_of(&back.items[1]), ("line", 2));
}

#[test]
fn faster_bus_preferred_over_staying_on() {
    // "slow" meanders A -> M -> C; "fast" goes A -> C directly
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "M", "C"]);
    catalogue.add_distance("A", "M", 4000).unwrap();
    catalogue.add_distance("M", "C", 4000).unwrap();
    catalogue.add_distance("A", "C", 3000).unwrap();
    catalogue.add_bus("slow", &["A", "M", "C"], false).unwrap();
    catalogue.add_bus("fast", &["A", "C"], false).unwrap();
    let router = catalogue.finalize(RoutingSettings::new(2.0, 60.0)).unwrap();

    let route = router.get_route("A", "C").unwrap();
    assert_eq!(bus_of(&route.items[1]), ("fast", 1));
    assert_close(route.total_time.unwrap(), 5.0);
}

#[test]
fn roundtrip_passing_through_origin() {
    // A -> B -> C -> A loop; ride from B to A goes around through C
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "C"]);
    catalogue.add_distance("A", "B", 1000).unwrap();
    catalogue.add_distance("B", "C", 1000).unwrap();
    catalogue.add_distance("C", "A", 1000).unwrap();
    catalogue
        .add_bus("ring", &["A", "B", "C", "A"], true)
        .unwrap();
    let router = catalogue.finalize(RoutingSettings::new(1.0, 60.0)).unwrap();

    let route = router.get_route("B", "A").unwrap();
    assert_eq!(route.items[0], wait("B", 1.0));
    assert_eq!(bus_of(&route.items[1]), ("ring", 2));
    assert_close(route.total_time.unwrap(), 3.0);
}

#[test]
fn rebuilding_gives_identical_answers() {
    let build = || {
        let mut catalogue = Catalogue::new();
        stops(&mut catalogue, &["A", "B", "C", "D"]);
        catalogue.add_distance("A", "B", 1200).unwrap();
        catalogue.add_distance("B", "C", 800).unwrap();
        catalogue.add_distance("C", "D", 2500).unwrap();
        catalogue.add_distance("B", "D", 4000).unwrap();
        catalogue
            .add_bus("10", &["A", "B", "C", "D"], false)
            .unwrap();
        catalogue.add_bus("20", &["B", "D"], true).unwrap();
        catalogue.finalize(RoutingSettings::default()).unwrap()
    };
    let (first, second) = (build(), build());

    for from in ["A", "B", "C", "D"] {
        for to in ["A", "B", "C", "D"] {
            assert_eq!(first.get_route(from, to), second.get_route(from, to));
        }
    }
}

#[test]
fn very_long_rides_are_reconstructed() {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B", "C", "D", "E"]);
    catalogue.add_distance("A", "B", 4_000_000_000).unwrap();
    catalogue.add_distance("B", "C", 4_000_000_000).unwrap();
    catalogue.add_distance("C", "D", 4_000_000_000).unwrap();
    catalogue.add_distance("D", "E", 3_999_999_999).unwrap();
    catalogue
        .add_bus("far", &["A", "B", "C", "D", "E"], true)
        .unwrap();

    for velocity in 1..=120 {
        let settings = RoutingSettings::new(1.0, f64::from(velocity));
        let router = catalogue.clone().finalize(settings.clone()).unwrap();

        let route = router
            .get_route("A", "E")
            .unwrap_or_else(|e| panic!("velocity {velocity}: {e}"));
        assert_eq!(route.items.len(), 2);
        assert_eq!(bus_of(&route.items[1]), ("far", 4));
        assert_eq!(route.items[1].time(), settings.ride_time(15_999_999_999));
    }
}

#[test]
fn invalid_settings_fail_finalize() {
    let result = line_abc().finalize(RoutingSettings::new(5.0, -1.0));
    assert!(matches!(result, Err(RouterError::InvalidSettings(_))));
}

/// Two buses over the same stop pair and the same road distance.
fn twin_buses(tie_break: TieBreak) -> TransportRouter {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B"]);
    catalogue.add_distance("A", "B", 1000).unwrap();
    catalogue.add_bus("14", &["A", "B"], false).unwrap();
    catalogue.add_bus("22", &["A", "B"], false).unwrap();
    catalogue
        .finalize(RoutingSettings::new(1.0, 60.0).with_tie_break(tie_break))
        .unwrap()
}

#[test]
fn ambiguity_first_by_insertion() {
    let router = twin_buses(TieBreak::FirstByInsertion);
    for _ in 0..5 {
        let route = router.get_route("A", "B").unwrap();
        assert_eq!(bus_of(&route.items[1]), ("14", 1));
    }
}

#[test]
fn ambiguity_rejected() {
    let router = twin_buses(TieBreak::RejectAmbiguous);
    let err = router.get_route("A", "B").unwrap_err();
    assert_eq!(
        err,
        RouterError::AmbiguousRide {
            from: "A".into(),
            to: "B".into(),
            candidates: vec!["14 (span 1)".into(), "22 (span 1)".into()],
        }
    );
}

#[test]
fn ambiguity_shortest_span() {
    // "long" reaches B via X over the same 1000 m that "short" covers directly
    let build = |tie_break| {
        let mut catalogue = Catalogue::new();
        stops(&mut catalogue, &["A", "X", "B"]);
        catalogue.add_distance("A", "X", 500).unwrap();
        catalogue.add_distance("X", "B", 500).unwrap();
        catalogue.add_distance("A", "B", 1000).unwrap();
        catalogue.add_bus("long", &["A", "X", "B"], true).unwrap();
        catalogue.add_bus("short", &["A", "B"], true).unwrap();
        catalogue
            .finalize(RoutingSettings::new(1.0, 60.0).with_tie_break(tie_break))
            .unwrap()
    };

    let route = build(TieBreak::FirstByInsertion)
        .get_route("A", "B")
        .unwrap();
    assert_eq!(bus_of(&route.items[1]), ("long", 2));

    let route = build(TieBreak::ShortestSpan).get_route("A", "B").unwrap();
    assert_eq!(bus_of(&route.items[1]), ("short", 1));
}

#[test]
fn router_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportRouter>();

    let router = std::sync::Arc::new(
        line_abc()
            .finalize(RoutingSettings::new(5.0, 30.0))
            .unwrap(),
    );
    let expected = router.get_route("A", "C").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let router = router.clone();
            std::thread::spawn(move || router.get_route("A", "C").unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn missing_distance_counts_as_zero() {
    let mut catalogue = Catalogue::new();
    stops(&mut catalogue, &["A", "B"]);
    catalogue.add_bus("free", &["A", "B"], true).unwrap();
    let router = catalogue.finalize(RoutingSettings::new(3.0, 20.0)).unwrap();

    let route = router.get_route("A", "B").unwrap();
    assert_eq!(route.total_time, Some(3.0));
    assert_eq!(bus_of(&route.items[1]), ("free", 1));
    assert_eq!(route.items[1].time(), 0.0);
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_router() -> impl Strategy<Value = TransportRouter> {
        let distances = proptest::collection::vec(1u32..5000, 6);
        let buses = proptest::collection::vec(
            (proptest::collection::vec(0usize..6, 1..5), any::<bool>()),
            1..5,
        );
        (distances, buses).prop_map(|(distances, buses)| {
            let names = ["s0", "s1", "s2", "s3", "s4", "s5"];
            let mut catalogue = Catalogue::new();
            stops(&mut catalogue, &names);
            for (i, metres) in distances.iter().enumerate() {
                catalogue
                    .add_distance(names[i], names[(i + 1) % names.len()], *metres)
                    .unwrap();
            }
            for (b, (route, round)) in buses.iter().enumerate() {
                let route: Vec<&str> = route.iter().map(|&i| names[i]).collect();
                catalogue
                    .add_bus(&format!("bus{b}"), &route, *round)
                    .unwrap();
            }
            catalogue.finalize(RoutingSettings::new(2.0, 30.0)).unwrap()
        })
    }

    proptest! {
        /// Every reachable answer alternates wait/ride, starts at the origin and sums to its total
        #[test]
        fn answers_are_well_formed(router in arb_router(), a in 0usize..6, b in 0usize..6) {
            let (from, to) = (format!("s{a}"), format!("s{b}"));
            let route = router.get_route(&from, &to).unwrap();

            if a == b {
                prop_assert_eq!(route, RouteInfo::same_stop());
            } else if let Some(total) = route.total_time {
                prop_assert!(route.items.len() % 2 == 0);
                prop_assert_eq!(&route.items[0], &wait(&from, 2.0));
                for pair in route.items.chunks(2) {
                    prop_assert!(pair[0].is_wait());
                    prop_assert!(!pair[1].is_wait());
                }
                let sum: f64 = route.items.iter().map(RouteItem::time).sum();
                prop_assert!((sum - total).abs() < 1e-9);
            } else {
                prop_assert!(route.items.is_empty());
            }
        }
    }
}
