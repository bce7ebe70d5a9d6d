use super::*;
use crate::error::CampusError;
use crate::graph::types::RouteLimits;
use crate::graph::LocationGraph;

fn id(name: &str) -> LocationId {
    LocationId::parse(name).unwrap()
}

fn ids(names: &[&str]) -> Vec<LocationId> {
    names.iter().map(|n| id(n)).collect()
}

/// A–B(4), B–C(3), A–C(10), C–D(2), plus isolated E
fn sample_graph() -> LocationGraph {
    let mut graph = LocationGraph::new();
    for name in ["A", "B", "C", "D", "E"] {
        graph.add_location(name).unwrap();
    }
    graph.add_walkway("A", "B", 4.0).unwrap();
    graph.add_walkway("B", "C", 3.0).unwrap();
    graph.add_walkway("A", "C", 10.0).unwrap();
    graph.add_walkway("C", "D", 2.0).unwrap();
    graph
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let a = id("a");
    let b = id("b");
    let entry1 = HeapEntry {
        location: &a,
        distance: Distance::new(1.0).unwrap(),
        seq: 0,
    };
    let entry2 = HeapEntry {
        location: &b,
        distance: Distance::new(2.0).unwrap(),
        seq: 1,
    };
    let entry3 = HeapEntry {
        location: &b,
        distance: Distance::new(1.0).unwrap(),
        seq: 2,
    };

    // Lower distance compares as less
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to push order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    // Min-heap pops the earliest of equal distances first
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry3.clone()));
    heap.push(Reverse(entry2));
    heap.push(Reverse(entry1));
    let Reverse(first) = heap.pop().unwrap();
    assert_eq!(first.seq, 0);
    let Reverse(second) = heap.pop().unwrap();
    assert_eq!(second.seq, 2);
}

#[test]
fn test_shortest_path_prefers_lower_total() {
    let graph = sample_graph();
    let result = dijkstra_shortest_path(&graph, &id("a"), &id("d")).unwrap();

    let route = result.route().unwrap();
    assert_eq!(route.locations, ids(&["a", "b", "c", "d"]));
    assert_eq!(route.distance.value(), 9.0);
}

#[test]
fn test_shortest_path_distance_matches_edge_sum() {
    let graph = sample_graph();
    let result = dijkstra_shortest_path(&graph, &id("d"), &id("a")).unwrap();
    let route = result.route().unwrap();

    let sum: Distance = route
        .locations
        .windows(2)
        .map(|pair| graph.walkway(&pair[0], &pair[1]).unwrap())
        .sum();
    assert_eq!(sum, route.distance);
    assert_eq!(route.locations, ids(&["d", "c", "b", "a"]));
}

#[test]
fn test_shortest_path_unreachable() {
    let graph = sample_graph();
    let result = dijkstra_shortest_path(&graph, &id("a"), &id("e")).unwrap();
    assert_eq!(result, PathResult::Unreachable);
    assert!(!result.is_found());
}

#[test]
fn test_shortest_path_same_endpoint() {
    let graph = sample_graph();
    for name in ["a", "e"] {
        let result = dijkstra_shortest_path(&graph, &id(name), &id(name)).unwrap();
        let route = result.route().unwrap();
        assert_eq!(route.locations, ids(&[name]));
        assert_eq!(route.distance, Distance::ZERO);
    }
}

#[test]
fn test_shortest_path_unknown_endpoint() {
    let graph = sample_graph();
    let err = dijkstra_shortest_path(&graph, &id("a"), &id("zz")).unwrap_err();
    assert!(matches!(err, CampusError::UnknownLocation { ref id } if id == "zz"));

    let err = dijkstra_shortest_path(&graph, &id("zz"), &id("a")).unwrap_err();
    assert!(matches!(err, CampusError::UnknownLocation { .. }));
}

#[test]
fn test_ties_break_by_discovery_order() {
    // Two equal-cost diamonds; the first-discovered branch wins
    let mut graph = LocationGraph::new();
    for name in ["a", "b", "c", "d"] {
        graph.add_location(name).unwrap();
    }
    graph.add_walkway("a", "b", 1.0).unwrap();
    graph.add_walkway("a", "c", 1.0).unwrap();
    graph.add_walkway("b", "d", 1.0).unwrap();
    graph.add_walkway("c", "d", 1.0).unwrap();

    for _ in 0..5 {
        let result = dijkstra_shortest_path(&graph, &id("a"), &id("d")).unwrap();
        assert_eq!(result.route().unwrap().locations, ids(&["a", "b", "d"]));
    }
}

#[test]
fn test_zero_weight_walkways() {
    let mut graph = LocationGraph::new();
    for name in ["a", "b", "c"] {
        graph.add_location(name).unwrap();
    }
    graph.add_walkway("a", "b", 0.0).unwrap();
    graph.add_walkway("b", "c", 0.0).unwrap();
    graph.add_walkway("a", "c", 1.0).unwrap();

    let result = dijkstra_shortest_path(&graph, &id("a"), &id("c")).unwrap();
    let route = result.route().unwrap();
    assert_eq!(route.locations, ids(&["a", "b", "c"]));
    assert_eq!(route.distance, Distance::ZERO);
}

#[test]
fn test_distances_in_settle_order() {
    let graph = sample_graph();
    let distances = dijkstra_distances(&graph, &id("a")).unwrap();

    let expected = [("a", 0.0), ("b", 4.0), ("c", 7.0), ("d", 9.0)];
    assert_eq!(distances.len(), expected.len());
    for ((location, distance), (name, value)) in distances.iter().zip(expected) {
        assert_eq!(*location, id(name));
        assert_eq!(distance.value(), value);
    }
}

#[test]
fn test_distances_from_isolated_location() {
    let graph = sample_graph();
    let distances = dijkstra_distances(&graph, &id("e")).unwrap();
    assert_eq!(distances, vec![(id("e"), Distance::ZERO)]);
}

/// Cross-check Dijkstra against the minimum over every simple route
#[test]
fn test_shortest_path_matches_brute_force() {
    let mut graph = LocationGraph::new();
    let names = ["p", "q", "r", "s", "t", "u"];
    for name in names {
        graph.add_location(name).unwrap();
    }
    for (a, b, d) in [
        ("p", "q", 7.0),
        ("p", "r", 9.0),
        ("p", "u", 14.0),
        ("q", "r", 10.0),
        ("q", "s", 15.0),
        ("r", "s", 11.0),
        ("r", "u", 2.0),
        ("s", "t", 6.0),
        ("t", "u", 9.0),
    ] {
        graph.add_walkway(a, b, d).unwrap();
    }

    for from in names {
        for to in names {
            let result = dijkstra_shortest_path(&graph, &id(from), &id(to)).unwrap();
            let routes = crate::graph::algos::enumerate_routes(
                &graph,
                &id(from),
                &id(to),
                RouteLimits::unrestricted(),
            )
            .unwrap();

            let best = routes.shortest().unwrap();
            let found = result.route().unwrap();
            assert_eq!(
                found.distance, best.distance,
                "dijkstra disagrees with brute force for {from} -> {to}"
            );
        }
    }
}
