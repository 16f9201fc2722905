use super::*;
use crate::graph::types::{DisplayAttrs, EdgeAttrs};
use crate::graph::Graph;

fn build(vertices: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    let mut graph = Graph::new();
    for id in vertices {
        graph.add_vertex(*id, DisplayAttrs::default()).unwrap();
    }
    for (u, v, w) in edges {
        graph.add_edge(u, v, *w, EdgeAttrs::default()).unwrap();
    }
    graph
}

fn id(graph: &Graph, name: &str) -> VertexId {
    graph.find_vertex(name).unwrap()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        distance: 1,
        vertex: VertexId::new(3),
    };
    let entry2 = HeapEntry {
        distance: 2,
        vertex: VertexId::new(0),
    };
    let entry3 = HeapEntry {
        distance: 1,
        vertex: VertexId::new(1),
    };

    // Lower distance wins regardless of vertex
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to vertex order
    assert_eq!(entry3.cmp(&entry1), std::cmp::Ordering::Less);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry2));
    heap.push(Reverse(entry1));
    heap.push(Reverse(entry3));
    assert_eq!(heap.pop().unwrap().0, entry3);
    assert_eq!(heap.pop().unwrap().0, entry1);
}

#[test]
fn test_four_cycle_prefers_short_side() {
    let graph = build(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 5)],
    );
    let map = dijkstra(&graph, id(&graph, "A")).unwrap();

    assert_eq!(map.distance(id(&graph, "A")), Some(0));
    assert_eq!(map.distance(id(&graph, "B")), Some(1));
    assert_eq!(map.distance(id(&graph, "C")), Some(2));
    assert_eq!(map.distance(id(&graph, "D")), Some(3));
    assert_eq!(map.predecessor(id(&graph, "C")), Some(id(&graph, "B")));
    assert_eq!(map.predecessor(id(&graph, "D")), Some(id(&graph, "C")));
    assert_eq!(map.predecessor(id(&graph, "A")), None);
}

#[test]
fn test_unreachable_vertices_have_no_distance() {
    let graph = build(&["X", "Y", "Z"], &[("Y", "Z", 2)]);
    let map = dijkstra(&graph, id(&graph, "X")).unwrap();

    assert_eq!(map.len(), 3);
    assert!(map.is_reachable(id(&graph, "X")));
    assert!(!map.is_reachable(id(&graph, "Y")));
    assert_eq!(map.predecessor(id(&graph, "Y")), None);
    assert_eq!(map.distance(id(&graph, "Z")), None);
}

#[test]
fn test_negative_weight_rejected() {
    let graph = build(&["a", "b", "c"], &[("a", "b", 1), ("b", "c", -2)]);
    let err = dijkstra(&graph, id(&graph, "a")).unwrap_err();
    match err {
        PathmarkError::NegativeWeight { from, to, weight } => {
            assert_eq!(from, "b");
            assert_eq!(to, "c");
            assert_eq!(weight, -2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_zero_weight_edges() {
    let graph = build(&["a", "b", "c"], &[("a", "b", 0), ("b", "c", 0), ("a", "c", 1)]);
    let map = dijkstra(&graph, id(&graph, "a")).unwrap();
    assert_eq!(map.distance(id(&graph, "c")), Some(0));
    assert_eq!(map.predecessor(id(&graph, "c")), Some(id(&graph, "b")));
}

#[test]
fn test_parallel_edges_use_lightest() {
    let graph = build(&["a", "b"], &[("a", "b", 9), ("b", "a", 4), ("a", "b", 6)]);
    let map = dijkstra(&graph, id(&graph, "a")).unwrap();
    assert_eq!(map.distance(id(&graph, "b")), Some(4));
}

#[test]
fn test_self_loop_ignored() {
    let graph = build(&["a", "b"], &[("a", "a", 0), ("a", "b", 2)]);
    let map = dijkstra(&graph, id(&graph, "a")).unwrap();
    assert_eq!(map.predecessor(id(&graph, "a")), None);
    assert_eq!(map.distance(id(&graph, "b")), Some(2));
}

#[test]
fn test_ties_resolved_deterministically() {
    // Two equal-cost routes to d; the one through the earlier vertex wins
    let graph = build(
        &["a", "b", "c", "d"],
        &[("a", "c", 1), ("a", "b", 1), ("b", "d", 1), ("c", "d", 1)],
    );
    let first = dijkstra(&graph, id(&graph, "a")).unwrap();
    let second = dijkstra(&graph, id(&graph, "a")).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.predecessor(id(&graph, "d")), Some(id(&graph, "b")));
}

#[test]
fn test_source_out_of_range() {
    let graph = build(&["a"], &[]);
    let err = dijkstra(&graph, VertexId::new(5)).unwrap_err();
    assert!(matches!(err, PathmarkError::UnknownVertex { .. }));
}

#[test]
fn test_distances_beyond_u64_stay_exact() {
    let max = i64::MAX;
    let graph = build(
        &["s", "r", "w", "p", "q", "t"],
        &[
            ("s", "r", max),
            ("r", "w", max),
            ("w", "t", max),
            ("s", "p", max),
            ("p", "q", max),
            ("q", "t", 1),
        ],
    );
    let map = dijkstra(&graph, id(&graph, "s")).unwrap();

    let max = u128::from(max.unsigned_abs());
    assert_eq!(map.distance(id(&graph, "w")), Some(2 * max));
    assert_eq!(map.distance(id(&graph, "t")), Some(2 * max + 1));
    assert_eq!(2 * max + 1, u128::from(u64::MAX));

    let path = crate::graph::reconstruct_path(&graph, &map, id(&graph, "t")).unwrap();
    let names: Vec<&str> = path
        .vertices()
        .iter()
        .map(|&v| graph.vertex_name(v))
        .collect();
    assert_eq!(names, ["s", "p", "q", "t"]);
}

#[test]
fn test_heavy_route_loses_to_lighter_overflowing_one() {
    // Both routes exceed u64::MAX; only exact sums separate them
    let max = i64::MAX;
    let graph = build(
        &["a", "b", "c", "d", "e", "z"],
        &[
            ("a", "b", max),
            ("b", "c", max),
            ("c", "z", max),
            ("a", "d", max),
            ("d", "e", max),
            ("e", "z", max - 1),
        ],
    );
    let map = dijkstra(&graph, id(&graph, "a")).unwrap();

    let max = u128::from(max.unsigned_abs());
    assert_eq!(map.distance(id(&graph, "z")), Some(3 * max - 1));
    assert_eq!(map.predecessor(id(&graph, "z")), Some(id(&graph, "e")));
}
