//! Phase 2 tests: BFS / DFS iterators and fewest-hop paths.

use std::collections::HashSet;

use matrix_network::graph::Graph;
use matrix_network::types::NetError;

/// Six rooms in two loops:
///
/// ```text
/// A - B
/// |   |
/// C - D
/// |
/// E - F
/// ```
fn rooms() -> Graph<&'static str> {
    let mut g = Graph::new();
    for label in ["A", "B", "C", "D", "E", "F"] {
        g.add_vertex(label).unwrap();
    }
    for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("C", "E"), ("E", "F")] {
        g.add_edge(&a, &b).unwrap();
    }
    g
}

// ==================== Breadth-First ====================

#[test]
fn test_bfs_golden_order() {
    let g = rooms();
    let order: Vec<_> = g.iter_bfs(&"A").unwrap().copied().collect();
    assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
}

#[test]
fn test_bfs_golden_order_from_middle() {
    let g = rooms();
    let order: Vec<_> = g.iter_bfs(&"D").unwrap().copied().collect();
    assert_eq!(order, vec!["D", "B", "C", "A", "E", "F"]);
}

#[test]
fn test_bfs_only_reachable() {
    let mut g = rooms();
    g.add_vertex("X").unwrap();
    g.add_vertex("Y").unwrap();
    g.add_edge(&"X", &"Y").unwrap();

    let from_a: HashSet<_> = g.iter_bfs(&"A").unwrap().copied().collect();
    assert_eq!(from_a.len(), 6);
    assert!(!from_a.contains("X"));

    let from_x: Vec<_> = g.iter_bfs(&"X").unwrap().copied().collect();
    assert_eq!(from_x, vec!["X", "Y"]);
}

#[test]
fn test_bfs_isolated_start() {
    let mut g = rooms();
    g.add_vertex("Z").unwrap();
    let order: Vec<_> = g.iter_bfs(&"Z").unwrap().collect();
    assert_eq!(order, vec![&"Z"]);
}

// ==================== Depth-First ====================

#[test]
fn test_dfs_golden_order() {
    let g = rooms();
    let order: Vec<_> = g.iter_dfs(&"A").unwrap().copied().collect();
    assert_eq!(order, vec!["A", "B", "D", "C", "E", "F"]);
}

#[test]
fn test_dfs_golden_order_from_middle() {
    let g = rooms();
    let order: Vec<_> = g.iter_dfs(&"D").unwrap().copied().collect();
    assert_eq!(order, vec!["D", "B", "A", "C", "E", "F"]);
}

#[test]
fn test_dfs_backtracks() {
    // Star around slot 0: DFS must come back to the hub for every spoke.
    let mut g = Graph::new();
    for i in 0..5u32 {
        g.add_vertex(i).unwrap();
    }
    for i in 1..5 {
        g.add_edge(&0, &i).unwrap();
    }
    let order: Vec<_> = g.iter_dfs(&0).unwrap().copied().collect();
    assert_eq!(order, vec![0, 1, 2, 3, 4]);
    let order: Vec<_> = g.iter_dfs(&3).unwrap().copied().collect();
    assert_eq!(order, vec![3, 0, 1, 2, 4]);
}

#[test]
fn test_dfs_path_graph_descends() {
    // 0 - 3 - 1 - 2: slot order differs from path order.
    let mut g = Graph::new();
    for i in 0..4u32 {
        g.add_vertex(i).unwrap();
    }
    g.add_edge(&0, &3).unwrap();
    g.add_edge(&3, &1).unwrap();
    g.add_edge(&1, &2).unwrap();
    let order: Vec<_> = g.iter_dfs(&0).unwrap().copied().collect();
    assert_eq!(order, vec![0, 3, 1, 2]);
    let order: Vec<_> = g.iter_bfs(&2).unwrap().copied().collect();
    assert_eq!(order, vec![2, 1, 3, 0]);
}

// ==================== Shared Iterator Behavior ====================

#[test]
fn test_traversals_visit_each_once() {
    let g = rooms();
    for start in g.vertices() {
        let bfs: Vec<_> = g.iter_bfs(start).unwrap().collect();
        let dfs: Vec<_> = g.iter_dfs(start).unwrap().collect();
        assert_eq!(bfs.len(), 6);
        assert_eq!(dfs.len(), 6);
        assert_eq!(bfs.iter().collect::<HashSet<_>>().len(), 6);
        assert_eq!(dfs.iter().collect::<HashSet<_>>().len(), 6);
        assert_eq!(bfs[0], start);
        assert_eq!(dfs[0], start);
    }
}

#[test]
fn test_traversal_is_lazy() {
    let g = rooms();
    let mut bfs = g.iter_bfs(&"A").unwrap();
    assert_eq!(bfs.next(), Some(&"A"));
    assert_eq!(bfs.next(), Some(&"B"));
    drop(bfs);

    let first_two: Vec<_> = g.iter_dfs(&"A").unwrap().take(2).collect();
    assert_eq!(first_two, vec![&"A", &"B"]);
}

#[test]
fn test_traversal_is_fused() {
    let g = rooms();
    let mut dfs = g.iter_dfs(&"F").unwrap();
    for _ in 0..6 {
        assert!(dfs.next().is_some());
    }
    assert_eq!(dfs.next(), None);
    assert_eq!(dfs.next(), None);

    let mut bfs = g.iter_bfs(&"F").unwrap();
    bfs.by_ref().for_each(drop);
    assert_eq!(bfs.next(), None);
}

#[test]
fn test_traversal_errors() {
    let empty: Graph<&str> = Graph::new();
    assert_eq!(empty.iter_bfs(&"A").err(), Some(NetError::EmptyStructure));
    assert_eq!(empty.iter_dfs(&"A").err(), Some(NetError::EmptyStructure));

    let g = rooms();
    assert!(matches!(
        g.iter_bfs(&"Q"),
        Err(NetError::ElementNotFound(_))
    ));
    assert!(matches!(
        g.iter_dfs(&"Q"),
        Err(NetError::ElementNotFound(_))
    ));
}

#[test]
fn test_traversal_after_removal() {
    let mut g = rooms();
    g.remove_vertex(&"C").unwrap();
    // E and F are cut off from A once C is gone.
    let order: Vec<_> = g.iter_bfs(&"A").unwrap().copied().collect();
    assert_eq!(order, vec!["A", "B", "D"]);
    let order: Vec<_> = g.iter_dfs(&"E").unwrap().copied().collect();
    assert_eq!(order, vec!["E", "F"]);
    assert!(!g.is_connected());
}

// ==================== Fewest-Hop Paths ====================

#[test]
fn test_hop_path() {
    let g = rooms();
    assert_eq!(
        g.shortest_hop_path(&"A", &"F").unwrap(),
        vec!["A", "C", "E", "F"]
    );
    assert_eq!(g.shortest_hop_path(&"B", &"C").unwrap(), vec!["B", "A", "C"]);
    assert_eq!(g.shortest_hop_path(&"F", &"B").unwrap().len(), 5);
}

#[test]
fn test_hop_path_same_vertex() {
    let g = rooms();
    assert_eq!(g.shortest_hop_path(&"D", &"D").unwrap(), vec!["D"]);
}

#[test]
fn test_hop_path_unreachable() {
    let mut g = rooms();
    g.add_vertex("Z").unwrap();
    assert!(g.shortest_hop_path(&"A", &"Z").unwrap().is_empty());
    assert!(matches!(
        g.shortest_hop_path(&"A", &"Q"),
        Err(NetError::ElementNotFound(_))
    ));
}
