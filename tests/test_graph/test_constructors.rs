//! Construction, copying and moving.

use std::mem;

use gdwg::{Graph, Value};

use super::{animals, init_logging, triples};

#[test]
fn test_default_is_empty() {
    let g = Graph::<i32, String>::default();
    assert!(g.is_empty());
    assert_eq!(0, g.node_count());
    assert_eq!(0, g.edge_count());
    assert!(g.nodes().is_empty());
    assert_eq!(g.begin(), g.end());
}

#[test]
fn test_from_nodes_collapses_duplicates() {
    let g = Graph::<i32, String>::from_nodes(vec![3, 1, 2, 3, 1]);
    assert_eq!(vec![1, 2, 3], g.nodes());
    assert_eq!(0, g.edge_count());
    assert!(!g.is_empty());
}

#[test]
fn test_from_edges_inserts_endpoints() {
    init_logging();
    let g = Graph::from_edges(vec![(1, 1, 'a'), (2, 1, 'b'), (2, 1, 'z'), (3, 5, 'c'), (2, 1, 'b')]);
    assert_eq!(vec![1, 2, 3, 5], g.nodes());
    assert_eq!(vec![(1, 1, 'a'), (2, 1, 'b'), (2, 1, 'z'), (3, 5, 'c')], triples(&g));
}

#[test]
fn test_from_edges_accepts_values() {
    let values = vec![Value::new("b", "a", 2), Value::from(("a", "b", 1))];
    let g = Graph::<&str, i32>::from_edges(values.iter());
    assert_eq!(vec!["a", "b"], g.nodes());
    assert_eq!(vec![("a", "b", 1), ("b", "a", 2)], triples(&g));
}

#[test]
fn test_clone_is_deep() {
    let g1 = animals();
    let mut g2 = g1.clone();
    assert_eq!(g1, g2);

    g2.insert_node(4);
    g2.insert_edge(&4, &1, "emu").unwrap();
    g2.erase_edge(&1, &1, &"pig").unwrap();

    assert!(g1 != g2);
    assert_eq!(vec![1, 2, 3], g1.nodes());
    assert_eq!(Some((&1, &1, &"pig")), g1.get(g1.begin()));
}

#[test]
fn test_clone_has_new_identity() {
    let g1 = animals();
    let g2 = g1.clone();
    assert!(g1.id() != g2.id());
    assert!(g1.begin() != g2.begin());
    assert_eq!(None, g2.get(g1.begin()));
}

#[test]
fn test_clone_from_keeps_identity() {
    let source = animals();
    let mut target = Graph::from_nodes(vec![10, 20]);
    target.insert_edge(&10, &20, "old").unwrap();
    let id = target.id();
    let stale = target.begin();

    target.clone_from(&source);
    assert_eq!(id, target.id());
    assert_eq!(source, target);
    assert_eq!(None, target.get(stale));
}

#[test]
fn test_take_leaves_source_empty() {
    let mut g1 = animals();
    let expected = g1.clone();
    let g2 = mem::take(&mut g1);

    assert_eq!(expected, g2);
    assert!(g1.is_empty());
    assert_eq!(0, g1.edge_count());
    assert_eq!(g1.begin(), g1.end());
}

#[test]
fn test_equality_ignores_insertion_order() {
    let mut a = Graph::from_nodes(vec![1, 2]);
    a.insert_edge(&1, &2, 5).unwrap();
    a.insert_edge(&2, &1, 3).unwrap();

    let mut b = Graph::from_nodes(vec![2, 1]);
    b.insert_edge(&2, &1, 3).unwrap();
    b.insert_edge(&1, &2, 5).unwrap();
    assert_eq!(a, b);

    b.insert_node(3);
    assert!(a != b);
}
