//! Node and edge insertion, replacement and removal.

use gdwg::{Graph, GraphError, Operation};

use super::{animals, init_logging, triples};

fn message<T: std::fmt::Debug>(result: gdwg::Result<T>) -> String {
    result.unwrap_err().to_string()
}

#[test]
fn test_insert_node() {
    let mut g = Graph::<i32, String>::from_nodes(vec![3]);
    assert!(!g.insert_node(3));
    assert!(g.insert_node(1));
    assert!(!g.insert_node(1));
    assert!(g.insert_node(8));
    assert_eq!(vec![1, 3, 8], g.nodes());
}

#[test]
fn test_insert_edge() {
    let mut g = Graph::from_nodes(vec![1, 2, 3]);
    assert!(!g.is_connected(&1, &2).unwrap());
    assert!(g.insert_edge(&1, &2, "dog").unwrap());
    assert!(g.is_connected(&1, &2).unwrap());
    assert!(!g.insert_edge(&1, &2, "dog").unwrap());

    assert!(g.insert_edge(&1, &2, "cat").unwrap());
    assert!(g.insert_edge(&2, &1, "dog").unwrap());
    assert_eq!(vec!["cat", "dog"], g.weights(&1, &2).unwrap());
    assert_eq!(vec!["dog"], g.weights(&2, &1).unwrap());
    g.check_invariants();
}

#[test]
fn test_insert_edge_missing_node() {
    let mut g = animals();
    let before = g.clone();
    let expected = "Cannot call gdwg::graph<N, E>::insert_edge when either src or dst node does not exist";

    assert_eq!(expected, message(g.insert_edge(&1, &5, "dog")));
    assert_eq!(expected, message(g.insert_edge(&4, &1, "dog")));
    assert_eq!(Err(GraphError::PreconditionViolation(Operation::InsertEdge)),
               g.insert_edge(&4, &4, "dog"));
    assert_eq!(before, g);
}

#[test]
fn test_replace_node() {
    let mut g = animals();
    g.insert_edge(&1, &3, "rat").unwrap();
    let pig = g.find(&1, &1, &"pig");

    assert!(g.replace_node(&1, 9).unwrap());
    assert!(g.is_node(&9));
    assert!(!g.is_node(&1));
    assert_eq!(g.end(), g.find(&1, &1, &"pig"));
    assert!(g.find(&9, &9, &"pig") != g.end());
    assert!(g.find(&9, &2, &"cat") != g.end());
    assert!(g.find(&9, &2, &"dog") != g.end());
    assert!(g.find(&9, &3, &"rat") != g.end());
    assert!(g.find(&2, &9, &"monkey") != g.end());

    // Cursors follow the edge to its new place in the order.
    assert_eq!(Some((&9, &9, &"pig")), g.get(pig));
    assert_eq!(g.find(&9, &9, &"pig"), pig);
    assert_eq!(vec![2, 3, 9], g.nodes());
    g.check_invariants();
}

#[test]
fn test_replace_node_onto_existing() {
    let mut g = animals();
    let before = g.clone();
    assert!(!g.replace_node(&1, 3).unwrap());
    assert!(g.is_node(&1));
    assert_eq!(before, g);
}

#[test]
fn test_replace_node_missing() {
    let mut g = animals();
    assert_eq!("Cannot call gdwg::graph<N, E>::replace_node on a node that doesn't exist",
               message(g.replace_node(&5, 3)));
}

#[test]
fn test_merge_replace_node_coalesces() {
    init_logging();
    let mut g = Graph::from_nodes(vec![1, 2, 3]);
    for &(s, d, w) in [(1, 1, "pig"), (1, 1, "cat"), (1, 2, "cat"), (2, 2, "cat"),
                       (1, 3, "rat"), (2, 1, "ox"), (3, 1, "dog"), (3, 2, "fox")].iter() {
        g.insert_edge(&s, &d, w).unwrap();
    }
    let rat = g.find(&1, &3, &"rat");
    let cat = g.find(&1, &2, &"cat");
    let kept = g.find(&2, &2, &"cat");

    let mut expected = Graph::from_nodes(vec![2, 3]);
    for &(s, d, w) in [(2, 2, "pig"), (2, 2, "cat"), (2, 3, "rat"),
                       (2, 2, "ox"), (3, 2, "dog"), (3, 2, "fox")].iter() {
        expected.insert_edge(&s, &d, w).unwrap();
    }

    g.merge_replace_node(&1, &2).unwrap();
    assert_eq!(expected, g);
    assert_eq!(6, g.edge_count());
    assert_eq!(Some((&2, &3, &"rat")), g.get(rat));

    // (1,2,cat) collapsed into the existing (2,2,cat); its cursor dangles.
    assert_eq!(None, g.get(cat));
    assert!(cat != g.begin());
    assert!(cat != g.end());
    assert!(cat != g.find(&2, &2, &"cat"));
    assert_eq!(kept, g.find(&2, &2, &"cat"));
    assert_eq!(Some((&2, &2, &"cat")), g.get(kept));
    g.check_invariants();
}

#[test]
fn test_merge_replace_node_onto_itself() {
    let mut g = animals();
    let before = g.clone();
    g.merge_replace_node(&2, &2).unwrap();
    assert_eq!(before, g);
}

#[test]
fn test_merge_replace_node_missing() {
    let mut g = animals();
    let expected = "Cannot call gdwg::graph<N, E>::merge_replace_node on old or new data if they don't exist in the graph";
    assert_eq!(expected, message(g.merge_replace_node(&5, &3)));
    assert_eq!(expected, message(g.merge_replace_node(&3, &5)));
    assert_eq!(4, g.edge_count());
}

#[test]
fn test_erase_node() {
    let mut g = Graph::from_nodes(vec![1, 2, 3]);
    for &(s, d, w) in [(1, 1, "pig"), (1, 2, "cat"), (1, 3, "rat"), (2, 1, "ox"),
                       (3, 1, "sheep"), (3, 2, "monkey"), (3, 3, "lion")].iter() {
        g.insert_edge(&s, &d, w).unwrap();
    }
    let lion = g.find(&3, &3, &"lion");

    assert!(g.erase_node(&1));
    assert!(!g.erase_node(&1));
    assert!(!g.erase_node(&7));
    assert_eq!(vec![(3, 2, "monkey"), (3, 3, "lion")], triples(&g));
    assert_eq!(Some((&3, &3, &"lion")), g.get(lion));

    assert!(g.erase_node(&2));
    assert_eq!(vec![3], g.nodes());
    g.check_invariants();
}

#[test]
fn test_erase_edge_by_value() {
    let mut g = animals();
    assert!(g.erase_edge(&1, &2, &"cat").unwrap());
    assert!(!g.erase_edge(&1, &2, &"cat").unwrap());
    assert!(!g.erase_edge(&2, &2, &"cat").unwrap());
    assert_eq!(vec!["dog"], g.weights(&1, &2).unwrap());

    assert_eq!("Cannot call gdwg::graph<N, E>::erase_edge on src or dst if they don't exist in the graph",
               message(g.erase_edge(&1, &9, &"cat")));
}

#[test]
fn test_erase_edge_at() {
    let mut g = animals();
    let cat = g.find(&1, &2, &"cat");
    let next = g.erase_edge_at(cat);
    assert_eq!(Some((&1, &2, &"dog")), g.get(next));
    assert_eq!(None, g.get(cat));

    let monkey = g.find(&2, &1, &"monkey");
    assert_eq!(g.end(), g.erase_edge_at(monkey));
    assert_eq!(vec![(1, 1, "pig"), (1, 2, "dog")], triples(&g));
}

#[test]
#[should_panic(expected = "cannot erase the end position")]
fn test_erase_edge_at_end() {
    let mut g = animals();
    let end = g.end();
    g.erase_edge_at(end);
}

#[test]
#[should_panic(expected = "has been erased")]
fn test_advance_coalesced_cursor() {
    let mut g = Graph::from_edges(vec![(1, 3, 'x'), (2, 3, 'x')]);
    let absorbed = g.find(&1, &3, &'x');
    g.merge_replace_node(&1, &2).unwrap();
    assert_eq!(1, g.edge_count());
    g.next(absorbed);
}

#[test]
#[should_panic(expected = "has been erased")]
fn test_erase_edge_at_dangling() {
    let mut g = animals();
    let pig = g.begin();
    g.erase_edge_at(pig);
    g.erase_edge_at(pig);
}

#[test]
fn test_erase_edge_range() {
    init_logging();
    let mut g = animals();
    let first = g.find(&1, &2, &"cat");
    let last = g.find(&2, &1, &"monkey");
    assert_eq!(last, g.erase_edge_range(first, last));
    assert_eq!(vec![(1, 1, "pig"), (2, 1, "monkey")], triples(&g));

    let (begin, end) = (g.begin(), g.end());
    assert_eq!(end, g.erase_edge_range(begin, end));
    assert_eq!(0, g.edge_count());
    assert_eq!(3, g.node_count());
}

#[test]
fn test_erase_edge_range_empty() {
    let mut g = animals();
    let dog = g.find(&1, &2, &"dog");
    assert_eq!(dog, g.erase_edge_range(dog, dog));
    assert_eq!(4, g.edge_count());
}

#[test]
fn test_erase_edge_range_reversed_leaves_graph_intact() {
    use std::panic::{self, AssertUnwindSafe};

    let mut g = animals();
    let first = g.find(&2, &1, &"monkey");
    let last = g.find(&1, &1, &"pig");
    let result = panic::catch_unwind(AssertUnwindSafe(|| { g.erase_edge_range(first, last); }));
    assert!(result.is_err());
    assert_eq!(4, g.edge_count());
    g.check_invariants();
}

#[test]
fn test_clear() {
    let mut g = animals();
    let pig = g.begin();
    g.clear();
    assert!(g.is_empty());
    assert_eq!(0, g.edge_count());
    assert_eq!(None, g.get(pig));
    assert_eq!(g.begin(), g.end());

    // The graph remains usable.
    assert!(g.insert_node(1));
    assert!(g.insert_edge(&1, &1, "pig").unwrap());
    assert_eq!(vec![(1, 1, "pig")], triples(&g));
}
