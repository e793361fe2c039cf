//! Integration tests for `gdwg::Graph`.

use gdwg::Graph;

mod test_constructors;
mod test_modifiers;

/// Route library logging through the test harness's captured output.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Graph over `{1, 2, 3}` holding the edges shared by most tests:
/// `(1,1,pig)`, `(1,2,cat)`, `(1,2,dog)`, `(2,1,monkey)`.
pub fn animals() -> Graph<i32, &'static str> {
    let mut g = Graph::from_nodes(vec![1, 2, 3]);
    for &(src, dst, w) in [(1, 1, "pig"), (1, 2, "cat"), (1, 2, "dog"), (2, 1, "monkey")].iter() {
        g.insert_edge(&src, &dst, w).unwrap();
    }
    g
}

/// Collect the edges of a graph as owned triples.
pub fn triples<N: Clone, E: Clone>(g: &Graph<N, E>) -> Vec<(N, N, E)> {
    g.iter().map(|(s, d, w)| (s.clone(), d.clone(), w.clone())).collect()
}
