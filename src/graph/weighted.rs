//! Weighted edge types.

use std::cmp::Ordering;
use std::rc::Rc;

// ----------------------------------------------------------------
// Edge

/// Weighted edge record as stored by the edge set.
///
/// The endpoints are shared handles to the node values owned by the node set,
/// so an edge never holds a private copy of a node.  Edges are ordered
/// lexicographically by `(source, target, weight)`, each component compared
/// by its own order.
#[derive(Debug)]
pub struct Edge<N, E> {
    source: Rc<N>,
    target: Rc<N>,
    data: E
}

impl<N, E> Edge<N, E> {
    /// Create an edge with the given source and target handles and weight.
    pub fn new(source: Rc<N>, target: Rc<N>, data: E) -> Self {
        Edge{source: source, target: target, data: data}
    }

    /// Retrieve a reference to the source node.
    #[inline]
    pub fn source(&self) -> &N {
        &self.source
    }

    /// Retrieve a reference to the target node.
    #[inline]
    pub fn target(&self) -> &N {
        &self.target
    }

    /// Retrieve a reference to the edge's data (weight).
    #[inline]
    pub fn data(&self) -> &E {
        &self.data
    }

    /// Retrieve the shared handle of the source node.
    pub fn source_handle(&self) -> &Rc<N> {
        &self.source
    }

    /// Retrieve the shared handle of the target node.
    pub fn target_handle(&self) -> &Rc<N> {
        &self.target
    }

    /// Borrow the edge as a `(source, target, weight)` triple.
    #[inline]
    pub fn as_triple(&self) -> (&N, &N, &E) {
        (&self.source, &self.target, &self.data)
    }

    /// Build a copy of the edge with new endpoint handles.
    pub fn relinked(&self, source: Rc<N>, target: Rc<N>) -> Self
        where E: Clone
    {
        Edge::new(source, target, self.data.clone())
    }
}

impl<N: Ord, E: Ord> Ord for Edge<N, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source().cmp(other.source())
            .then_with(|| self.target().cmp(other.target()))
            .then_with(|| self.data.cmp(&other.data))
    }
}

impl<N: Ord, E: Ord> PartialOrd for Edge<N, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, E: Ord> PartialEq for Edge<N, E> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, E: Ord> Eq for Edge<N, E> {}


// ----------------------------------------------------------------
// Value

/// Owned `(from, to, weight)` triple, used to build graphs from edge lists.
///
/// ```rust
/// use gdwg::Value;
///
/// # fn main() {
/// let v = Value::from((1, 2, "cat"));
/// assert_eq!((1, 2, "cat"), (v.from, v.to, v.weight));
/// # }
/// ```
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Value<N, E> {
    /// Source node.
    pub from: N,
    /// Target node.
    pub to: N,
    /// Edge weight.
    pub weight: E
}

impl<N, E> Value<N, E> {
    /// Create a triple.
    pub fn new(from: N, to: N, weight: E) -> Self {
        Value{from: from, to: to, weight: weight}
    }
}

impl<N, E> From<(N, N, E)> for Value<N, E> {
    fn from(u: (N, N, E)) -> Self {
        Self::new(u.0, u.1, u.2)
    }
}

impl<'a, N: Clone, E: Clone> From<&'a (N, N, E)> for Value<N, E> {
    fn from(u: &'a (N, N, E)) -> Self {
        Self::new(u.0.clone(), u.1.clone(), u.2.clone())
    }
}

impl<'a, N: Clone, E: Clone> From<&'a Value<N, E>> for Value<N, E> {
    fn from(v: &'a Value<N, E>) -> Self {
        v.clone()
    }
}
