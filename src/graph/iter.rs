//! Cursors and iterators over the edges of a graph.

use std::iter::FusedIterator;

use super::common::{EdgeIndex, GraphId, IndexType};
use super::edges;

/// Borrowed view of one edge: `(source, target, weight)`.
pub type EdgeRef<'a, N, E> = (&'a N, &'a N, &'a E);


/// Position in the edge order of one graph.
///
/// A cursor designates either a stored edge or the one-past-the-end
/// position.  Cursors are plain copyable handles: they do not borrow the
/// graph, and are dereferenced and moved through it (see
/// [`Graph::get`](super::Graph::get),
/// [`Graph::next`](super::Graph::next) and
/// [`Graph::prev`](super::Graph::prev)).
///
/// A cursor tracks the identity of its edge, not a numeric position: it keeps
/// designating the same edge across insertions and removals of other edges,
/// across node replacement (which may move the edge within the order), and
/// across a move of the graph.  Once its edge is removed the cursor is
/// dangling; it can still be compared, but dereferencing it yields nothing.
///
/// Cursors compare equal when they designate the same position of the same
/// graph.  Default-constructed cursors belong to no graph and compare equal
/// to each other.
#[derive(Copy, Clone, Debug, Default, Hash, PartialEq, Eq)]
pub struct Cursor {
    owner: Option<GraphId>,
    edge: Option<EdgeIndex>
}

impl Cursor {
    /// Create a cursor for the given graph.  `None` designates the
    /// one-past-the-end position.
    pub(crate) fn new(owner: GraphId, edge: Option<EdgeIndex>) -> Self {
        Cursor{owner: Some(owner), edge: edge}
    }

    /// Identity of the graph that produced this cursor, if any.
    #[inline]
    pub fn owner(&self) -> Option<GraphId> {
        self.owner
    }

    /// Identifier of the designated edge, or `None` at the end position.
    #[inline]
    pub fn edge(&self) -> Option<EdgeIndex> {
        self.edge
    }

    /// Check if the cursor designates the one-past-the-end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.edge.is_none()
    }
}


/// Iterator over the edges of a graph, in edge order.
///
/// Yields `(source, target, weight)` borrows.  Created by
/// [`Graph::iter`](super::Graph::iter).
pub struct Edges<'a, N: 'a, E: 'a, Ix: 'a + IndexType = super::common::DefaultIndexType> {
    iter: edges::Iter<'a, N, E, Ix>
}

impl<'a, N, E, Ix: IndexType> Edges<'a, N, E, Ix> {
    /// Create an iterator over the whole edge set.
    pub fn new(iter: edges::Iter<'a, N, E, Ix>) -> Self {
        Edges{iter: iter}
    }
}

impl<'a, N, E, Ix: IndexType> Clone for Edges<'a, N, E, Ix> {
    fn clone(&self) -> Self {
        Edges{iter: self.iter.clone()}
    }
}

impl<'a, N, E, Ix: IndexType> Iterator for Edges<'a, N, E, Ix> {
    type Item = EdgeRef<'a, N, E>;
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(edge, _)| edge.as_triple())
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, N, E, Ix: IndexType> DoubleEndedIterator for Edges<'a, N, E, Ix> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back().map(|(edge, _)| edge.as_triple())
    }
}

impl<'a, N, E, Ix: IndexType> ExactSizeIterator for Edges<'a, N, E, Ix> {}

impl<'a, N, E, Ix: IndexType> FusedIterator for Edges<'a, N, E, Ix> {}
