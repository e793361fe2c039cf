//! The graph container and its public operations.

use std::fmt;
use std::rc::Rc;

use itertools::Itertools;
use smallvec::SmallVec;
use tracing::debug;

use crate::error::{GraphError, Operation, Result};
use super::common::{EdgeIndex, GraphId};
use super::edges::EdgeSet;
use super::interface::Element;
use super::iter::{Cursor, EdgeRef, Edges};
use super::nodes::{self, NodeSet};
use super::weighted::{Edge, Value};

/// Directed weighted graph over node type `N` and weight type `E`.
///
/// Nodes are distinct values of `N`; edges are distinct triples
/// `(src, dst, weight)` whose endpoints are nodes of the graph.  Several edges
/// may join the same pair of nodes provided their weights differ, and an edge
/// may join a node to itself.
///
/// Nodes enumerate in ascending order of `N`.  Edges enumerate in ascending
/// lexicographic order of `(src, dst, weight)`.
///
/// Operations whose node arguments must be present return
/// [`Result`](crate::Result) and fail with
/// [`GraphError::PreconditionViolation`](crate::GraphError) when they
/// are not; a failed operation leaves the graph unchanged.
///
/// ```rust
/// use gdwg::Graph;
///
/// # fn main() -> gdwg::Result<()> {
/// let mut g = Graph::<&str, i32>::from_nodes(["sydney", "perth", "brisbane"]);
/// g.insert_edge(&"sydney", &"brisbane", 3)?;
/// g.insert_edge(&"sydney", &"brisbane", 4)?;
/// g.insert_edge(&"perth", &"sydney", 15)?;
///
/// assert!(g.is_connected(&"sydney", &"brisbane")?);
/// assert!(!g.is_connected(&"brisbane", &"sydney")?);
/// assert!(g.insert_edge(&"sydney", &"adelaide", 7).is_err());
/// # Ok(())
/// # }
/// ```
pub struct Graph<N, E> {
    id: GraphId,
    nodes: NodeSet<N>,
    edges: EdgeSet<N, E>
}

impl<N, E> Graph<N, E> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph{id: GraphId::next(), nodes: NodeSet::new(), edges: EdgeSet::new()}
    }

    /// Identity of this graph, as recorded by its cursors.
    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Check if the graph has no nodes (and hence no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Count the number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Count the number of edges in the graph.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove every node and edge.
    ///
    /// Every cursor previously obtained from this graph becomes dangling,
    /// except `end()`.
    pub fn clear(&mut self) {
        debug!(nodes = self.nodes.len(), edges = self.edges.len(), "clear graph");
        self.edges.clear();
        self.nodes.clear();
    }

    /// Fetch an iterator over the nodes, in ascending order.
    #[inline]
    pub fn iter_nodes(&self) -> nodes::Iter<N> {
        self.nodes.iter()
    }

    /// Fetch an iterator over the edges, in edge order.
    #[inline]
    pub fn iter(&self) -> Edges<N, E> {
        Edges::new(self.edges.iter())
    }

    /// Cursor to the first edge, or `end()` if there are no edges.
    pub fn begin(&self) -> Cursor {
        Cursor::new(self.id, self.edges.first())
    }

    /// Cursor to the one-past-the-end position.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.id, None)
    }

    /// Dereference a cursor.
    ///
    /// Returns `None` for the end position, for cursors whose edge has been
    /// removed, and for cursors belonging to another graph.
    pub fn get(&self, cursor: Cursor) -> Option<EdgeRef<N, E>> {
        if cursor.owner() != Some(self.id) {
            return None;
        }
        cursor.edge()
            .and_then(|ix| self.edges.get(ix))
            .map(|edge| edge.as_triple())
    }

    /// Resolve a cursor that must belong to this graph.  Yields `None` for the
    /// end position.
    fn resolve(&self, cursor: Cursor, action: &str) -> Option<EdgeIndex> {
        panic_unless!(cursor.owner() == Some(self.id),
                      "cannot {} a cursor that belongs to another graph", action);
        if let Some(ix) = cursor.edge() {
            panic_unless!(self.edges.contains_index(ix),
                          "cannot {} a cursor whose edge has been erased", action);
        }
        cursor.edge()
    }
}

impl<N: Element, E: Element> Graph<N, E> {
    /// Create a graph holding the given nodes and no edges.  Duplicate values
    /// are collapsed.
    pub fn from_nodes<I>(nodes: I) -> Self
        where I: IntoIterator<Item=N>
    {
        let mut g = Graph::new();
        for n in nodes {
            g.nodes.insert(n);
        }
        g
    }

    /// Create a graph from a list of `(from, to, weight)` triples.
    ///
    /// Both endpoints of every triple are added as nodes, then the edge is
    /// inserted.  Duplicate triples are collapsed.
    ///
    /// ```rust
    /// use gdwg::Graph;
    ///
    /// # fn main() {
    /// let g = Graph::from_edges(vec![(1, 1, 'a'), (2, 1, 'b'), (2, 1, 'z'), (3, 5, 'c')]);
    /// assert_eq!(vec![1, 2, 3, 5], g.nodes());
    /// assert_eq!(4, g.edge_count());
    /// # }
    /// ```
    pub fn from_edges<I, T>(edges: I) -> Self
        where I: IntoIterator<Item=T>,
              T: Into<Value<N, E>>
    {
        let mut g = Graph::new();
        for value in edges {
            let Value{from, to, weight} = value.into();
            let source = g.nodes.intern(from);
            let target = g.nodes.intern(to);
            g.edges.insert(source, target, weight);
        }
        g
    }

    /// Fetch the handles of both nodes, or fail on behalf of `operation`.
    fn endpoints(&self, src: &N, dst: &N, operation: Operation) -> Result<(Rc<N>, Rc<N>)> {
        match (self.nodes.get(src), self.nodes.get(dst)) {
            (Some(src), Some(dst)) => Ok((src.clone(), dst.clone())),
            _ => Err(GraphError::precondition(operation)),
        }
    }

    // ---------------------------------------------------------------- modifiers

    /// Add a node.  Returns `false`, leaving the graph unchanged, if an equal
    /// node is already present.
    pub fn insert_node(&mut self, value: N) -> bool {
        self.nodes.insert(value)
    }

    /// Add the edge `(src, dst, weight)`.  Returns `false`, leaving the graph
    /// unchanged, if that exact edge is already present.
    ///
    /// # Errors
    ///
    /// Fails if `src` or `dst` is not a node of the graph.
    pub fn insert_edge(&mut self, src: &N, dst: &N, weight: E) -> Result<bool> {
        let (source, target) = self.endpoints(src, dst, Operation::InsertEdge)?;
        Ok(self.edges.insert(source, target, weight).is_some())
    }

    /// Replace node `old` by the new node `new`, redirecting all of `old`'s
    /// edges to `new`.
    ///
    /// Returns `false`, leaving the graph unchanged, if `new` is already a
    /// node.  Cursors to redirected edges stay valid.
    ///
    /// # Errors
    ///
    /// Fails if `old` is not a node of the graph.
    pub fn replace_node(&mut self, old: &N, new: N) -> Result<bool> {
        if ! self.nodes.contains(old) {
            return Err(GraphError::precondition(Operation::ReplaceNode));
        }
        if self.nodes.contains(&new) {
            return Ok(false);
        }
        let new = self.nodes.intern(new);
        self.redirect(old, new);
        Ok(true)
    }

    /// Merge node `old` into the existing node `new`: every edge starting or
    /// ending at `old` is redirected to `new`, then `old` is removed.
    ///
    /// Redirected edges that coincide with an existing edge (or with each
    /// other) are coalesced, leaving exactly one copy.  Cursors to redirected
    /// edges stay valid unless their edge was coalesced away.  Merging a node
    /// into itself does nothing.
    ///
    /// # Errors
    ///
    /// Fails if `old` or `new` is not a node of the graph.
    pub fn merge_replace_node(&mut self, old: &N, new: &N) -> Result<()> {
        let (_, new) = self.endpoints(old, new, Operation::MergeReplaceNode)?;
        if *old == *new {
            return Ok(());
        }
        self.redirect(old, new);
        Ok(())
    }

    /// Point every edge incident on `old` at `new` instead, then drop `old`.
    /// Both nodes must exist and differ.
    fn redirect(&mut self, old: &N, new: Rc<N>) {
        let incident = self.edges.incident(old);
        let mut coalesced = 0usize;

        for ix in incident.iter().cloned() {
            let (source, target) = match self.edges.get(ix) {
                Some(edge) => (self.rehome(edge.source_handle(), old, &new),
                               self.rehome(edge.target_handle(), old, &new)),
                None => continue,
            };
            if self.edges.relink(ix, source, target) != Some(ix) {
                coalesced += 1;
            }
        }
        self.nodes.remove(old);
        debug!(redirected = incident.len(), coalesced = coalesced, edges = self.edges.len(),
               "merge node");
    }

    fn rehome(&self, handle: &Rc<N>, old: &N, new: &Rc<N>) -> Rc<N> {
        if **handle == *old { new.clone() } else { handle.clone() }
    }

    /// Remove a node and every edge starting or ending at it.  Returns
    /// `false` if there is no such node.
    pub fn erase_node(&mut self, value: &N) -> bool {
        if ! self.nodes.contains(value) {
            return false;
        }
        let incident = self.edges.incident(value);
        for ix in incident.iter().cloned() {
            self.edges.remove_index(ix);
        }
        self.nodes.remove(value);
        debug!(edges_removed = incident.len(), nodes = self.nodes.len(), "erase node");
        true
    }

    /// Remove the edge `(src, dst, weight)`.  Returns `false` if there is no
    /// such edge.
    ///
    /// # Errors
    ///
    /// Fails if `src` or `dst` is not a node of the graph.
    pub fn erase_edge(&mut self, src: &N, dst: &N, weight: &E) -> Result<bool> {
        let (source, target) = self.endpoints(src, dst, Operation::EraseEdge)?;
        Ok(self.edges.remove(&Edge::new(source, target, weight.clone())))
    }

    /// Remove the edge designated by `cursor`, returning a cursor to the edge
    /// that followed it (or `end()`).
    ///
    /// Locating the following edge takes constant time; dropping the edge
    /// from the ordered index takes `O(log |E|)`.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position, is dangling, or belongs
    /// to another graph.
    pub fn erase_edge_at(&mut self, cursor: Cursor) -> Cursor {
        let ix = match self.resolve(cursor, "erase") {
            Some(ix) => ix,
            None => panic!("cannot erase the end position"),
        };
        let next = self.edges.successor(ix);
        self.edges.remove_index(ix);
        Cursor::new(self.id, next)
    }

    /// Remove every edge in the half-open range `[first, last)`, returning
    /// `last`.
    ///
    /// The range is validated before anything is removed.
    ///
    /// # Panics
    ///
    /// Panics if either cursor is dangling or belongs to another graph, or
    /// if `last` does not lie at or after `first`.
    pub fn erase_edge_range(&mut self, first: Cursor, last: Cursor) -> Cursor {
        let stop = self.resolve(last, "erase up to");
        let mut current = self.resolve(first, "erase from");

        let mut doomed: SmallVec<[EdgeIndex; 8]> = SmallVec::new();
        while current != stop {
            match current {
                Some(ix) => {
                    doomed.push(ix);
                    current = self.edges.successor(ix);
                },
                None => panic!("erase range ends before it starts"),
            }
        }
        for ix in doomed.iter().cloned() {
            self.edges.remove_index(ix);
        }
        debug!(edges_removed = doomed.len(), edges = self.edges.len(), "erase edge range");
        last
    }

    // ---------------------------------------------------------------- accessors

    /// Check if `value` is a node of the graph.
    #[inline]
    pub fn is_node(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// Check if there is at least one edge from `src` to `dst`.
    ///
    /// # Errors
    ///
    /// Fails if `src` or `dst` is not a node of the graph.
    pub fn is_connected(&self, src: &N, dst: &N) -> Result<bool> {
        let (source, target) = self.endpoints(src, dst, Operation::IsConnected)?;
        Ok(self.edges.between(&source, &target).next().is_some())
    }

    /// Fetch all nodes, in ascending order.
    pub fn nodes(&self) -> Vec<N> {
        self.iter_nodes().cloned().collect()
    }

    /// Fetch the weights of all edges from `src` to `dst`, in ascending
    /// order.
    ///
    /// # Errors
    ///
    /// Fails if `src` or `dst` is not a node of the graph.
    pub fn weights(&self, src: &N, dst: &N) -> Result<Vec<E>> {
        let (source, target) = self.endpoints(src, dst, Operation::Weights)?;
        Ok(self.edges.between(&source, &target).map(|edge| edge.data().clone()).collect())
    }

    /// Find the edge `(src, dst, weight)`.  Returns `end()` if there is no
    /// such edge.
    pub fn find(&self, src: &N, dst: &N, weight: &E) -> Cursor {
        let found = match (self.nodes.get(src), self.nodes.get(dst)) {
            (Some(source), Some(target)) => {
                self.edges.find(&Edge::new(source.clone(), target.clone(), weight.clone()))
            },
            _ => None,
        };
        Cursor::new(self.id, found)
    }

    /// Fetch the distinct targets of all edges leaving `src`, in ascending
    /// order.
    ///
    /// # Errors
    ///
    /// Fails if `src` is not a node of the graph.
    pub fn connections(&self, src: &N) -> Result<Vec<N>> {
        let source = match self.nodes.get(src) {
            Some(source) => source,
            None => return Err(GraphError::precondition(Operation::Connections)),
        };
        let (lowest, highest) = match (self.nodes.first(), self.nodes.last()) {
            (Some(lowest), Some(highest)) => (lowest, highest),
            _ => return Ok(Vec::new()),
        };
        Ok(self.edges.outgoing(source, lowest, highest)
           .map(|edge| edge.target())
           .dedup()
           .cloned()
           .collect())
    }

    // ---------------------------------------------------------------- cursors

    /// Advance a cursor to the next edge in edge order, or to `end()` after
    /// the last edge.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at the end position, is dangling, or belongs
    /// to another graph.
    pub fn next(&self, cursor: Cursor) -> Cursor {
        match self.resolve(cursor, "advance") {
            Some(ix) => Cursor::new(self.id, self.edges.successor(ix)),
            None => panic!("cannot advance past the end position"),
        }
    }

    /// Move a cursor back to the previous edge in edge order.  Retreating
    /// from `end()` yields the last edge.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is at `begin()`, is dangling, or belongs to
    /// another graph.
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        let previous = match self.resolve(cursor, "retreat") {
            Some(ix) => self.edges.predecessor(ix),
            None => self.edges.last(),
        };
        match previous {
            Some(ix) => Cursor::new(self.id, Some(ix)),
            None => panic!("cannot retreat before the first edge"),
        }
    }

    /// Check the structural invariants of the graph: nodes and edges are
    /// strictly ascending, every edge joins two nodes of the graph, and the
    /// edge bookkeeping is consistent.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first violation found.
    pub fn check_invariants(&self) {
        for (a, b) in self.nodes.iter().tuple_windows() {
            panic_unless!(a < b, "nodes are not strictly ascending");
        }
        for ((a, _), (b, _)) in self.edges.iter().tuple_windows() {
            panic_unless!(a < b, "edges are not strictly ascending");
        }
        for (edge, _) in self.edges.iter() {
            panic_unless!(self.nodes.contains(edge.source()) && self.nodes.contains(edge.target()),
                          "edge refers to a node outside the graph");
        }
        self.edges.check_invariants();
    }
}

impl<N, E> Default for Graph<N, E> {
    #[inline(always)]
    fn default() -> Self {
        Graph::new()
    }
}

/// Deep copy.  The copy has a new identity, so cursors of the original do
/// not apply to it.
impl<N: Element, E: Element> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        let mut g = Graph::new();
        g.clone_from(self);
        g
    }

    /// Replace the contents of `self` with a deep copy of `source`.  `self`
    /// keeps its identity; its previous cursors become dangling.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for n in source.nodes.iter() {
            self.nodes.insert(n.clone());
        }
        for (edge, _) in source.edges.iter() {
            let (src, dst, weight) = edge.as_triple();
            if let (Some(src), Some(dst)) = (self.nodes.get(src), self.nodes.get(dst)) {
                let (src, dst) = (src.clone(), dst.clone());
                self.edges.insert(src, dst, weight.clone());
            }
        }
    }
}

impl<N: Element, E: Element> PartialEq for Graph<N, E> {
    fn eq(&self, other: &Self) -> bool {
        if self.id == other.id {
            return true;
        }
        self.nodes.len() == other.nodes.len()
            && self.edges.len() == other.edges.len()
            && self.nodes.iter().eq(other.nodes.iter())
            && self.iter().eq(other.iter())
    }
}

impl<N: Element, E: Element> Eq for Graph<N, E> {}

impl<N: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.iter().collect::<Vec<_>>())
            .field("edges", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, N, E> IntoIterator for &'a Graph<N, E> {
    type Item = EdgeRef<'a, N, E>;
    type IntoIter = Edges<'a, N, E>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
