//! Ordered set of node values.
//!
//! Each node value is stored once, behind a shared handle.  Edges hold
//! clones of these handles, so a node's identity is stable under unrelated
//! insertions and removals and edges never need rewriting when other nodes
//! change.

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::iter::Map;
use std::rc::Rc;

use tracing::trace;

use super::interface::Element;

/// Ordered set of distinct node values.
#[derive(Debug)]
pub struct NodeSet<N> {
    nodes: BTreeSet<Rc<N>>
}

/// Iterator over the values of a [`NodeSet`], in
/// ascending order.
pub type Iter<'a, N> = Map<btree_set::Iter<'a, Rc<N>>, fn(&'a Rc<N>) -> &'a N>;

impl<N> NodeSet<N> {
    /// Create an empty node set.
    pub fn new() -> Self {
        NodeSet{nodes: BTreeSet::new()}
    }

    /// Number of nodes in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the set holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Fetch an iterator over the node values, in ascending order.
    pub fn iter<'a>(&'a self) -> Iter<'a, N> {
        fn value<N>(handle: &Rc<N>) -> &N { handle }
        self.nodes.iter().map(value as fn(&'a Rc<N>) -> &'a N)
    }
}

impl<N: Element> NodeSet<N> {
    /// Insert a node value.  Returns `false`, leaving the set unchanged, if
    /// an equal value is already present.
    pub fn insert(&mut self, value: N) -> bool {
        if self.nodes.contains(&value) {
            return false;
        }
        self.intern(value);
        true
    }

    /// Fetch the handle of the node equal to `value`, inserting it first if
    /// necessary.
    pub fn intern(&mut self, value: N) -> Rc<N> {
        if let Some(handle) = self.nodes.get(&value) {
            return handle.clone();
        }
        let handle = Rc::new(value);
        self.nodes.insert(handle.clone());
        trace!(nodes = self.nodes.len(), "insert node");
        handle
    }

    /// Check if the set contains a value equal to `value`.
    #[inline]
    pub fn contains(&self, value: &N) -> bool {
        self.nodes.contains(value)
    }

    /// Fetch the shared handle of the stored node equal to `value`.
    #[inline]
    pub fn get(&self, value: &N) -> Option<&Rc<N>> {
        self.nodes.get(value)
    }

    /// Handle of the smallest node, if any.
    pub fn first(&self) -> Option<&Rc<N>> {
        self.nodes.first()
    }

    /// Handle of the largest node, if any.
    pub fn last(&self) -> Option<&Rc<N>> {
        self.nodes.last()
    }

    /// Remove the node equal to `value`, returning its handle if it was
    /// present.
    pub fn remove(&mut self, value: &N) -> Option<Rc<N>> {
        let removed = self.nodes.take(value);
        if removed.is_some() {
            trace!(nodes = self.nodes.len(), "remove node");
        }
        removed
    }
}

impl<N> Default for NodeSet<N> {
    #[inline(always)]
    fn default() -> Self {
        NodeSet::new()
    }
}
