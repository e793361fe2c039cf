//! Ordered set of weighted edges.
//!
//! Edge records live in a slot arena; each stored edge is identified by an
//! [`EdgeIndex`](super::EdgeIndex) naming its slot and the slot's
//! generation.  A separate ordered index maps the lexicographic
//! `(source, target, weight)` key of every edge to its identifier.  The
//! index gives uniqueness, ordered enumeration and logarithmic lookup; the
//! arena gives identifiers that survive unrelated mutations and re-keying.
//!
//! Prefix queries ("every edge from `a`", "every edge from `a` to `b`") are
//! answered with a range over the index between two synthetic bounding keys.
//! The bounding keys use the smallest and largest weight ever inserted; the
//! bounds only widen on insertion, since removing an edge can never push a
//! remaining weight outside them.
//!
//! Occupied slots are also threaded into a doubly-linked list in edge order.
//! Links are set with one neighbour lookup when an edge is stored or
//! re-keyed, so stepping from an edge to its neighbours costs `O(1)`.

use std::collections::btree_map::{self, BTreeMap};
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::rc::Rc;

use smallvec::SmallVec;
use tracing::trace;

use super::common::{DefaultIndexType, EdgeIndex, IndexType};
use super::interface::{Element, Id};
use super::weighted::Edge;

/// Identifiers collected while scanning for edges to rewrite or remove.
pub type IndexList<Ix> = SmallVec<[EdgeIndex<Ix>; 8]>;

/// Iterator over the edges of an [`EdgeSet`], in edge
/// order, with their identifiers.
pub type Iter<'a, N, E, Ix> = btree_map::Iter<'a, Rc<Edge<N, E>>, EdgeIndex<Ix>>;

type Span<'a, N, E, Ix> = btree_map::Range<'a, Rc<Edge<N, E>>, EdgeIndex<Ix>>;

#[derive(Debug)]
struct Slot<N, E> {
    generation: u32,
    edge: Option<Rc<Edge<N, E>>>,

    /// Slots of the neighbouring edges in edge order.
    prev: Option<usize>,
    next: Option<usize>
}

/// Ordered set of distinct edges with stable identifiers.
#[derive(Debug)]
pub struct EdgeSet<N, E, Ix: IndexType = DefaultIndexType> {
    slots: Vec<Slot<N, E>>,
    vacant: Vec<usize>,
    order: BTreeMap<Rc<Edge<N, E>>, EdgeIndex<Ix>>,

    /// Smallest and largest weight inserted since the set was last empty.
    weights: Option<(E, E)>
}

impl<N, E, Ix: IndexType> EdgeSet<N, E, Ix> {
    /// Create an empty edge set.
    pub fn new() -> Self {
        EdgeSet{slots: Vec::new(), vacant: Vec::new(), order: BTreeMap::new(), weights: None}
    }

    /// Number of edges in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the set holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Fetch the edge with the given identifier, if it is still stored.
    #[inline]
    pub fn get(&self, ix: EdgeIndex<Ix>) -> Option<&Edge<N, E>> {
        self.handle(ix).map(|edge| &**edge)
    }

    /// Check if an identifier names an edge that is still stored.
    #[inline]
    pub fn contains_index(&self, ix: EdgeIndex<Ix>) -> bool {
        self.handle(ix).is_some()
    }

    /// Identifier of the smallest edge, if any.
    pub fn first(&self) -> Option<EdgeIndex<Ix>> {
        self.order.values().next().cloned()
    }

    /// Identifier of the largest edge, if any.
    pub fn last(&self) -> Option<EdgeIndex<Ix>> {
        self.order.values().next_back().cloned()
    }

    /// Fetch an iterator over all edges, in edge order.
    #[inline]
    pub fn iter(&self) -> Iter<N, E, Ix> {
        self.order.iter()
    }

    /// Remove every edge.  Identifiers of the removed edges stay dangling;
    /// their slots are recycled with a new generation.
    pub fn clear(&mut self) {
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            entry.prev = None;
            entry.next = None;
            if entry.edge.take().is_some() {
                entry.generation = entry.generation.wrapping_add(1);
                self.vacant.push(slot);
            }
        }
        self.order.clear();
        self.weights = None;
    }

    /// Identifier of the edge immediately after `ix` in edge order.
    ///
    /// Returns `None` if `ix` is the last edge or is dangling.
    pub fn successor(&self, ix: EdgeIndex<Ix>) -> Option<EdgeIndex<Ix>> {
        self.handle(ix)?;
        self.slots[ix.index()].next.map(|slot| self.identify(slot))
    }

    /// Identifier of the edge immediately before `ix` in edge order.
    ///
    /// Returns `None` if `ix` is the first edge or is dangling.
    pub fn predecessor(&self, ix: EdgeIndex<Ix>) -> Option<EdgeIndex<Ix>> {
        self.handle(ix)?;
        self.slots[ix.index()].prev.map(|slot| self.identify(slot))
    }

    fn identify(&self, slot: usize) -> EdgeIndex<Ix> {
        EdgeIndex::new(slot, self.slots[slot].generation)
    }

    fn handle(&self, ix: EdgeIndex<Ix>) -> Option<&Rc<Edge<N, E>>> {
        self.slots.get(ix.index())
            .filter(|slot| slot.generation == ix.generation())
            .and_then(|slot| slot.edge.as_ref())
    }

    /// Store an edge in a free slot, recycling vacated slots first.
    fn allocate(&mut self, edge: Rc<Edge<N, E>>) -> EdgeIndex<Ix> {
        let (slot, ix) = match self.vacant.pop() {
            Some(slot) => (slot, EdgeIndex::new(slot, self.slots[slot].generation)),
            None => {
                let slot = self.slots.len();
                let ix = EdgeIndex::new(slot, 0);
                self.slots.push(Slot{generation: 0, edge: None, prev: None, next: None});
                (slot, ix)
            }
        };
        self.slots[slot].edge = Some(edge);
        ix
    }

    /// Vacate the slot named by `ix`, returning the edge it held.
    fn release(&mut self, ix: EdgeIndex<Ix>) -> Option<Rc<Edge<N, E>>> {
        let slot = ix.index();
        let entry = self.slots.get_mut(slot)
            .filter(|entry| entry.generation == ix.generation())?;
        let edge = entry.edge.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.vacant.push(slot);
        self.unlink(slot);
        Some(edge)
    }

    /// Detach a slot from the neighbour list, joining its neighbours.
    fn unlink(&mut self, slot: usize) {
        let prev = self.slots[slot].prev.take();
        let next = self.slots[slot].next.take();
        if let Some(p) = prev {
            self.slots[p].next = next;
        }
        if let Some(n) = next {
            self.slots[n].prev = prev;
        }
    }
}

impl<N: Element, E: Element, Ix: IndexType> EdgeSet<N, E, Ix> {
    /// Insert the edge `(source, target, weight)`.
    ///
    /// Returns the new edge's identifier, or `None` (leaving the set
    /// unchanged) if an equal edge is already stored.
    ///
    /// # Panics
    ///
    /// Panics if the set already uses every slot number representable by
    /// `Ix`.
    pub fn insert(&mut self, source: Rc<N>, target: Rc<N>, weight: E) -> Option<EdgeIndex<Ix>> {
        let edge = Edge::new(source, target, weight);
        if self.order.contains_key(&edge) {
            return None;
        }
        self.widen(edge.data());

        let edge = Rc::new(edge);
        let ix = self.allocate(edge.clone());
        self.order.insert(edge, ix);
        self.link(ix.index());
        trace!(edges = self.order.len(), slot = ix.index(), "insert edge");
        Some(ix)
    }

    /// Find the identifier of the stored edge equal to `key`.
    #[inline]
    pub fn find(&self, key: &Edge<N, E>) -> Option<EdgeIndex<Ix>> {
        self.order.get(key).cloned()
    }

    /// Remove the stored edge equal to `key`.  Returns `false` if there is
    /// none.
    pub fn remove(&mut self, key: &Edge<N, E>) -> bool {
        match self.order.remove(key) {
            Some(ix) => {
                self.release(ix);
                trace!(edges = self.order.len(), slot = ix.index(), "remove edge");
                true
            },
            None => false
        }
    }

    /// Remove the edge with the given identifier.  Returns `false` if the
    /// identifier is dangling.
    pub fn remove_index(&mut self, ix: EdgeIndex<Ix>) -> bool {
        match self.release(ix) {
            Some(edge) => {
                self.order.remove(&*edge);
                trace!(edges = self.order.len(), slot = ix.index(), "remove edge");
                true
            },
            None => false
        }
    }

    /// Fetch every edge from `source` to `target`, in ascending weight order.
    pub fn between<'a>(&'a self, source: &Rc<N>, target: &Rc<N>)
                       -> impl DoubleEndedIterator<Item=&'a Edge<N, E>> + 'a {
        self.span((source, target), (source, target))
            .into_iter()
            .flatten()
            .map(|(edge, _)| &**edge)
    }

    /// Fetch every edge leaving `source` whose target lies in
    /// `[lowest, highest]`, in edge order.
    ///
    /// Passing the smallest and largest node of the graph yields all
    /// outgoing edges of `source`.
    pub fn outgoing<'a>(&'a self, source: &Rc<N>, lowest: &Rc<N>, highest: &Rc<N>)
                        -> impl DoubleEndedIterator<Item=&'a Edge<N, E>> + 'a {
        self.span((source, lowest), (source, highest))
            .into_iter()
            .flatten()
            .map(|(edge, _)| &**edge)
    }

    /// Collect the identifiers of every edge that starts or ends at `node`.
    pub fn incident(&self, node: &N) -> IndexList<Ix> {
        self.order.iter()
            .filter(|&(edge, _)| edge.source() == node || edge.target() == node)
            .map(|(_, ix)| *ix)
            .collect()
    }

    /// Give the edge `ix` new endpoints, moving it to its new place in the
    /// edge order.  The edge keeps its identifier.
    ///
    /// If an equal edge is already stored, the two coalesce: the stored edge
    /// survives, `ix` becomes dangling, and the survivor's identifier is
    /// returned.  Returns `None` if `ix` is dangling.
    pub fn relink(&mut self, ix: EdgeIndex<Ix>, source: Rc<N>, target: Rc<N>) -> Option<EdgeIndex<Ix>> {
        let current = self.handle(ix)?.clone();
        self.order.remove(&*current);
        let rewritten = current.relinked(source, target);

        if let Some(&survivor) = self.order.get(&rewritten) {
            self.release(ix);
            trace!(slot = ix.index(), survivor = survivor.index(), "coalesce edge");
            return Some(survivor);
        }

        let rewritten = Rc::new(rewritten);
        self.unlink(ix.index());
        self.slots[ix.index()].edge = Some(rewritten.clone());
        self.order.insert(rewritten, ix);
        self.link(ix.index());
        Some(ix)
    }

    /// Thread an occupied slot into the neighbour list at its place in the
    /// edge order.
    fn link(&mut self, slot: usize) {
        let (prev, next) = match self.slots[slot].edge {
            Some(ref edge) => {
                let edge: &Edge<N, E> = edge;
                (self.order.range::<Edge<N, E>, _>((Unbounded, Excluded(edge)))
                     .next_back()
                     .map(|(_, ix)| ix.index()),
                 self.order.range::<Edge<N, E>, _>((Excluded(edge), Unbounded))
                     .next()
                     .map(|(_, ix)| ix.index()))
            },
            None => return,
        };
        self.slots[slot].prev = prev;
        self.slots[slot].next = next;
        if let Some(p) = prev {
            self.slots[p].next = Some(slot);
        }
        if let Some(n) = next {
            self.slots[n].prev = Some(slot);
        }
    }

    /// Range of the index between the bounding keys
    /// `(lower.0, lower.1, min_weight)` and `(upper.0, upper.1, max_weight)`.
    fn span(&self, lower: (&Rc<N>, &Rc<N>), upper: (&Rc<N>, &Rc<N>)) -> Option<Span<N, E, Ix>> {
        let (min, max) = self.weights.as_ref()?;
        let lower = Edge::new(lower.0.clone(), lower.1.clone(), min.clone());
        let upper = Edge::new(upper.0.clone(), upper.1.clone(), max.clone());
        Some(self.order.range::<Edge<N, E>, _>((Included(&lower), Included(&upper))))
    }

    fn widen(&mut self, weight: &E) {
        if self.order.is_empty() {
            self.weights = None;
        }
        match self.weights {
            Some((ref mut min, ref mut max)) => {
                if weight < min {
                    *min = weight.clone();
                }
                if weight > max {
                    *max = weight.clone();
                }
            },
            None => self.weights = Some((weight.clone(), weight.clone())),
        }
    }

    /// Check the internal bookkeeping: every slot and index entry agree, the
    /// neighbour links follow the edge order, and the cached weight bounds
    /// cover every stored weight.
    ///
    /// # Panics
    ///
    /// Panics with a description of the first inconsistency found.
    pub fn check_invariants(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.edge.is_some()).count();
        panic_unless_eq!(self.order.len(), occupied, "occupied slots");
        panic_unless_eq!(self.slots.len() - occupied, self.vacant.len(), "vacant slots");

        let mut prev: Option<usize> = None;
        for (edge, ix) in self.order.iter() {
            panic_unless_eq!(prev, self.slots[ix.index()].prev, "backward link of slot {}", ix.index());
            if let Some(p) = prev {
                panic_unless_eq!(Some(ix.index()), self.slots[p].next, "forward link of slot {}", p);
            }
            prev = Some(ix.index());

            match self.handle(*ix) {
                Some(stored) => panic_unless!(Rc::ptr_eq(edge, stored),
                                              "slot {} holds a different edge than the index", ix.index()),
                None => panic!("index refers to dangling slot {}", ix.index()),
            }
            if let Some((ref min, ref max)) = self.weights {
                panic_unless!(min <= edge.data() && edge.data() <= max,
                              "weight outside cached bounds in slot {}", ix.index());
            }
        }
        if let Some(p) = prev {
            panic_unless_eq!(None, self.slots[p].next, "forward link of last slot {}", p);
        }
    }
}

impl<N, E, Ix: IndexType> Default for EdgeSet<N, E, Ix> {
    #[inline(always)]
    fn default() -> Self {
        EdgeSet::new()
    }
}
