//! Common types used by multiple graph components.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};

use num_traits::{NumCast, ToPrimitive};

use super::interface::Id;

// ================================================================
// Indices: types used to identify edges.

/// Default integer type used to number edge slots.
pub type DefaultIndexType = u32;


/// Any integer type used as the underlying type for edge slot numbers.
pub trait IndexType: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}
impl<T> IndexType for T where T: Copy + Eq + Hash + Ord + Debug + NumCast + ToPrimitive + 'static {}


/// Type used to identify the edges of a graph.
///
/// Identifiers stay valid for as long as the edge they name is stored,
/// regardless of what else is inserted or removed.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct EdgeIndex<T: IndexType = DefaultIndexType> {
    slot: T,
    generation: u32,
}

impl<T: IndexType> Id for EdgeIndex<T> {
    /// # Panics
    ///
    /// Panics if `slot` does not fit in the index type.
    #[inline]
    fn new(slot: usize, generation: u32) -> Self {
        match NumCast::from(slot) {
            Some(slot) => EdgeIndex{slot: slot, generation: generation},
            None => panic!("edge slot {} does not fit in index type {}", slot,
                           std::any::type_name::<T>()),
        }
    }

    #[inline(always)]
    fn index(&self) -> usize {
        self.slot.to_usize().unwrap_or(usize::MAX)
    }

    #[inline(always)]
    fn generation(&self) -> u32 {
        self.generation
    }
}


// ----------------------------------------------------------------
// Container identity

static NEXT_GRAPH_ID: AtomicUsize = AtomicUsize::new(1);

/// Process-unique identity of one graph container.
///
/// Cursors remember the identity of the graph that produced them, so cursors
/// from different graphs never compare equal.  Moving a graph keeps its
/// identity; cloning one creates a new identity.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub struct GraphId(usize);

impl GraphId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}
