//! Interfaces (traits) shared by the graph components.

use std::fmt::Debug;

/// Any type that can be stored as a node or as an edge weight.
///
/// Values must be copyable and must admit a strict total order compatible
/// with equality; the order decides both uniqueness and enumeration order.
/// This trait is implemented automatically for every such type.
pub trait Element: Clone + Ord {}

impl<T> Element for T where T: Clone + Ord {}


/// Interface provided by edge identifiers.
///
/// An identifier names one slot of the edge arena together with the
/// generation the slot had when the edge was stored there.  Reusing a slot
/// bumps its generation, so stale identifiers never alias a newer edge.
pub trait Id: Copy + Debug + PartialEq {
    /// Create an identifier for the given slot and generation.
    fn new(slot: usize, generation: u32) -> Self;

    /// Retrieve the slot number of the identifier.
    fn index(&self) -> usize;

    /// Retrieve the generation of the identifier.
    fn generation(&self) -> u32;
}
