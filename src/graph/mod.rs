//! Ordered directed weighted graph.
//!
//! The container is built from three parts:
//!
//!   * a [node set](nodes) that owns each node value once, behind a shared
//!     handle that edges refer to;
//!   * an [edge set](edges) that stores edge records in a generational slot
//!     arena and indexes them by the lexicographic key
//!     `(src, dst, weight)`;
//!   * [cursors](Cursor), copyable handles to a position in the
//!     edge order that track edge identity rather than position.
//!
//! Because the edge key is lexicographic, all edges leaving a node form one
//! contiguous run of the order, and all edges between a given pair of nodes
//! form a contiguous run inside that.  Connection queries locate these runs
//! with a pair of bounding keys built from the smallest and largest weight
//! ever inserted, so no partial-key comparator is needed.
//!
//! [`Graph`] composes the parts and exposes the public
//! operations.

mod common;
mod digraph;
mod fmt;
pub mod edges;
pub mod interface;
pub mod iter;
pub mod nodes;
pub mod weighted;

#[cfg(feature = "dot")]
pub mod dot;

pub use self::common::{DefaultIndexType, EdgeIndex, GraphId, IndexType};
pub use self::digraph::Graph;
pub use self::interface::{Element, Id};
pub use self::iter::{Cursor, EdgeRef, Edges};
pub use self::weighted::{Edge, Value};
