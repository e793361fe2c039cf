#![warn(missing_docs)]

//! Generic directed weighted graph.
//!
//! [`Graph<N, E>`](graph::Graph) stores a set of distinct nodes of type `N`
//! and a set of distinct edges `(src, dst, weight)`.  Multiple edges between
//! the same pair of nodes are allowed as long as their weights differ, and
//! self-loops are allowed.  Both sets are kept sorted, so membership tests and
//! edge lookups are logarithmic and every enumeration is deterministic.
//!
//! ```rust
//! use gdwg::Graph;
//!
//! # fn main() -> gdwg::Result<()> {
//! let mut g = Graph::<i32, &str>::from_nodes([1, 2, 3]);
//! g.insert_edge(&1, &2, "cat")?;
//! g.insert_edge(&1, &2, "dog")?;
//! g.insert_edge(&1, &3, "rat")?;
//!
//! assert_eq!(g.weights(&1, &2)?, vec!["cat", "dog"]);
//! assert_eq!(g.connections(&1)?, vec![2, 3]);
//! assert_eq!(g.to_string(), "1 (\n  2 | cat\n  2 | dog\n  3 | rat\n)\n2 (\n)\n3 (\n)\n");
//! # Ok(())
//! # }
//! ```

extern crate itertools;
extern crate num_traits;
extern crate smallvec;
extern crate thiserror;
extern crate tracing;

#[cfg(feature = "dot")]
extern crate dot;

#[macro_use]
pub mod util;

pub mod error;
pub mod graph;

pub use error::{GraphError, Operation, Result};
pub use graph::{Cursor, EdgeRef, Element, Graph, Value};
