//! Text rendering of graphs.
//!
//! Every node is written as a block: the node, ` (`, then one line per
//! outgoing edge of the form `  <dst> | <weight>`, then `)`.  Blocks appear in
//! ascending node order and edge lines in ascending `(dst, weight)` order; an
//! empty graph renders as the empty string.

use std::fmt::{self, Display};

use itertools::Itertools;

use super::digraph::Graph;
use super::interface::Element;

impl<N, E> Display for Graph<N, E>
    where N: Element + Display,
          E: Element + Display
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut edges = self.iter().peekable();
        for node in self.iter_nodes() {
            writeln!(f, "{} (", node)?;
            for (_, dst, weight) in edges.peeking_take_while(|&(src, _, _)| src == node) {
                writeln!(f, "  {} | {}", dst, weight)?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
