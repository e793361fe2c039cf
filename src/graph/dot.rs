//! GraphViz output.
//!
//! Nodes are numbered `N0`, `N1`, ... in ascending node order and labelled
//! with their `Display` text; each edge is labelled with its weight.

use std::borrow::Cow;
use std::fmt::Display;
use std::io;

use dot;

use super::digraph::Graph;
use super::interface::Element;

type DotEdge<'a, E> = (usize, usize, &'a E);

/// Borrowed view of a graph that numbers its nodes for rendering.
struct Dot<'a, N: 'a, E: 'a> {
    nodes: Vec<&'a N>,
    edges: Vec<DotEdge<'a, E>>
}

impl<'a, N: Element, E: Element> Dot<'a, N, E> {
    fn new(graph: &'a Graph<N, E>) -> Self {
        let nodes: Vec<&'a N> = graph.iter_nodes().collect();
        let number = |value: &N| nodes.binary_search(&value).unwrap_or(nodes.len());
        let edges = graph.iter()
            .map(|(src, dst, weight)| (number(src), number(dst), weight))
            .collect();
        Dot{nodes: nodes, edges: edges}
    }
}

impl<'a, N, E> dot::GraphWalk<'a, usize, DotEdge<'a, E>> for Dot<'a, N, E> {
    fn nodes(&'a self) -> dot::Nodes<'a, usize> {
        Cow::Owned((0..self.nodes.len()).collect())
    }
    fn edges(&'a self) -> dot::Edges<'a, DotEdge<'a, E>> {
        Cow::Borrowed(&self.edges[..])
    }
    fn source(&'a self, edge: &DotEdge<'a, E>) -> usize {
        edge.0
    }
    fn target(&'a self, edge: &DotEdge<'a, E>) -> usize {
        edge.1
    }
}

impl<'a, N: Display, E: Display> dot::Labeller<'a, usize, DotEdge<'a, E>> for Dot<'a, N, E> {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("G").expect("`G` is a valid graph identifier")
    }
    fn node_id(&'a self, n: &usize) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).expect("`N<digits>` is a valid node identifier")
    }
    fn node_label(&'a self, n: &usize) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(format!("{}", self.nodes[*n]).into())
    }
    fn edge_label(&'a self, e: &DotEdge<'a, E>) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(format!("{}", e.2).into())
    }
}

impl<N, E> Graph<N, E>
    where N: Element + Display,
          E: Element + Display
{
    /// Write the graph to `out` in GraphViz `dot` format.
    ///
    /// ```rust
    /// use gdwg::Graph;
    ///
    /// # fn main() -> std::io::Result<()> {
    /// let g = Graph::from_edges(vec![("a", "b", 1)]);
    /// let mut out = Vec::new();
    /// g.to_dot(&mut out)?;
    /// let text = String::from_utf8_lossy(&out);
    /// assert!(text.starts_with("digraph G {"));
    /// assert!(text.contains("N0 -> N1"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_dot<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        dot::render(&Dot::new(self), out)
    }
}
