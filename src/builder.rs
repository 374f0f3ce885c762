/*!
# Graph Construction

[`GraphBuilder`] turns vertex labels and labelled edges into any graph representation.
It is configured with the setter pattern before calling [`GraphBuilder::build`] or
[`GraphBuilder::build_from_strings`]:

```
use lgraphs::{builder::*, prelude::*};

let graph: Graph = GraphBuilder::new()
    .mode(GraphType::Undirected)
    .dangling_edges(DanglingEdges::Reject)
    .build_from_strings("ABC", "AB BC")
    .unwrap();

assert_eq!(graph.number_of_edges(), 4);
```
*/

use tracing::{debug, warn};

use crate::{io::EdgeCodeReader, prelude::*};

/// What to do with an edge whose endpoint label does not name a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DanglingEdges {
    /// Drop the edge silently
    Ignore,
    /// Drop the edge and emit a warning
    #[default]
    Warn,
    /// Fail with [`GraphError::InvalidArgument`]
    Reject,
}

/// Configurable graph construction
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    graph_type: GraphType,
    dangling_edges: DanglingEdges,
    reader: EdgeCodeReader,
}

impl GraphBuilder {
    /// Creates a new (default) builder: directed, dangling edges are dropped with a warning,
    /// edge codes are separated by spaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how edges are interpreted
    pub fn mode(mut self, graph_type: GraphType) -> Self {
        self.graph_type = graph_type;
        self
    }

    /// Sets the policy for edges referring to unknown labels
    pub fn dangling_edges(mut self, policy: DanglingEdges) -> Self {
        self.dangling_edges = policy;
        self
    }

    /// Sets the separator between two edge codes
    pub fn separator(mut self, separator: char) -> Self {
        self.reader = self.reader.separator(separator);
        self
    }

    /// Builds a graph with one vertex per label (in order) and the given edges.
    ///
    /// In [`GraphType::Undirected`] mode every edge is inserted in both directions.
    /// Repeated edges are inserted once.
    pub fn build<G, L, E>(&self, labels: L, edges: E) -> GraphResult<G>
    where
        G: GraphFromLabels + GraphEdgeEditing + GraphEdgeOrder + Labelled,
        L: IntoIterator<Item = Label>,
        E: IntoIterator<Item = (Label, Label)>,
    {
        self.build_fallible(labels, edges.into_iter().map(Ok))
    }

    /// Builds a graph from a string of vertex labels and a string of edge codes, see
    /// [`crate::io`] for the format.
    pub fn build_from_strings<G>(&self, labels: &str, edge_codes: &str) -> GraphResult<G>
    where
        G: GraphFromLabels + GraphEdgeEditing + GraphEdgeOrder + Labelled,
    {
        self.build_fallible(labels.chars(), self.reader.read(edge_codes))
    }

    fn build_fallible<G, L, E>(&self, labels: L, edges: E) -> GraphResult<G>
    where
        G: GraphFromLabels + GraphEdgeEditing + GraphEdgeOrder + Labelled,
        L: IntoIterator<Item = Label>,
        E: IntoIterator<Item = GraphResult<(Label, Label)>>,
    {
        let mut graph = G::from_labels(self.graph_type, labels)?;

        for edge in edges {
            let (from, to) = edge?;
            self.insert_edge(&mut graph, from, to)?;
        }

        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            graph_type = ?self.graph_type,
            "built graph"
        );

        Ok(graph)
    }

    fn insert_edge<G>(&self, graph: &mut G, from: Label, to: Label) -> GraphResult<()>
    where
        G: GraphEdgeEditing + Labelled,
    {
        let (Some(u), Some(v)) = (graph.node_of(from), graph.node_of(to)) else {
            let unknown = if graph.node_of(from).is_none() { from } else { to };
            return match self.dangling_edges {
                DanglingEdges::Ignore => Ok(()),
                DanglingEdges::Warn => {
                    warn!(%from, %to, %unknown, "dropping edge with unknown label");
                    Ok(())
                }
                DanglingEdges::Reject => Err(GraphError::unknown_label(unknown)),
            };
        };

        graph.try_add_edge(u, v)?;
        if self.graph_type == GraphType::Undirected {
            graph.try_add_edge(v, u)?;
        }
        Ok(())
    }
}

/// Builds an adjacency-list [`Graph`] from labels and labelled edges with the default policy
/// for dangling edges.
///
/// # Example
/// ```
/// use lgraphs::{builder::build_graph, prelude::*};
///
/// let graph = build_graph(GraphType::Directed, "ABC".chars(), [('A', 'B'), ('B', 'C')]).unwrap();
/// assert_eq!(graph.number_of_edges(), 2);
/// ```
pub fn build_graph<L, E>(graph_type: GraphType, vertices: L, edges: E) -> GraphResult<Graph>
where
    L: IntoIterator<Item = Label>,
    E: IntoIterator<Item = (Label, Label)>,
{
    GraphBuilder::new().mode(graph_type).build(vertices, edges)
}
