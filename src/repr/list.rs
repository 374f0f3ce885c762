/*!
# Adjacency-List Graph

[`Graph`] is an arena of vertices: node `i` carries the `i`-th label and owns the
[`Neighborhood`] holding the indices of its out-neighbors. The number of vertices is fixed at
construction, only edges can be added afterwards.
*/

use crate::{allocation::try_vec_with_capacity, repr::macros::impl_labelled_graph_ops, testing::test_graph_ops};

use super::*;

/// A labelled graph storing one adjacency list per vertex.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let graph = Graph::from_strings(GraphType::Directed, "ABC", "AB AC").unwrap();
///
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 2);
/// // the edge added last comes first
/// assert_eq!(graph.neighbors_of(0).collect::<Vec<_>>(), vec![2, 1]);
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    labels: LabelIndex,
    out_nbs: Vec<Neighborhood>,
    graph_type: GraphType,
    num_edges: NumEdges,
}

impl_labelled_graph_ops!(Graph);

impl Graph {
    /// Returns the neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn neighborhood_of(&self, u: Node) -> &Neighborhood {
        &self.out_nbs[u as usize]
    }

    /// Returns the label index of this graph
    pub fn label_index(&self) -> &LabelIndex {
        &self.labels
    }
}

impl GraphFromLabels for Graph {
    fn from_labels(
        graph_type: GraphType,
        labels: impl IntoIterator<Item = Label>,
    ) -> GraphResult<Self> {
        let labels = LabelIndex::try_new(labels)?;
        let n = labels.number_of_nodes() as usize;

        let mut out_nbs = try_vec_with_capacity(n)?;
        out_nbs.resize_with(n, Neighborhood::new);

        Ok(Self {
            labels,
            out_nbs,
            graph_type,
            num_edges: 0,
        })
    }

    fn graph_type(&self) -> GraphType {
        self.graph_type
    }
}

impl AdjacencyList for Graph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.out_nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].num_of_neighbors()
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].has_neighbor(v)
    }
}

impl GraphEdgeEditing for Graph {
    fn try_add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        assert!(v < self.number_of_nodes());

        let existed = self.out_nbs[u as usize].try_add_neighbor(v)?;
        if !existed {
            self.num_edges += 1;
        }
        Ok(existed)
    }
}

test_graph_ops!(graph_tests, Graph, (GraphFromLabels, AdjacencyList, GraphEdgeEditing));

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn from_strings_directed() {
        let graph =
            Graph::from_strings(GraphType::Directed, "ABCDEFG", "AB AC BG BE CF DA DB DC DF DG GF")
                .unwrap();

        assert_eq!(graph.number_of_nodes(), 7);
        assert_eq!(graph.number_of_edges(), 11);
        assert_eq!(graph.graph_type(), GraphType::Directed);

        let d = graph.node_of('D').unwrap();
        assert_eq!(
            graph.neighbors_of(d).map(|v| graph.label_of(v)).collect::<String>(),
            "GFCBA"
        );
        assert_eq!(graph.degree_of(graph.node_of('E').unwrap()), 0);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
    }

    #[test]
    fn from_strings_undirected() {
        let graph = Graph::from_strings(GraphType::Undirected, "ABC", "AB BC").unwrap();

        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(
            graph.ordered_edges().collect_vec(),
            vec![Edge(0, 1), Edge(1, 0), Edge(1, 2), Edge(2, 1)]
        );
        // B got A first, then C
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![2, 0]);
    }

    #[test]
    fn add_labelled_edge_is_idempotent() {
        let mut graph = Graph::from_strings(GraphType::Directed, "ABC", "").unwrap();

        assert_eq!(graph.add_labelled_edge('A', 'B').unwrap(), EdgeInsertion::Inserted);
        assert_eq!(graph.add_labelled_edge('A', 'C').unwrap(), EdgeInsertion::Inserted);
        let before = graph.neighborhood_of(0).clone();

        assert_eq!(
            graph.add_labelled_edge('A', 'B').unwrap(),
            EdgeInsertion::AlreadyPresent
        );
        assert_eq!(graph.neighborhood_of(0), &before);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn add_labelled_edge_with_unknown_label() {
        let mut graph = Graph::from_strings(GraphType::Directed, "AB", "AB").unwrap();

        assert_eq!(
            graph.add_labelled_edge('A', 'Q').unwrap(),
            EdgeInsertion::UnknownLabel
        );
        assert_eq!(
            graph.add_labelled_edge('Q', 'A').unwrap(),
            EdgeInsertion::UnknownLabel
        );
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn tiny_graphs() {
        let empty = Graph::from_strings(GraphType::Directed, "", "").unwrap();
        assert!(empty.is_empty());
        assert!(empty.is_singleton_graph());
        assert_eq!(empty.edges().count(), 0);

        let single = Graph::from_strings(GraphType::Undirected, "A", "AA").unwrap();
        assert_eq!(single.number_of_nodes(), 1);
        assert_eq!(single.number_of_edges(), 1);
        assert!(single.has_edge(0, 0));
    }

    #[test]
    fn in_degrees() {
        let graph = Graph::from_strings(GraphType::Directed, "ABCD", "AB CB DB BA").unwrap();
        assert_eq!(graph.in_degrees().unwrap(), vec![1, 3, 0, 0]);
        assert_eq!(graph.max_degree(), 1);
        assert_eq!(graph.labels().collect::<String>(), "ABCD");
    }
}
