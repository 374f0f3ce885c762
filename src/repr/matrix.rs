/*!
# Adjacency-Matrix Graph

[`GraphMatrix`] stores the edges of `n` labelled vertices in a row-major `n x n` bit matrix:
bit `u * n + v` is set iff the edge `u -> v` exists. Edge queries are `O(1)`, neighborhood
scans are `O(n)` and report neighbors in ascending index order.
*/

use bitvec::prelude::*;

use crate::{allocation::try_filled_vec, repr::macros::impl_labelled_graph_ops, testing::test_graph_ops};

use super::*;

/// A labelled graph storing its edges in an adjacency matrix.
///
/// # Example
/// ```
/// use lgraphs::prelude::*;
///
/// let graph = GraphMatrix::from_strings(GraphType::Undirected, "ABC", "AC").unwrap();
///
/// assert!(graph.has_edge(0, 2));
/// assert!(graph.has_edge(2, 0));
/// assert!(!graph.has_edge(0, 1));
/// ```
#[derive(Clone, Debug)]
pub struct GraphMatrix {
    labels: LabelIndex,
    matrix: BitVec,
    graph_type: GraphType,
    num_edges: NumEdges,
}

impl_labelled_graph_ops!(GraphMatrix);

impl GraphMatrix {
    #[inline]
    fn row(&self, u: Node) -> &BitSlice {
        let n = self.len();
        let begin = u as usize * n;
        &self.matrix[begin..begin + n]
    }

    #[inline]
    fn bit_index(&self, u: Node, v: Node) -> usize {
        let n = self.len();
        assert!((u as usize) < n && (v as usize) < n);
        u as usize * n + v as usize
    }
}

impl GraphFromLabels for GraphMatrix {
    fn from_labels(
        graph_type: GraphType,
        labels: impl IntoIterator<Item = Label>,
    ) -> GraphResult<Self> {
        let labels = LabelIndex::try_new(labels)?;
        let n = labels.number_of_nodes() as usize;

        let bits = n
            .checked_mul(n)
            .ok_or_else(|| GraphError::out_of_memory(usize::MAX))?;
        let words = bits.div_ceil(usize::BITS as usize);

        let mut matrix = BitVec::from_vec(try_filled_vec(words, 0usize)?);
        matrix.truncate(bits);

        Ok(Self {
            labels,
            matrix,
            graph_type,
            num_edges: 0,
        })
    }

    fn graph_type(&self) -> GraphType {
        self.graph_type
    }
}

impl AdjacencyList for GraphMatrix {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u).iter_ones().map(|v| v as Node)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.row(u).count_ones() as NumNodes
    }

    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.matrix[self.bit_index(u, v)]
    }
}

impl GraphEdgeEditing for GraphMatrix {
    fn try_add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        let idx = self.bit_index(u, v);
        let existed = self.matrix.replace(idx, true);
        if !existed {
            self.num_edges += 1;
        }
        Ok(existed)
    }
}

impl TryFrom<&Graph> for GraphMatrix {
    type Error = GraphError;

    /// Copies labels, graph type and all edges of an adjacency-list graph
    fn try_from(graph: &Graph) -> GraphResult<Self> {
        let mut matrix = Self::from_labels(graph.graph_type(), graph.labels())?;
        matrix.try_add_edges(graph.edges())?;
        Ok(matrix)
    }
}

test_graph_ops!(graph_matrix_tests, GraphMatrix, (GraphFromLabels, AdjacencyList, GraphEdgeEditing));
