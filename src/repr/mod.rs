/*!
# Graph Representations

- [`Graph`] stores one [`Neighborhood`] (a list of node indices) per vertex.
- [`GraphMatrix`] stores an `n x n` bit matrix.

Both keep their vertex labels in a [`LabelIndex`] and implement the traits in [`crate::ops`],
so every algorithm in [`crate::algo`] runs on either of them.
*/

use fxhash::FxHashMap;

use crate::{allocation::try_vec_with_capacity, node::node_from_index, ops::*, *};

mod list;
mod matrix;
mod neighborhood;

pub use list::*;
pub use matrix::*;
pub use neighborhood::*;

/// How the edge description of a graph is interpreted at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphType {
    /// Every edge code `uv` inserts the edge `u -> v`
    #[default]
    Directed,
    /// Every edge code `uv` inserts both `u -> v` and `v -> u`
    Undirected,
}

/// Vertex labels in index order together with a reverse lookup table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelIndex {
    labels: Vec<Label>,
    nodes: FxHashMap<Label, Node>,
}

impl LabelIndex {
    /// Assigns node `i` to the `i`-th label. Fails if a label is repeated.
    pub fn try_new(labels: impl IntoIterator<Item = Label>) -> GraphResult<Self> {
        let labels = labels.into_iter();
        let mut index = Self {
            labels: try_vec_with_capacity(labels.size_hint().0)?,
            nodes: FxHashMap::default(),
        };

        for label in labels {
            let u = node_from_index(index.labels.len())
                .ok_or_else(|| GraphError::invalid_argument("too many vertices"))?;

            if index.nodes.insert(label, u).is_some() {
                return Err(GraphError::invalid_argument(format!(
                    "vertex label '{label}' is repeated"
                )));
            }
            crate::allocation::try_push(&mut index.labels, label)?;
        }

        Ok(index)
    }

    /// Number of labels
    pub fn number_of_nodes(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Label of node `u`
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> Label {
        self.labels[u as usize]
    }

    /// Node carrying `label`
    pub fn node_of(&self, label: Label) -> Option<Node> {
        self.nodes.get(&label).copied()
    }

    /// All labels in index order
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }
}

pub(crate) mod macros {
    macro_rules! impl_labelled_graph_ops {
        ($struct:ident) => {
            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.labels.number_of_nodes()
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl Labelled for $struct {
                fn label_of(&self, u: Node) -> Label {
                    self.labels.label_of(u)
                }

                fn node_of(&self, label: Label) -> Option<Node> {
                    self.labels.node_of(label)
                }
            }

            impl std::fmt::Display for $struct {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    crate::io::write_graph(self, f)
                }
            }
        };
    }

    pub(super) use impl_labelled_graph_ops;
}
