use std::ops::Range;

use itertools::Itertools;

use crate::{allocation::try_filled_vec, builder::GraphBuilder, repr::GraphType, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending index order.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph.
    /// An undirected edge `{u, v}` with `u != v` is counted twice.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the out-neighbors of a given vertex in stored order.
    /// For adjacency lists this is the reverse insertion order, i.e. the most recently added
    /// edge comes first.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if the edge `(u, v)` exists in the graph.
    /// ** Panics if `u >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.neighbors_of(u).any(|w| w == v)
    }

    /// Returns an iterator over the out-degrees of all vertices
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum out-degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Computes the in-degree of every vertex by scanning all neighborhoods.
    fn in_degrees(&self) -> GraphResult<Vec<NumNodes>> {
        let mut in_degs = try_filled_vec(self.len(), 0 as NumNodes)?;
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        Ok(in_degs)
    }

    /// Returns an iterator over outgoing edges of a given vertex in stored order.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph, grouped by source vertex.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            let mut edges = self.edges_of(u).collect_vec();
            edges.sort_unstable();
            edges.into_iter()
        })
    }
}

/// Maps between node indices and vertex labels
pub trait Labelled: GraphNodeOrder {
    /// Returns the label of a given vertex.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> Label;

    /// Returns the vertex carrying `label`, if any.
    fn node_of(&self, label: Label) -> Option<Node>;

    /// Returns the labels of all vertices in index order
    fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.vertices().map(|u| self.label_of(u))
    }
}

/// Outcome of inserting an edge addressed by labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// The edge was new and has been added
    Inserted,
    /// The edge existed before, the graph is unchanged
    AlreadyPresent,
    /// At least one of the labels does not name a vertex, the graph is unchanged
    UnknownLabel,
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNodeOrder {
    /// Adds the edge `(u, v)` to the graph unless it is already present.
    /// Returns *true* if the edge was present before.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool>;

    /// Adds all edges in the collection, skipping edges that are already present
    fn try_add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> GraphResult<()> {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.try_add_edge(u, v)?;
        }
        Ok(())
    }

    /// Adds the directed edge `from -> to` where both endpoints are given by label.
    /// Unknown labels leave the graph untouched.
    fn add_labelled_edge(&mut self, from: Label, to: Label) -> GraphResult<EdgeInsertion>
    where
        Self: Labelled,
    {
        let (Some(u), Some(v)) = (self.node_of(from), self.node_of(to)) else {
            return Ok(EdgeInsertion::UnknownLabel);
        };

        Ok(if self.try_add_edge(u, v)? {
            EdgeInsertion::AlreadyPresent
        } else {
            EdgeInsertion::Inserted
        })
    }
}

/// A super trait for creating a graph from scratch from a list of labels
pub trait GraphFromLabels: Sized {
    /// Creates a graph without edges that has one vertex per label, in order.
    /// Fails if a label is repeated.
    fn from_labels(
        graph_type: GraphType,
        labels: impl IntoIterator<Item = Label>,
    ) -> GraphResult<Self>;

    /// Returns how the edges of this graph were interpreted at construction
    fn graph_type(&self) -> GraphType;

    /// Creates a graph from a string of vertex labels and a string of edge codes such as
    /// `"AB AC"`, using the default [`GraphBuilder`] settings.
    fn from_strings(graph_type: GraphType, labels: &str, edge_codes: &str) -> GraphResult<Self>
    where
        Self: GraphEdgeEditing + GraphEdgeOrder + Labelled,
    {
        GraphBuilder::new()
            .mode(graph_type)
            .build_from_strings(labels, edge_codes)
    }

    /// Creates a graph from labels and labelled edges, using the default [`GraphBuilder`] settings.
    fn from_labelled_edges(
        graph_type: GraphType,
        labels: impl IntoIterator<Item = Label>,
        edges: impl IntoIterator<Item = (Label, Label)>,
    ) -> GraphResult<Self>
    where
        Self: GraphEdgeEditing + GraphEdgeOrder + Labelled,
    {
        GraphBuilder::new().mode(graph_type).build(labels, edges)
    }
}
