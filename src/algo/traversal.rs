/*!
Graph traversal algorithms.

This module provides:
- [`depth_first_search`] and [`breadth_first_search`], which number *every* vertex of a graph in
  visitation order, restarting at the lowest unvisited vertex until all components are covered,
- [`traverse_with`], the generic loop behind both, parameterized by a [`NodeSequencer`],
- lazy single-source traversal iterators ([`TraversalSearch`], [`DFS`], [`BFS`]).

All traversals mark a node as visited when it is *popped*, not when it is pushed, and push the
neighbors of a node in their stored order. With a stack this yields the visitation order of the
recursive textbook DFS on adjacency lists that prepend new edges; a node may therefore sit in
the frontier more than once.
*/

use bitvec::prelude::*;
use tracing::{debug, trace};

use super::*;

/// Runs the visit-on-pop traversal over all components of `graph`, using `sequencer` as the
/// frontier, and returns the 1-based visitation number of every node.
///
/// Start nodes are tried in ascending index order. Fails only if the sequencer refuses a node
/// or memory runs out.
pub fn traverse_with<G, S>(graph: &G, mut sequencer: S) -> GraphResult<Vec<Rank>>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    let mut counts = try_filled_vec(graph.len(), UNVISITED)?;
    let mut count: Rank = 0;

    for start in graph.vertices() {
        if counts[start as usize] != UNVISITED {
            continue;
        }

        sequencer.push(start)?;
        while let Some(u) = sequencer.pop() {
            if counts[u as usize] != UNVISITED {
                continue;
            }

            count += 1;
            counts[u as usize] = count;
            trace!(node = u, rank = count, "visit");

            for v in graph.neighbors_of(u) {
                if counts[v as usize] == UNVISITED {
                    sequencer.push(v)?;
                }
            }
        }
    }

    debug!(nodes = graph.number_of_nodes(), "traversal finished");
    Ok(counts)
}

/// Numbers all nodes of `graph` in depth-first order (stack frontier).
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_strings(GraphType::Directed, "ABCDEFG", "AB AC BG BE CF DA DB DC DF DG GF").unwrap();
/// // A, B, G, F, E, C, D
/// assert_eq!(depth_first_search(&g).unwrap(), vec![1, 2, 6, 7, 5, 4, 3]);
/// ```
pub fn depth_first_search<G: AdjacencyList>(graph: &G) -> GraphResult<Vec<Rank>> {
    traverse_with(graph, VertexStack::new())
}

/// Numbers all nodes of `graph` in breadth-first order (queue frontier).
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_strings(GraphType::Directed, "ABCDEFG", "AB AC BG BE CF DA DB DC DF DG GF").unwrap();
/// // A, C, B, F, E, G, D
/// assert_eq!(breadth_first_search(&g).unwrap(), vec![1, 3, 2, 7, 5, 4, 6]);
/// ```
pub fn breadth_first_search<G: AdjacencyList>(graph: &G) -> GraphResult<Vec<Rank>> {
    traverse_with(graph, VertexQueue::new())
}

/// Lazy single-source traversal.
///
/// Yields the nodes reachable from the start node in visitation order. Parameterized by the
/// frontier, see [`DFS`] and [`BFS`]. Items are results as the frontier may fail to grow.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    graph: &'a G,
    visited: BitVec,
    sequencer: S,
    failed: bool,
}

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, VertexStack>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VertexQueue>;

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// Fails with [`GraphError::InvalidArgument`] if `start` is not a node of `graph`.
    pub fn new(graph: &'a G, start: Node, mut sequencer: S) -> GraphResult<Self> {
        if start >= graph.number_of_nodes() {
            return Err(GraphError::invalid_argument(format!(
                "start node {start} is out of range for {} nodes",
                graph.number_of_nodes()
            )));
        }

        let words = graph.len().div_ceil(usize::BITS as usize);
        let mut visited = BitVec::from_vec(try_filled_vec(words, 0usize)?);
        visited.truncate(graph.len());

        sequencer.push(start)?;

        Ok(Self {
            graph,
            visited,
            sequencer,
            failed: false,
        })
    }

    /// Returns *true* if `u` has already been yielded.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited[u as usize]
    }

    /// Tries to restart the search at the lowest yet unvisited node and returns
    /// *true* iff successful. Requires that search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> GraphResult<bool> {
        debug_assert!(self.sequencer.is_empty());
        match self.visited.first_zero() {
            None => Ok(false),
            Some(u) => {
                self.sequencer.push(u as Node)?;
                Ok(true)
            }
        }
    }
}

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = GraphResult<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let u = self.sequencer.pop()?;
            if self.visited.replace(u as usize, true) {
                continue;
            }

            for v in self.graph.neighbors_of(u) {
                if !self.visited[v as usize] {
                    if let Err(err) = self.sequencer.push(v) {
                        self.failed = true;
                        return Some(Err(err));
                    }
                }
            }

            return Some(Ok(u));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.visited.count_zeros()))
    }
}

/// Extension trait for traversal iterators that computes the visitation numbers of the
/// nodes they yield.
pub trait RankFromOrder: Iterator<Item = GraphResult<Node>> + Sized {
    /// Number of nodes of the traversed graph
    fn number_of_graph_nodes(&self) -> NumNodes;

    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` is the 1-based position at which `u` was visited, or [`UNVISITED`]
    /// if the iterator never yielded `u`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_strings(GraphType::Directed, "ABCD", "AB BC").unwrap();
    ///
    /// let ranking = g.bfs(1).unwrap().ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2, 0]);
    /// ```
    fn ranking(mut self) -> GraphResult<Vec<Rank>> {
        let mut ranking = try_filled_vec(self.number_of_graph_nodes() as usize, UNVISITED)?;
        let mut rank: Rank = 0;

        for u in self.by_ref() {
            let u = u?;
            debug_assert_eq!(ranking[u as usize], UNVISITED);
            rank += 1;
            ranking[u as usize] = rank;
        }

        Ok(ranking)
    }
}

impl<G, S> RankFromOrder for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    fn number_of_graph_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }
}

#[cfg(test)]
pub mod tests {
    use itertools::Itertools;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::*;

    fn textbook_graph() -> Graph {
        Graph::from_strings(
            GraphType::Directed,
            "ABCDEFG",
            "AB AC BG BE CF DA DB DC DF DG GF",
        )
        .unwrap()
    }

    fn order_of(graph: &Graph, counts: &[Rank]) -> String {
        counts
            .iter()
            .enumerate()
            .sorted_by_key(|(_, c)| **c)
            .map(|(u, _)| graph.label_of(u as Node))
            .collect()
    }

    #[test]
    fn dfs_order() {
        let graph = textbook_graph();
        let counts = depth_first_search(&graph).unwrap();

        assert_eq!(counts, vec![1, 2, 6, 7, 5, 4, 3]);
        assert_eq!(order_of(&graph, &counts), "ABGFECD");
    }

    #[test]
    fn bfs_order() {
        let graph = textbook_graph();
        let counts = breadth_first_search(&graph).unwrap();

        assert_eq!(counts, vec![1, 3, 2, 7, 5, 4, 6]);
        assert_eq!(order_of(&graph, &counts), "ACBFEGD");
    }

    #[test]
    fn later_edges_are_visited_first() {
        let graph = Graph::from_strings(GraphType::Directed, "ABC", "AB AC").unwrap();
        assert_eq!(order_of(&graph, &depth_first_search(&graph).unwrap()), "ABC");
        assert_eq!(order_of(&graph, &breadth_first_search(&graph).unwrap()), "ACB");

        let graph = Graph::from_strings(GraphType::Directed, "ABC", "AC AB").unwrap();
        assert_eq!(order_of(&graph, &depth_first_search(&graph).unwrap()), "ACB");
        assert_eq!(order_of(&graph, &breadth_first_search(&graph).unwrap()), "ABC");
    }

    #[test]
    fn visit_on_pop_differs_from_visit_on_push() {
        // Marking on push would yield A, C, D, B as B could not be pushed a second time by C.
        let graph = Graph::from_strings(GraphType::Directed, "ABCD", "AC AB CB CD").unwrap();
        assert_eq!(order_of(&graph, &depth_first_search(&graph).unwrap()), "ACBD");
    }

    #[test]
    fn undirected_components() {
        let graph = Graph::from_strings(GraphType::Undirected, "ABCDEF", "AB CD DE").unwrap();

        assert_eq!(depth_first_search(&graph).unwrap(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(breadth_first_search(&graph).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn tiny_graphs() {
        let empty = Graph::from_strings(GraphType::Directed, "", "").unwrap();
        assert_eq!(depth_first_search(&empty).unwrap(), Vec::<Rank>::new());
        assert_eq!(breadth_first_search(&empty).unwrap(), Vec::<Rank>::new());

        let single = Graph::from_strings(GraphType::Directed, "A", "AA").unwrap();
        assert_eq!(depth_first_search(&single).unwrap(), vec![1]);
        assert_eq!(breadth_first_search(&single).unwrap(), vec![1]);
    }

    #[test]
    fn matrix_uses_ascending_neighbors() {
        let matrix = GraphMatrix::try_from(&textbook_graph()).unwrap();
        // A, C, F, B, G, E, D
        assert_eq!(depth_first_search(&matrix).unwrap(), vec![1, 4, 2, 7, 6, 3, 5]);
        // A, B, C, E, G, F, D
        assert_eq!(breadth_first_search(&matrix).unwrap(), vec![1, 2, 3, 7, 4, 6, 5]);
    }

    #[test]
    fn bounded_frontier() {
        let graph = textbook_graph();

        // the center of a star pushes all of its unvisited leaves at once
        let star = Graph::from_strings(GraphType::Directed, "ABCDEF", "DA DB DC DE DF").unwrap();
        assert_eq!(
            traverse_with(&star, VertexStack::bounded(4).unwrap()),
            Ok(vec![1, 2, 3, 4, 5, 6])
        );
        let star = Graph::from_strings(GraphType::Directed, "DABCEF", "DA DB DC DE DF").unwrap();
        assert_eq!(
            traverse_with(&star, VertexStack::bounded(4).unwrap()),
            Err(GraphError::capacity_exceeded(4))
        );

        assert_eq!(
            traverse_with(&graph, VertexQueue::bounded(graph.len()).unwrap()),
            breadth_first_search(&graph)
        );
    }

    #[test]
    fn lazy_search() {
        let graph = textbook_graph();

        let order: Vec<Node> = graph.dfs(0).unwrap().collect::<GraphResult<_>>().unwrap();
        assert_eq!(order, vec![0, 1, 6, 5, 4, 2]);

        let order: Vec<Node> = BFS::new(&graph, 6, VertexQueue::new())
            .unwrap()
            .collect::<GraphResult<_>>()
            .unwrap();
        assert_eq!(order, vec![6, 5]);

        assert!(matches!(
            graph.dfs(7),
            Err(GraphError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn lazy_search_restarts() {
        let graph = textbook_graph();
        let mut search = graph.dfs(0).unwrap();

        assert_eq!(search.by_ref().count(), 6);
        assert!(!search.did_visit_node(3));
        assert!(search.try_restart_at_unvisited().unwrap());
        assert_eq!(search.next(), Some(Ok(3)));
        assert_eq!(search.next(), None);
        assert!(!search.try_restart_at_unvisited().unwrap());
    }

    #[test]
    fn ranking_matches_full_traversal() {
        let graph = textbook_graph();
        assert_eq!(
            graph.dfs(0).unwrap().ranking().unwrap(),
            vec![1, 2, 6, 0, 5, 4, 3]
        );
        assert_eq!(
            graph.bfs(0).unwrap().ranking().unwrap(),
            vec![1, 3, 2, 0, 5, 4, 6]
        );
    }

    #[test]
    fn random_graphs_agree_across_representations() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [1, 5, 20, 60] {
            for _ in 0..10 {
                let graph = random_graph(rng, n, 3 * n, GraphType::Directed);
                let matrix = GraphMatrix::try_from(&graph).unwrap();

                assert_permutation(&depth_first_search(&graph).unwrap());
                assert_permutation(&breadth_first_search(&graph).unwrap());
                assert_permutation(&depth_first_search(&matrix).unwrap());
                assert_permutation(&breadth_first_search(&matrix).unwrap());
            }
        }
    }

    proptest! {
        #[test]
        fn traversals_are_permutations(
            n in 0u32..40,
            edges in prop::collection::vec((0u32..40, 0u32..40), 0..120),
            undirected in any::<bool>(),
        ) {
            let graph_type = if undirected { GraphType::Undirected } else { GraphType::Directed };
            let graph = graph_from_pairs(n, graph_type, &edges);

            let dfs = depth_first_search(&graph).unwrap();
            let bfs = breadth_first_search(&graph).unwrap();

            prop_assert!(is_permutation(&dfs));
            prop_assert!(is_permutation(&bfs));
            prop_assert_eq!(dfs.first().copied(), bfs.first().copied());
        }
    }
}
