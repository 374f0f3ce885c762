/*!
Topological ordering of directed acyclic graphs.

[`TopoSearch`] implements Kahn's algorithm with a FIFO queue of sources: all nodes of in-degree
zero are enqueued in ascending index order, then every dequeued node "removes" its out-edges
and enqueues the neighbors whose in-degree drops to zero. Alongside the order it maintains the
**rank** of every node, the length of the longest path from any source to it.

If the graph has a cycle, the nodes on or behind it never reach in-degree zero. The search then
yields a final [`GraphError::CycleDetected`] instead of silently leaving them unranked.
*/

use tracing::debug;

use super::*;

/// Iterator implementing topological ordering over a directed acyclic graph (DAG).
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    ranks: Vec<Rank>,
    queue: VertexQueue,
    dequeued: NumNodes,
    finished: bool,
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Constructs a new topological search on the given directed graph,
    /// initializing in-degree counts and collecting the initial set of
    /// zero in-degree nodes.
    pub fn new(graph: &'a G) -> GraphResult<Self> {
        let in_degs = graph.in_degrees()?;
        let ranks = try_filled_vec(graph.len(), 0 as Rank)?;

        let mut queue = VertexQueue::new();
        for u in graph.vertices() {
            if in_degs[u as usize] == 0 {
                queue.push(u)?;
            }
        }

        Ok(Self {
            graph,
            in_degs,
            ranks,
            queue,
            dequeued: 0,
            finished: false,
        })
    }

    /// Ranks assigned so far. A rank is final once its node has been yielded.
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Runs the search to completion and returns the rank of every node.
    pub fn into_ranks(mut self) -> GraphResult<Vec<Rank>> {
        for u in self.by_ref() {
            u?;
        }
        Ok(self.ranks)
    }

    fn step(&mut self) -> GraphResult<Option<Node>> {
        let Some(u) = self.queue.pop() else {
            let unranked = self.graph.number_of_nodes() - self.dequeued;
            if unranked > 0 {
                debug!(unranked, "topological search stuck on a cycle");
                return Err(GraphError::cycle(unranked));
            }
            return Ok(None);
        };

        self.dequeued += 1;
        let rank = self.ranks[u as usize] + 1;

        for v in self.graph.neighbors_of(u) {
            let v = v as usize;
            self.in_degs[v] -= 1;
            self.ranks[v] = self.ranks[v].max(rank);
            if self.in_degs[v] == 0 {
                self.queue.push(v as Node)?;
            }
        }

        Ok(Some(u))
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = GraphResult<Node>;

    /// Returns the next node in topological order, if available.
    ///
    /// - Each returned node is guaranteed to appear after all its predecessors.
    /// - If the graph has a cycle, the last item is an error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.step().transpose();
        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.graph.number_of_nodes() - self.dequeued) as usize;
        (0, Some(remaining + 1))
    }
}

/// Assigns every node of a DAG its rank: the number of edges on the longest path from any
/// source (node of in-degree zero) to it. Every edge `u -> v` satisfies `rank[u] < rank[v]`;
/// unrelated nodes may share a rank.
///
/// Fails with [`GraphError::CycleDetected`] if the graph contains a cycle.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let g = Graph::from_strings(
///     GraphType::Directed,
///     "ABCDEFG",
///     "AC AB BG BE CF DG DF DC DB DA GF GE",
/// ).unwrap();
///
/// // D, A, {B, C}, G, {E, F}
/// assert_eq!(topological_sort(&g).unwrap(), vec![1, 2, 2, 0, 4, 4, 3]);
/// ```
pub fn topological_sort<G: AdjacencyList>(graph: &G) -> GraphResult<Vec<Rank>> {
    let ranks = TopoSearch::new(graph)?.into_ranks()?;
    debug!(
        nodes = graph.number_of_nodes(),
        depth = ranks.iter().max().copied().unwrap_or(0),
        "topological sort finished"
    );
    Ok(ranks)
}

/// Returns the nodes of a DAG in the order Kahn's algorithm removes them.
///
/// Fails with [`GraphError::CycleDetected`] if the graph contains a cycle.
pub fn topological_order<G: AdjacencyList>(graph: &G) -> GraphResult<Vec<Node>> {
    TopoSearch::new(graph)?.collect()
}

/// Returns *true* if the graph contains no directed cycle.
pub fn is_acyclic<G: AdjacencyList>(graph: &G) -> GraphResult<bool> {
    match topological_order(graph) {
        Ok(_) => Ok(true),
        Err(GraphError::CycleDetected { .. }) => Ok(false),
        Err(err) => Err(err),
    }
}
