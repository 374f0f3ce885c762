/*!
# Graph Algorithms

This module provides the **traversal** and **ordering** algorithms built on top of the graph
representations in this crate. All algorithms are re-exported at the top level of this module,
so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to depth-first search, breadth-first search and topological sorting.
If possible, algorithms are provided as **iterators**, making it easy to consume results lazily.
*/

mod containers;
mod topo;
mod traversal;

use crate::{allocation::*, prelude::*};

pub use containers::*;
pub use topo::*;
pub use traversal::*;

/// Provides convenient traversal methods (BFS, DFS, topological order, etc.)
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_strings(GraphType::Undirected, "AB", "AB").unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn bfs(&self, start: Node) -> GraphResult<BFS<'_, Self>> {
        BFS::new(self, start, VertexQueue::new())
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_strings(GraphType::Undirected, "AB", "AB").unwrap();
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(order, vec![0, 1]);
    /// ```
    fn dfs(&self, start: Node) -> GraphResult<DFS<'_, Self>> {
        DFS::new(self, start, VertexStack::new())
    }

    /// Numbers all nodes in depth-first order, see [`depth_first_search`].
    fn depth_first_search(&self) -> GraphResult<Vec<Rank>> {
        depth_first_search(self)
    }

    /// Numbers all nodes in breadth-first order, see [`breadth_first_search`].
    fn breadth_first_search(&self) -> GraphResult<Vec<Rank>> {
        breadth_first_search(self)
    }

    /// Returns an iterator yielding nodes in a valid **topological order**.
    ///
    /// - Ends with an error if the graph contains a cycle.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_strings(GraphType::Directed, "ABC", "AB BC").unwrap();
    /// let order: Vec<_> = g.topo_search().unwrap().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn topo_search(&self) -> GraphResult<TopoSearch<'_, Self>> {
        TopoSearch::new(self)
    }

    /// Returns the longest-path rank of every node, see [`topological_sort`].
    fn topological_sort(&self) -> GraphResult<Vec<Rank>> {
        topological_sort(self)
    }

    /// Returns `true` if the directed graph is **acyclic**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::from_strings(GraphType::Directed, "ABC", "AB BC").unwrap();
    /// assert!(g.is_acyclic().unwrap());
    /// ```
    fn is_acyclic(&self) -> GraphResult<bool> {
        is_acyclic(self)
    }
}

impl<G: AdjacencyList> Traversal for G {}
