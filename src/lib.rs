/*!
`lgraphs` is a small library for **l**abelled graphs: every vertex carries a single character as
its name, and graphs are described by two compact strings, one listing the vertices and one
listing the edges as two-letter codes.

```
use lgraphs::{prelude::*, algo::*};

let graph = Graph::from_strings(
    GraphType::Directed,
    "ABCDEFG",
    "AB AC BG BE CF DA DB DC DF DG GF",
).unwrap();

// edges added later are visited first
assert_eq!(graph.depth_first_search().unwrap(), vec![1, 2, 6, 7, 5, 4, 3]);
assert_eq!(graph.breadth_first_search().unwrap(), vec![1, 3, 2, 7, 5, 4, 6]);

let dag = Graph::from_strings(
    GraphType::Directed,
    "ABCDEFG",
    "AC AB BG BE CF DG DF DC DB DA GF GE",
).unwrap();
assert_eq!(dag.topological_sort().unwrap(), vec![1, 2, 2, 0, 4, 4, 3]);
```

# Representation

Internally, **nodes** are `u32` indices in the range `0..n`: the `i`-th label names node `i`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`. Labels only appear at the
boundary (construction, lookup and printing); all algorithms work on indices.

### Directed vs Undirected

The [`GraphType`](crate::repr::GraphType) of a graph decides how an edge code `uv` is read:

- In a **directed** graph, it inserts the edge `u -> v`.
- In an **undirected** graph, it inserts both `u -> v` and `v -> u`.

### Available Representations

See the [`repr`] module for the storage backends:

- [`Graph`](crate::repr::Graph), one adjacency list per vertex, newest edge first
- [`GraphMatrix`](crate::repr::GraphMatrix), a bit matrix with ascending neighborhoods

# Errors

All fallible operations return [`GraphResult`]. Next to malformed input, this includes running
out of memory (all input-sized arrays are reserved fallibly), overflowing a bounded traversal
frontier and asking for the topological order of a cyclic graph.

# Usage

The submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and both representations,
- [`algo`] includes DFS, BFS and topological sorting, also available as methods on the graph itself (`graph.bfs(start_node)`),
- [`builder`] includes the configurable [`GraphBuilder`](crate::builder::GraphBuilder),
- [`io`] includes the parser and writer for edge codes.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

# Logging

The crate emits [`tracing`] events (`debug` for finished constructions and searches, `warn`
for dropped edges, `trace` for single visits) and leaves installing a subscriber to the
application.
*/

pub mod algo;
pub mod allocation;
pub mod builder;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
