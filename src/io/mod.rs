/*!
# IO

Utilities for reading and writing the compact textual graph description.

A graph is described by two strings:
- a string of **vertex labels**, one character per vertex, e.g. `"ABCDEFG"`; the `i`-th character
  becomes node `i`,
- a string of **edge codes**, groups of two labels separated by a single separator character
  (a space by default), e.g. `"AB AC"` for the edges `A -> B` and `A -> C`.

[`EdgeCodeReader`] parses edge codes, [`EdgeCodeWriter`] renders a graph back into them.
The `Display` implementation of every graph prints both strings:

```text
NODES: A, B, C
EDGES: AB AC
```
*/

mod edge_codes;

pub use edge_codes::*;

use std::fmt;

use itertools::Itertools;

use crate::prelude::*;

/// Writes the labels and the edge codes of a graph in the `NODES: ... / EDGES: ...` layout.
pub(crate) fn write_graph<G>(graph: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: AdjacencyList + Labelled,
{
    writeln!(f, "NODES: {}", graph.labels().join(", "))?;
    write!(f, "EDGES: ")?;
    EdgeCodeWriter::default().write_edge_codes(graph, f)
}
