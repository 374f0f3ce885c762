/*!
# Node Representation

We choose `Node = u32` as vertex index into the vertex arena of a graph: the `i`-th label passed
at construction becomes node `i`. Labels themselves are single characters and are only used for
lookup and printing, all algorithms work on indices.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Every vertex carries a single-character label
pub type Label = char;

/// Position of a node in a visitation order (1-based) or its topological rank (0-based)
pub type Rank = u32;

/// Rank assigned to nodes that have not been visited (yet)
pub const UNVISITED: Rank = 0;

/// Converts a `usize` index into a `Node`, returning `None` if it does not fit.
pub(crate) fn node_from_index(i: usize) -> Option<Node> {
    Node::try_from(i).ok().filter(|&u| u != INVALID_NODE)
}
