/*!
Frontier containers for graph traversals.

A [`NodeSequencer`] stores the nodes that are still to be visited. The traversal loop is the same
for every sequencer, only the order in which nodes come back out differs:

- [`VertexStack`] -> last in, first out -> **DFS**
- [`VertexQueue`] -> first in, first out -> **BFS**

Both grow on demand. A bounded container (see [`VertexStack::bounded`]) refuses to hold more
than its capacity and reports [`GraphError::CapacityExceeded`] instead.
*/

use std::collections::VecDeque;

use super::*;

/// Abstraction for the traversal frontier data structure.
pub trait NodeSequencer {
    /// Pushes a node into the frontier.
    fn push(&mut self, u: Node) -> GraphResult<()>;

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<Node>;

    /// Returns the next node without removing it.
    fn peek(&self) -> Option<Node>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;

    /// Returns *true* if the frontier holds no nodes.
    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
}

fn check_capacity(len: usize, capacity: Option<usize>) -> GraphResult<()> {
    match capacity {
        Some(capacity) if len >= capacity => Err(GraphError::capacity_exceeded(capacity)),
        _ => Ok(()),
    }
}

/// Last-in-first-out container of nodes
#[derive(Debug, Clone, Default)]
pub struct VertexStack {
    data: Vec<Node>,
    capacity: Option<usize>,
}

impl VertexStack {
    /// Creates an empty stack that grows on demand
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stack holding at most `capacity` nodes at a time
    pub fn bounded(capacity: usize) -> GraphResult<Self> {
        Ok(Self {
            data: try_vec_with_capacity(capacity)?,
            capacity: Some(capacity),
        })
    }

    /// Returns the capacity of a bounded stack
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl NodeSequencer for VertexStack {
    fn push(&mut self, u: Node) -> GraphResult<()> {
        check_capacity(self.data.len(), self.capacity)?;
        try_push(&mut self.data, u)
    }

    fn pop(&mut self) -> Option<Node> {
        self.data.pop()
    }

    fn peek(&self) -> Option<Node> {
        self.data.last().copied()
    }

    fn cardinality(&self) -> usize {
        self.data.len()
    }
}

/// First-in-first-out container of nodes, backed by a ring buffer
#[derive(Debug, Clone, Default)]
pub struct VertexQueue {
    data: VecDeque<Node>,
    capacity: Option<usize>,
}

impl VertexQueue {
    /// Creates an empty queue that grows on demand
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue holding at most `capacity` nodes at a time
    pub fn bounded(capacity: usize) -> GraphResult<Self> {
        let mut data = VecDeque::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| GraphError::out_of_memory(capacity))?;

        Ok(Self {
            data,
            capacity: Some(capacity),
        })
    }

    /// Returns the capacity of a bounded queue
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}

impl NodeSequencer for VertexQueue {
    fn push(&mut self, u: Node) -> GraphResult<()> {
        check_capacity(self.data.len(), self.capacity)?;
        self.data
            .try_reserve(1)
            .map_err(|_| GraphError::out_of_memory(self.data.len().saturating_add(1)))?;
        self.data.push_back(u);
        Ok(())
    }

    fn pop(&mut self) -> Option<Node> {
        self.data.pop_front()
    }

    fn peek(&self) -> Option<Node> {
        self.data.front().copied()
    }

    fn cardinality(&self) -> usize {
        self.data.len()
    }
}
