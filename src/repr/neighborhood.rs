use std::{
    iter::{Copied, Rev},
    slice::Iter,
};

use smallvec::SmallVec;

use super::*;

/// Out-neighbors of a single vertex.
///
/// Neighbors are kept in insertion order but always reported newest first, so a neighborhood
/// behaves like a list that every new edge is prepended to. Traversals rely on this order.
/// Small neighborhoods are stored inline.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood<const N: usize = 8>(SmallVec<[Node; N]>)
where
    [Node; N]: smallvec::Array<Item = Node>;

impl<const N: usize> Neighborhood<N>
where
    [Node; N]: smallvec::Array<Item = Node>,
{
    /// Creates an empty neighborhood
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Returns the number of neighbors in the Neighborhood
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    /// Returns *true* if there are no neighbors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all neighbors, most recently added first
    pub fn neighbors(&self) -> Rev<Copied<Iter<'_, Node>>> {
        self.0.iter().copied().rev()
    }

    /// Returns an iterator over all neighbors in the order they were added
    pub fn neighbors_in_insertion_order(&self) -> Copied<Iter<'_, Node>> {
        self.0.iter().copied()
    }

    /// Returns *true* if `v` is in the Neighborhood
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_add_neighbor(&mut self, v: Node) -> GraphResult<bool> {
        if self.has_neighbor(v) {
            return Ok(true);
        }

        self.0
            .try_reserve(1)
            .map_err(|_| GraphError::out_of_memory(self.0.len().saturating_add(1)))?;
        self.0.push(v);
        Ok(false)
    }

    /// Removes all neighbors in the Neighborhood
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn newest_first() {
        let mut nbs: Neighborhood = Neighborhood::new();
        for v in [3, 1, 4] {
            assert!(!nbs.try_add_neighbor(v).unwrap());
        }

        assert_eq!(nbs.neighbors().collect_vec(), vec![4, 1, 3]);
        assert_eq!(nbs.neighbors_in_insertion_order().collect_vec(), vec![3, 1, 4]);
        assert_eq!(nbs.num_of_neighbors(), 3);
    }

    #[test]
    fn idempotent_insertion() {
        let mut nbs: Neighborhood<2> = Neighborhood::new();
        assert!(!nbs.try_add_neighbor(1).unwrap());
        assert!(nbs.try_add_neighbor(1).unwrap());
        assert_eq!(nbs.neighbors().collect_vec(), vec![1]);

        // spills to the heap
        for v in 2..10 {
            nbs.try_add_neighbor(v).unwrap();
        }
        assert_eq!(nbs.num_of_neighbors(), 9);
        assert!(nbs.has_neighbor(9));

        nbs.clear();
        assert!(nbs.is_empty());
    }
}
