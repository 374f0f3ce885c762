//! Fallible allocation of arrays.
//!
//! Every array whose size depends on the input graph is reserved here, so that exhausting
//! memory surfaces as [`GraphError::OutOfMemory`] instead of aborting the process.

use crate::error::{GraphError, GraphResult};

/// Allocates a vector of `len` copies of `value`.
pub fn try_filled_vec<T: Clone>(len: usize, value: T) -> GraphResult<Vec<T>> {
    let mut vec = try_vec_with_capacity(len)?;
    vec.resize(len, value);
    Ok(vec)
}

/// Allocates an empty vector that can hold at least `capacity` elements without reallocating.
pub fn try_vec_with_capacity<T>(capacity: usize) -> GraphResult<Vec<T>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(capacity)
        .map_err(|_| GraphError::out_of_memory(capacity))?;
    Ok(vec)
}

/// Pushes `item` onto `vec`, reporting a failed reallocation instead of aborting.
pub fn try_push<T>(vec: &mut Vec<T>, item: T) -> GraphResult<()> {
    vec.try_reserve(1)
        .map_err(|_| GraphError::out_of_memory(vec.len().saturating_add(1)))?;
    vec.push(item);
    Ok(())
}
