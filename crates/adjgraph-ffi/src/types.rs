//! Opaque handle and flat array types for the C FFI layer.

use std::os::raw::c_int;

use adjgraph_core::{Edge, Graph};

// ---------------------------------------------------------------------------
// Opaque handle
// ---------------------------------------------------------------------------

/// Opaque graph handle. Created by `adjgraph_create`, freed by `adjgraph_destroy`.
pub struct AdjGraph {
    pub(crate) inner: Graph<usize, c_int>,
}

impl AdjGraph {
    pub(crate) fn new() -> Self {
        Self {
            inner: Graph::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Returned arrays
// ---------------------------------------------------------------------------

/// One outgoing edge: target vertex and weight.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjGraphEdge {
    pub to: usize,
    pub weight: c_int,
}

impl From<&Edge<usize, c_int>> for AdjGraphEdge {
    fn from(edge: &Edge<usize, c_int>) -> Self {
        Self {
            to: edge.to,
            weight: edge.weight,
        }
    }
}

/// Edge array returned by `adjgraph_get_adjacent_edges`. Freed by `adjgraph_free_edges`.
#[repr(C)]
#[derive(Debug)]
pub struct AdjGraphEdges {
    pub array: *mut AdjGraphEdge,
    pub size: usize,
}

/// Vertex array returned by `adjgraph_get_vertices`. Freed by `adjgraph_free_vertices`.
#[repr(C)]
#[derive(Debug)]
pub struct AdjGraphVertices {
    pub array: *mut usize,
    pub size: usize,
}

impl AdjGraphEdges {
    pub(crate) fn new(edges: Vec<AdjGraphEdge>) -> Self {
        let (array, size) = into_raw_array(edges);
        Self { array, size }
    }
}

impl AdjGraphVertices {
    pub(crate) fn new(vertices: Vec<usize>) -> Self {
        let (array, size) = into_raw_array(vertices);
        Self { array, size }
    }
}

/// Leak a `Vec` as a boxed slice. An empty vec becomes a null pointer.
fn into_raw_array<T>(items: Vec<T>) -> (*mut T, usize) {
    if items.is_empty() {
        return (std::ptr::null_mut(), 0);
    }
    let size = items.len();
    let array = Box::into_raw(items.into_boxed_slice()).cast::<T>();
    (array, size)
}

/// Reclaim a slice leaked by [`into_raw_array`].
///
/// # Safety
///
/// `array` must be null or come from `into_raw_array` with the same `size`,
/// and must not have been reclaimed before.
pub(crate) unsafe fn free_raw_array<T>(array: *mut T, size: usize) {
    if !array.is_null() {
        drop(Box::from_raw(std::ptr::slice_from_raw_parts_mut(array, size)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array_is_null() {
        let vertices = AdjGraphVertices::new(Vec::new());
        assert!(vertices.array.is_null());
        assert_eq!(vertices.size, 0);
    }

    #[test]
    fn test_array_holds_items() {
        let edges = AdjGraphEdges::new(vec![
            AdjGraphEdge { to: 2, weight: 7 },
            AdjGraphEdge { to: 5, weight: -1 },
        ]);
        assert_eq!(edges.size, 2);

        // SAFETY: array is non-null with `size` initialized elements.
        let items = unsafe { std::slice::from_raw_parts(edges.array, edges.size) };
        assert_eq!(items[1], AdjGraphEdge { to: 5, weight: -1 });

        // SAFETY: array/size come straight from `AdjGraphEdges::new`.
        unsafe { free_raw_array(edges.array, edges.size) };
    }
}
