//! All `#[no_mangle] extern "C"` functions exposed by the adjgraph C API.

use std::os::raw::{c_char, c_int};

use crate::types::{
    free_raw_array, AdjGraph, AdjGraphEdge, AdjGraphEdges, AdjGraphVertices,
};

// ===== Helpers =====

/// Dereference an opaque graph pointer, returning `$ret` on null.
macro_rules! graph_ref {
    ($ptr:expr, $ret:expr) => {{
        if $ptr.is_null() {
            tracing::debug!("Null graph handle");
            return $ret;
        }
        // SAFETY: Caller guarantees ptr from adjgraph_create and not yet destroyed.
        unsafe { &*$ptr }
    }};
}

/// Same as `graph_ref!` but yields a mutable reference.
macro_rules! graph_mut {
    ($ptr:expr, $ret:expr) => {{
        if $ptr.is_null() {
            tracing::debug!("Null graph handle");
            return $ret;
        }
        // SAFETY: Caller guarantees ptr from adjgraph_create, not yet destroyed,
        // and not used concurrently.
        unsafe { &mut *$ptr }
    }};
}

// =========================================================================
// Lifecycle
// =========================================================================

/// Create a new empty graph. Free it with `adjgraph_destroy`.
#[no_mangle]
pub extern "C" fn adjgraph_create() -> *mut AdjGraph {
    Box::into_raw(Box::new(AdjGraph::new()))
}

/// Release a graph. The handle must not be used afterwards.
#[no_mangle]
pub extern "C" fn adjgraph_destroy(graph: *mut AdjGraph) {
    if !graph.is_null() {
        // SAFETY: We take ownership back and drop it.
        unsafe { drop(Box::from_raw(graph)) };
    }
}

/// Returns the library version string. The pointer is static and must NOT be freed.
#[no_mangle]
pub extern "C" fn adjgraph_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr().cast::<c_char>()
}

// =========================================================================
// Mutation
// =========================================================================

/// Insert a vertex. Inserting an existing vertex does nothing.
#[no_mangle]
pub extern "C" fn adjgraph_insert_vertex(graph: *mut AdjGraph, vertex: usize) {
    let graph = graph_mut!(graph, ());
    graph.inner.insert_vertex(vertex);
}

/// Insert the edge `from -> to`.
///
/// Best effort: if either vertex is missing or the edge already exists the
/// call does nothing and reports nothing.
#[no_mangle]
pub extern "C" fn adjgraph_insert_edge(
    graph: *mut AdjGraph,
    from: usize,
    to: usize,
    weight: c_int,
) {
    let graph = graph_mut!(graph, ());
    if let Err(e) = graph.inner.insert_edge(from, to, weight) {
        tracing::debug!(error = %e, "Ignored rejected edge");
    }
}

/// Remove a vertex and every edge touching it. Missing vertices are ignored.
#[no_mangle]
pub extern "C" fn adjgraph_remove_vertex(graph: *mut AdjGraph, vertex: usize) {
    let graph = graph_mut!(graph, ());
    graph.inner.remove_vertex(&vertex);
}

/// Remove the edge `from -> to`. Missing edges are ignored.
#[no_mangle]
pub extern "C" fn adjgraph_remove_edge(graph: *mut AdjGraph, from: usize, to: usize) {
    let graph = graph_mut!(graph, ());
    graph.inner.remove_edge(&from, &to);
}

// =========================================================================
// Queries
// =========================================================================

/// Number of vertices. Returns 0 for a null handle.
#[no_mangle]
pub extern "C" fn adjgraph_get_vertex_number(graph: *const AdjGraph) -> usize {
    let graph = graph_ref!(graph, 0);
    graph.inner.get_vertex_number()
}

/// Number of edges. Returns 0 for a null handle.
#[no_mangle]
pub extern "C" fn adjgraph_get_edge_number(graph: *const AdjGraph) -> usize {
    let graph = graph_ref!(graph, 0);
    graph.inner.get_edge_number()
}

/// Snapshot of all vertices, in no particular order.
///
/// Caller must free the result with `adjgraph_free_vertices`. Returns null
/// for a null handle.
#[no_mangle]
pub extern "C" fn adjgraph_get_vertices(graph: *const AdjGraph) -> *mut AdjGraphVertices {
    let graph = graph_ref!(graph, std::ptr::null_mut());
    let vertices = AdjGraphVertices::new(graph.inner.get_vertices());
    Box::into_raw(Box::new(vertices))
}

/// Free a vertex array from `adjgraph_get_vertices`.
#[no_mangle]
pub extern "C" fn adjgraph_free_vertices(vertices: *mut AdjGraphVertices) {
    if !vertices.is_null() {
        // SAFETY: Reconstructs the box leaked in adjgraph_get_vertices, then
        // the array built by AdjGraphVertices::new.
        unsafe {
            let vertices = Box::from_raw(vertices);
            free_raw_array(vertices.array, vertices.size);
        }
    }
}

/// Snapshot of the outgoing edges of `vertex`.
///
/// A missing vertex yields an empty array (`array` null, `size` 0). Caller
/// must free the result with `adjgraph_free_edges`. Returns null for a null
/// handle.
#[no_mangle]
pub extern "C" fn adjgraph_get_adjacent_edges(
    graph: *const AdjGraph,
    vertex: usize,
) -> *mut AdjGraphEdges {
    let graph = graph_ref!(graph, std::ptr::null_mut());
    let edges = match graph.inner.get_adjacent_edges(&vertex) {
        Ok(edges) => edges.iter().map(AdjGraphEdge::from).collect(),
        Err(e) => {
            tracing::debug!(error = %e, "Returning empty edge array");
            Vec::new()
        }
    };
    Box::into_raw(Box::new(AdjGraphEdges::new(edges)))
}

/// Free an edge array from `adjgraph_get_adjacent_edges`.
#[no_mangle]
pub extern "C" fn adjgraph_free_edges(edges: *mut AdjGraphEdges) {
    if !edges.is_null() {
        // SAFETY: Reconstructs the box leaked in adjgraph_get_adjacent_edges,
        // then the array built by AdjGraphEdges::new.
        unsafe {
            let edges = Box::from_raw(edges);
            free_raw_array(edges.array, edges.size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four vertices in a cycle: 1 -> 2 (2), 2 -> 3, 3 -> 4, 4 -> 1
    fn cycle_graph() -> *mut AdjGraph {
        let graph = adjgraph_create();
        for vertex in 1..=4 {
            adjgraph_insert_vertex(graph, vertex);
        }
        adjgraph_insert_edge(graph, 1, 2, 2);
        adjgraph_insert_edge(graph, 2, 3, 1);
        adjgraph_insert_edge(graph, 3, 4, 1);
        adjgraph_insert_edge(graph, 4, 1, 1);
        graph
    }

    #[test]
    fn test_create_and_destroy() {
        let graph = adjgraph_create();
        assert!(!graph.is_null());
        assert_eq!(adjgraph_get_vertex_number(graph), 0);
        assert_eq!(adjgraph_get_edge_number(graph), 0);
        adjgraph_destroy(graph);
    }

    #[test]
    fn test_cycle_remove_and_read_back() {
        let graph = cycle_graph();
        assert_eq!(adjgraph_get_vertex_number(graph), 4);
        assert_eq!(adjgraph_get_edge_number(graph), 4);

        adjgraph_remove_vertex(graph, 3);
        adjgraph_remove_edge(graph, 4, 1);

        assert_eq!(adjgraph_get_vertex_number(graph), 3);
        assert_eq!(adjgraph_get_edge_number(graph), 1);

        let vertices = adjgraph_get_vertices(graph);
        assert!(!vertices.is_null());
        // SAFETY: Non-null result of adjgraph_get_vertices, not yet freed.
        let vertices_ref = unsafe { &*vertices };
        assert_eq!(vertices_ref.size, 3);
        // SAFETY: array holds `size` initialized elements.
        let mut ids = unsafe { std::slice::from_raw_parts(vertices_ref.array, vertices_ref.size) }
            .to_vec();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 4]);
        adjgraph_free_vertices(vertices);

        let edges = adjgraph_get_adjacent_edges(graph, 1);
        // SAFETY: Non-null result of adjgraph_get_adjacent_edges, not yet freed.
        let edges_ref = unsafe { &*edges };
        assert_eq!(edges_ref.size, 1);
        // SAFETY: array holds `size` initialized elements.
        let items = unsafe { std::slice::from_raw_parts(edges_ref.array, edges_ref.size) };
        assert_eq!(items[0], AdjGraphEdge { to: 2, weight: 2 });
        adjgraph_free_edges(edges);

        adjgraph_destroy(graph);
    }

    #[test]
    fn test_insert_edge_failures_are_silent() {
        let graph = cycle_graph();

        // Duplicate edge and missing endpoints are ignored
        adjgraph_insert_edge(graph, 1, 2, 9);
        adjgraph_insert_edge(graph, 1, 99, 1);
        adjgraph_insert_edge(graph, 99, 1, 1);

        assert_eq!(adjgraph_get_vertex_number(graph), 4);
        assert_eq!(adjgraph_get_edge_number(graph), 4);

        let edges = adjgraph_get_adjacent_edges(graph, 1);
        // SAFETY: Non-null result, array holds `size` elements.
        let items = unsafe { std::slice::from_raw_parts((*edges).array, (*edges).size) };
        assert_eq!(items, &[AdjGraphEdge { to: 2, weight: 2 }]);
        adjgraph_free_edges(edges);

        adjgraph_destroy(graph);
    }

    #[test]
    fn test_adjacent_edges_of_missing_vertex() {
        let graph = cycle_graph();

        let edges = adjgraph_get_adjacent_edges(graph, 42);
        assert!(!edges.is_null());
        // SAFETY: Non-null result of adjgraph_get_adjacent_edges.
        let edges_ref = unsafe { &*edges };
        assert_eq!(edges_ref.size, 0);
        assert!(edges_ref.array.is_null());
        adjgraph_free_edges(edges);

        // The lookup did not create the vertex
        assert_eq!(adjgraph_get_vertex_number(graph), 4);

        adjgraph_destroy(graph);
    }

    #[test]
    fn test_empty_graph_vertices() {
        let graph = adjgraph_create();
        let vertices = adjgraph_get_vertices(graph);
        // SAFETY: Non-null result of adjgraph_get_vertices.
        assert_eq!(unsafe { (*vertices).size }, 0);
        adjgraph_free_vertices(vertices);
        adjgraph_destroy(graph);
    }

    #[test]
    fn test_free_empty_and_filled_arrays() {
        let graph = cycle_graph();
        adjgraph_insert_vertex(graph, 5);

        let filled = adjgraph_get_adjacent_edges(graph, 1);
        let empty = adjgraph_get_adjacent_edges(graph, 5);
        // SAFETY: Both results are non-null for a live handle.
        unsafe {
            assert!(!(*filled).array.is_null());
            assert_eq!((*filled).size, 1);
            assert!((*empty).array.is_null());
            assert_eq!((*empty).size, 0);
        }
        adjgraph_free_edges(filled);
        adjgraph_free_edges(empty);

        let vertices = adjgraph_get_vertices(graph);
        // SAFETY: Non-null result for a live handle.
        assert_eq!(unsafe { (*vertices).size }, 5);
        adjgraph_free_vertices(vertices);
        adjgraph_destroy(graph);

        let graph = adjgraph_create();
        let vertices = adjgraph_get_vertices(graph);
        // SAFETY: Non-null result for a live handle.
        assert!(unsafe { (*vertices).array.is_null() });
        adjgraph_free_vertices(vertices);
        adjgraph_destroy(graph);
    }

    #[test]
    fn test_null_pointer_safety() {
        let null = std::ptr::null_mut::<AdjGraph>();

        adjgraph_insert_vertex(null, 1);
        adjgraph_insert_edge(null, 1, 2, 1);
        adjgraph_remove_vertex(null, 1);
        adjgraph_remove_edge(null, 1, 2);
        assert_eq!(adjgraph_get_vertex_number(null), 0);
        assert_eq!(adjgraph_get_edge_number(null), 0);
        assert!(adjgraph_get_vertices(null).is_null());
        assert!(adjgraph_get_adjacent_edges(null, 1).is_null());

        adjgraph_free_vertices(std::ptr::null_mut());
        adjgraph_free_edges(std::ptr::null_mut());
        adjgraph_destroy(null);
    }

    #[test]
    fn test_version() {
        // SAFETY: Static NUL-terminated string.
        let version = unsafe { std::ffi::CStr::from_ptr(adjgraph_version()) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }
}
