//! C FFI bindings for the adjgraph graph container.
//!
//! This crate exposes `Graph<usize, int>` through an opaque [`AdjGraph`]
//! handle so any language with C interop can use it. The matching header is
//! `include/adjgraph.h`.
//!
//! # Memory Management
//!
//! A handle returned by `adjgraph_create` must be released with
//! `adjgraph_destroy`. Arrays returned by `adjgraph_get_vertices` and
//! `adjgraph_get_adjacent_edges` are owned by the caller and must be released
//! exactly once with `adjgraph_free_vertices` / `adjgraph_free_edges`.
//! Using a handle or array after it was released is undefined behavior.
//!
//! # Error Handling
//!
//! There is no error channel. Operations the core would reject (an edge to a
//! missing vertex, a duplicate edge) are silently ignored, and a null handle
//! turns every call into a no-op.
//!
//! # Thread Safety
//!
//! None. A handle must not be used from several threads without external
//! synchronization.

mod graph;
mod types;

pub use graph::*;
pub use types::{AdjGraph, AdjGraphEdge, AdjGraphEdges, AdjGraphVertices};
