//! adjgraph Core - Adjacency-list directed graph
//!
//! This crate provides the generic [`Graph`] container: a map from vertex
//! identifier to its outgoing weighted edges, with vertex and edge counters
//! kept in step with the map on every mutation.
//!
//! No traversal or path algorithms live here; the container only stores and
//! answers point and bulk queries.

pub mod edge;
pub mod error;
pub mod graph;

pub use edge::Edge;
pub use error::{Error, Result};
pub use graph::Graph;
