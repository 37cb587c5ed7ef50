//! Adjacency-list graph container

use crate::edge::Edge;
use crate::error::{Error, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Index;

/// Directed graph backed by an adjacency list
///
/// Each vertex maps to the sequence of its outgoing edges. At most one edge
/// exists per ordered `(from, to)` pair. `vertex_number` and `edge_number`
/// always equal the number of keys and the total number of adjacency
/// entries; they only exist so both counts are O(1).
///
/// `Graph` has no internal synchronization. Share it across threads behind
/// your own lock.
#[derive(Debug, Clone)]
pub struct Graph<V = String, W = f64> {
    vertex_number: usize,
    edge_number: usize,
    adjacent_list: HashMap<V, Vec<Edge<V, W>>>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Self {
            vertex_number: 0,
            edge_number: 0,
            adjacent_list: HashMap::new(),
        }
    }
}

impl<V, W> Graph<V, W> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the contents out, leaving `self` as an empty graph
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    pub fn get_vertex_number(&self) -> usize {
        self.vertex_number
    }

    pub fn get_edge_number(&self) -> usize {
        self.edge_number
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_number == 0
    }
}

impl<V, W> Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Build a graph from an initial vertex set and edge set
    ///
    /// Vertices are inserted first; a repeated vertex fails with
    /// [`Error::DuplicateVertex`]. Each `(from, edge)` is then inserted with
    /// the rules of [`Graph::insert_edge`].
    pub fn from_parts<I, E>(vertices: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, Edge<V, W>)>,
    {
        let mut graph = Self::new();

        for vertex in vertices {
            if !graph.insert_vertex(vertex.clone()) {
                return Err(Error::DuplicateVertex(format!("{:?}", vertex)));
            }
        }

        for (from, edge) in edges {
            graph.insert_edge(from, edge.to, edge.weight)?;
        }

        tracing::debug!(
            vertices = graph.vertex_number,
            edges = graph.edge_number,
            "Built graph from initial sets"
        );
        Ok(graph)
    }

    /// Insert a vertex with no edges
    ///
    /// Returns `false` (and changes nothing) if the vertex already exists.
    pub fn insert_vertex(&mut self, vertex: V) -> bool {
        match self.adjacent_list.entry(vertex) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                tracing::trace!(vertex = ?slot.key(), "Inserted vertex");
                slot.insert(Vec::new());
                self.vertex_number += 1;
                true
            }
        }
    }

    /// Insert a directed edge `from -> to`
    ///
    /// Fails with [`Error::VertexNotFound`] if either endpoint is missing and
    /// with [`Error::DuplicateEdge`] if `from` already has an edge to `to`.
    pub fn insert_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        let target_exists = self.adjacent_list.contains_key(&to);
        let Some(edges) = self.adjacent_list.get_mut(&from) else {
            return Err(Error::vertex_not_found(&from));
        };
        if !target_exists {
            return Err(Error::vertex_not_found(&to));
        }

        if edges.iter().any(|edge| edge.to == to) {
            return Err(Error::duplicate_edge(&from, &to));
        }

        tracing::trace!(from = ?from, to = ?to, "Inserted edge");
        edges.push(Edge::new(to, weight));
        self.edge_number += 1;
        Ok(())
    }

    /// Insert a directed edge with the unit weight
    pub fn insert_unit_edge(&mut self, from: V, to: V) -> Result<()>
    where
        W: From<u8>,
    {
        self.insert_edge(from, to, W::from(1))
    }

    /// Remove a vertex together with every edge that starts or ends at it
    ///
    /// Returns `false` if the vertex does not exist.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        let Some(outgoing) = self.adjacent_list.remove(vertex) else {
            return false;
        };
        self.vertex_number -= 1;
        self.edge_number -= outgoing.len();

        let mut incoming = 0;
        for edges in self.adjacent_list.values_mut() {
            let before = edges.len();
            edges.retain(|edge| edge.to != *vertex);
            incoming += before - edges.len();
        }
        self.edge_number -= incoming;

        tracing::trace!(
            vertex = ?vertex,
            outgoing = outgoing.len(),
            incoming,
            "Removed vertex"
        );
        true
    }

    /// Remove the edge `from -> to`
    ///
    /// Returns `false` if `from` or the edge does not exist.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(edges) = self.adjacent_list.get_mut(from) else {
            return false;
        };
        let Some(pos) = edges.iter().position(|edge| edge.to == *to) else {
            return false;
        };

        edges.remove(pos);
        self.edge_number -= 1;
        tracing::trace!(from = ?from, to = ?to, "Removed edge");
        true
    }

    /// Snapshot of all vertices, in no particular order
    pub fn get_vertices(&self) -> Vec<V> {
        self.adjacent_list.keys().cloned().collect()
    }

    /// Outgoing edges of a vertex
    ///
    /// A missing vertex fails with [`Error::VertexNotFound`]; the lookup never
    /// inserts it.
    pub fn get_adjacent_edges(&self, vertex: &V) -> Result<&[Edge<V, W>]> {
        self.adjacent_list
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacent_list.contains_key(vertex)
    }

    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.adjacent_list
            .get(from)
            .is_some_and(|edges| edges.iter().any(|edge| edge.to == *to))
    }
}

/// Same lookup as [`Graph::get_adjacent_edges`]
///
/// # Panics
///
/// Panics if the vertex is not in the graph.
impl<V, W> Index<&V> for Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
{
    type Output = [Edge<V, W>];

    fn index(&self, vertex: &V) -> &Self::Output {
        match self.adjacent_list.get(vertex) {
            Some(edges) => edges,
            None => panic!("vertex not found: {:?}", vertex),
        }
    }
}

impl<V, W> PartialEq for Graph<V, W>
where
    V: Eq + Hash,
    W: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.vertex_number == other.vertex_number
            && self.edge_number == other.edge_number
            && self.adjacent_list == other.adjacent_list
    }
}
