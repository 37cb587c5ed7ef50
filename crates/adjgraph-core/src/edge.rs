//! Edge type

use serde::{Deserialize, Serialize};

/// An outgoing edge: the target vertex and the edge weight
///
/// The source vertex is implied by the adjacency sequence the edge is
/// stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<V, W> {
    /// Target vertex
    pub to: V,

    /// Edge weight
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    pub fn new(to: V, weight: W) -> Self {
        Self { to, weight }
    }
}

impl<V, W> From<(V, W)> for Edge<V, W> {
    fn from((to, weight): (V, W)) -> Self {
        Self { to, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_from_tuple() {
        let edge: Edge<usize, i32> = (3, 2).into();
        assert_eq!(edge, Edge::new(3, 2));
    }

    #[test]
    fn test_edge_serializes_as_struct() {
        let edge = Edge::new("b".to_string(), 0.5);
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#"{"to":"b","weight":0.5}"#);
    }
}
