//! Output formatting utilities

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use adjgraph_core::{Edge, Graph};
use clap::ValueEnum;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Parses the `format` value stored in the config file
impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Invalid format '{}': expected table or json", s),
        }
    }
}

/// Snapshot of a graph for printing, with vertices in sorted order
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub vertex_number: usize,
    pub edge_number: usize,
    pub rejected_edges: usize,
    pub adjacency: BTreeMap<String, Vec<Edge<String, f64>>>,
}

impl GraphSummary {
    pub fn new(graph: &Graph, rejected_edges: usize) -> Self {
        let adjacency = graph
            .get_vertices()
            .into_iter()
            .map(|vertex| {
                let edges = graph[&vertex].to_vec();
                (vertex, edges)
            })
            .collect();

        Self {
            vertex_number: graph.get_vertex_number(),
            edge_number: graph.get_edge_number(),
            rejected_edges,
            adjacency,
        }
    }
}

/// Table rendering
impl fmt::Display for GraphSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: {}\nEdges: {}", self.vertex_number, self.edge_number)?;
        if self.rejected_edges > 0 {
            write!(f, "\nRejected edges: {}", self.rejected_edges)?;
        }
        for (vertex, edges) in &self.adjacency {
            if edges.is_empty() {
                write!(f, "\n  {}", vertex)?;
            }
            for edge in edges {
                write!(f, "\n  {} -> {} (weight: {})", vertex, edge.to, edge.weight)?;
            }
        }
        Ok(())
    }
}

/// Format a summary based on format type
pub fn format_output(summary: &GraphSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
        }
        OutputFormat::Table => summary.to_string(),
    }
}
