//! Graph command scripts
//!
//! One command per line:
//!
//! ```text
//! vertex <id>
//! edge <from> <to> [weight]
//! remove-vertex <id>
//! remove-edge <from> <to>
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use adjgraph_core::Graph;
use anyhow::Context;

/// A single parsed script line
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Vertex(String),
    Edge {
        from: String,
        to: String,
        weight: Option<f64>,
    },
    RemoveVertex(String),
    RemoveEdge {
        from: String,
        to: String,
    },
}

/// How a script is applied to a graph
#[derive(Debug, Clone, Copy)]
pub struct ScriptOptions {
    pub default_weight: f64,
    pub strict: bool,
}

/// Parse a script into `(line number, command)` pairs
pub fn parse_script(source: &str) -> anyhow::Result<Vec<(usize, ScriptCommand)>> {
    let mut commands = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(command) = parse_line(line).with_context(|| format!("line {}", line_no))? {
            commands.push((line_no, command));
        }
    }
    Ok(commands)
}

fn parse_line(line: &str) -> anyhow::Result<Option<ScriptCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = match parts.as_slice() {
        ["vertex", id] => ScriptCommand::Vertex(id.to_string()),
        ["edge", from, to] => ScriptCommand::Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight: None,
        },
        ["edge", from, to, weight] => {
            let weight = weight
                .parse::<f64>()
                .map_err(|_| anyhow::anyhow!("invalid weight '{}'", weight))?;
            ScriptCommand::Edge {
                from: from.to_string(),
                to: to.to_string(),
                weight: Some(weight),
            }
        }
        ["remove-vertex", id] => ScriptCommand::RemoveVertex(id.to_string()),
        ["remove-edge", from, to] => ScriptCommand::RemoveEdge {
            from: from.to_string(),
            to: to.to_string(),
        },
        [keyword, ..] => anyhow::bail!("malformed command '{}': {}", keyword, line),
        [] => return Ok(None),
    };
    Ok(Some(command))
}

/// Apply parsed commands to `graph`
///
/// Rejected edges abort with an error in strict mode; otherwise they are
/// logged and counted. Returns the number of rejected edges.
pub fn apply(
    graph: &mut Graph,
    commands: &[(usize, ScriptCommand)],
    options: &ScriptOptions,
) -> anyhow::Result<usize> {
    let mut rejected = 0;

    for (line_no, command) in commands {
        match command {
            ScriptCommand::Vertex(id) => {
                if !graph.insert_vertex(id.clone()) {
                    tracing::debug!("line {}: vertex '{}' already exists", line_no, id);
                }
            }
            ScriptCommand::Edge { from, to, weight } => {
                let weight = weight.unwrap_or(options.default_weight);
                if let Err(e) = graph.insert_edge(from.clone(), to.clone(), weight) {
                    if options.strict {
                        return Err(e).with_context(|| format!("line {}", line_no));
                    }
                    tracing::warn!("line {}: skipped edge: {}", line_no, e);
                    rejected += 1;
                }
            }
            ScriptCommand::RemoveVertex(id) => {
                if !graph.remove_vertex(id) {
                    tracing::debug!("line {}: no vertex '{}' to remove", line_no, id);
                }
            }
            ScriptCommand::RemoveEdge { from, to } => {
                if !graph.remove_edge(from, to) {
                    tracing::debug!("line {}: no edge {} -> {} to remove", line_no, from, to);
                }
            }
        }
    }

    tracing::info!(
        "Applied {} commands ({} vertices, {} edges, {} rejected)",
        commands.len(),
        graph.get_vertex_number(),
        graph.get_edge_number(),
        rejected
    );
    Ok(rejected)
}
