//! Graph visualisation payload.
//!
//! ```text
//! node1 (User Input) → node2 (AI Agent) → node3 (Database) → node4 (Response)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::GraphMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: i64,
    pub value: String,
    #[serde(rename = "isAI", default, skip_serializing_if = "Option::is_none")]
    pub is_ai: Option<bool>,
}

/// Directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

fn node(id: &str, label: &str, group: i64, value: &str) -> GraphNode {
    GraphNode {
        id: id.into(),
        label: label.into(),
        group,
        value: value.into(),
        is_ai: None,
    }
}

fn edge(from: &str, to: &str, value: &str) -> GraphEdge {
    GraphEdge {
        from: from.into(),
        to: to.into(),
        value: value.into(),
    }
}

impl GraphData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed demo pipeline.
    pub fn demo() -> Self {
        Self {
            nodes: vec![
                node("node1", "User Input", 1, "User data input"),
                GraphNode {
                    is_ai: Some(true),
                    ..node("node2", "AI Agent", 4, "AI processing node")
                },
                node("node3", "Database", 3, "Persistent data storage"),
                node("node4", "Response", 2, "Response to the user"),
            ],
            edges: vec![
                edge("node1", "node2", "User data"),
                edge("node2", "node3", "AI processed data"),
                edge("node3", "node4", "Data for response"),
            ],
        }
    }

    pub fn for_mode(mode: GraphMode) -> Self {
        match mode {
            GraphMode::Static => Self::demo(),
            GraphMode::Empty => Self::empty(),
        }
    }
}
