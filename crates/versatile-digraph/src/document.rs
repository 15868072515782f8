//! JSON graph documents.
//!
//! A document lists nodes and edges; [`GraphDocument::build`] replays them through the regular
//! add operations, so every validation rule applies. Node values and edge weights are kept as raw
//! JSON values until then, which is where a non-numeric value (e.g. `"b"`) gets rejected.
//!
//! ```json
//! {
//!   "nodes": [{ "id": "A", "value": 10 }, { "id": "B", "value": 20 }],
//!   "edges": [{ "from": "A", "to": "B", "name": "e1", "weight": 5 }]
//! }
//! ```

use crate::error::{Error, Result};
use crate::{DEFAULT_EDGE_WEIGHT, DEFAULT_NODE_VALUE, Digraph, GraphOptions};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default = "default_multigraph")]
    pub multigraph: bool,
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    pub id: String,
    /// `None` only when the field is absent; an explicit `null` is kept as `Some(Value::Null)`.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeDocument {
    pub from: String,
    pub to: String,
    pub name: String,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<Value>,
}

// Only called for fields that are present, so `null` survives as a value instead of
// collapsing into `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn default_multigraph() -> bool {
    GraphOptions::default().multigraph
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn numeric(subject: impl FnOnce() -> String, value: Option<&Value>, default: f64) -> Result<f64> {
    let Some(value) = value else {
        return Ok(default);
    };
    let Value::Number(number) = value else {
        return Err(Error::InvalidValue {
            subject: subject(),
            message: format!("expected a number, got {}", json_kind(value)),
        });
    };
    exact_f64(number).ok_or_else(|| Error::InvalidValue {
        subject: subject(),
        message: format!("integer {number} is outside the exact range of a 64-bit float (2^53)"),
    })
}

/// Integers whose magnitude exceeds 2^53 are rejected rather than rounded.
fn exact_f64(number: &serde_json::Number) -> Option<f64> {
    const EXACT: u64 = 1 << f64::MANTISSA_DIGITS;
    if let Some(n) = number.as_u64() {
        return (n <= EXACT).then_some(n as f64);
    }
    if let Some(n) = number.as_i64() {
        return (n.unsigned_abs() <= EXACT).then_some(n as f64);
    }
    number.as_f64()
}

impl Default for GraphDocument {
    fn default() -> Self {
        Self {
            multigraph: default_multigraph(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl GraphDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }

    /// Builds a graph from the document: all nodes first, then all edges, in document order.
    ///
    /// The first failing entry aborts the build and no graph is returned.
    pub fn build(&self) -> Result<Digraph> {
        let mut graph = Digraph::with_options(GraphOptions {
            multigraph: self.multigraph,
        });
        for node in &self.nodes {
            let value = numeric(
                || format!("node `{}`", node.id),
                node.value.as_ref(),
                DEFAULT_NODE_VALUE,
            )?;
            graph.add_node(node.id.as_str(), value)?;
        }
        for edge in &self.edges {
            let weight = numeric(
                || format!("edge `{}`", edge.name),
                edge.weight.as_ref(),
                DEFAULT_EDGE_WEIGHT,
            )?;
            graph.add_edge(edge.from.as_str(), edge.to.as_str(), edge.name.as_str(), weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built graph from document"
        );
        Ok(graph)
    }
}

impl Digraph {
    /// Describes this graph as a document; building the result yields an equal graph.
    pub fn to_document(&self) -> GraphDocument {
        GraphDocument {
            multigraph: self.is_multigraph(),
            nodes: self
                .node_values()
                .map(|(id, value)| NodeDocument {
                    id: id.to_string(),
                    value: Some(Value::from(value)),
                })
                .collect(),
            edges: self
                .edges()
                .map(|e| EdgeDocument {
                    from: e.v.to_string(),
                    to: e.w.to_string(),
                    name: e.name.to_string(),
                    weight: Some(Value::from(e.weight)),
                })
                .collect(),
        }
    }
}

impl std::str::FromStr for Digraph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GraphDocument::from_json_str(s)?.build()
    }
}
