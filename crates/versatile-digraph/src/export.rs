//! Plain snapshots handed to presentation collaborators.
//!
//! Drawing and charting happen elsewhere: a graph renderer consumes [`RenderSnapshot`] and a bar
//! chart consumes [`EdgeWeightSeries`]. Both are detached copies and serialize with `serde`.

use crate::Digraph;
use rustc_hash::FxBuildHasher;
use serde::Serialize;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub id: String,
    pub value: f64,
}

impl RenderNode {
    /// `"<id>: <value>"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.id, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub name: String,
    pub weight: f64,
}

impl RenderEdge {
    /// `"<name>: <weight>"`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.name, self.weight)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub nodes: Vec<RenderNode>,
    pub edges: Vec<RenderEdge>,
}

/// Parallel label/weight columns, one row per edge in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EdgeWeightSeries {
    pub labels: Vec<String>,
    pub weights: Vec<f64>,
}

impl EdgeWeightSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.weights.iter().copied())
    }
}

impl Digraph {
    pub fn export_for_render(&self) -> RenderSnapshot {
        RenderSnapshot {
            nodes: self
                .node_values()
                .map(|(id, value)| RenderNode {
                    id: id.to_string(),
                    value,
                })
                .collect(),
            edges: self
                .edges()
                .map(|e| RenderEdge {
                    from: e.v.to_string(),
                    to: e.w.to_string(),
                    name: e.name.to_string(),
                    weight: e.weight,
                })
                .collect(),
        }
    }

    pub fn export_edge_weights(&self) -> EdgeWeightSeries {
        let labels = disambiguate_labels(self.edges().map(|e| e.name.to_string()));
        let weights = self.edges().map(|e| e.weight).collect();
        EdgeWeightSeries { labels, weights }
    }
}

/// Makes labels unique in first-seen order: a repeated label gets `_<n>` appended, using the
/// smallest `n >= 1` whose result is not taken yet.
pub(crate) fn disambiguate_labels(labels: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::default();
    let mut out: Vec<String> = Vec::new();
    for label in labels {
        let label = if seen.contains(&label) {
            let mut suffix: usize = 1;
            while seen.contains(&format!("{label}_{suffix}")) {
                suffix += 1;
            }
            format!("{label}_{suffix}")
        } else {
            label
        };
        seen.insert(label.clone());
        out.push(label);
    }
    out
}
