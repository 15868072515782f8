//! The `Digraph` container.
//!
//! Nodes are string identifiers carrying an `f64` value. Edges are directed, carry a mandatory
//! graph-wide unique name and a strictly positive weight, and are keyed by `(v, w, name)`.
//! Both tables keep insertion order, which is also the order of every listing and export.

mod adjacency;
mod edge_key;
mod entries;
mod options;

pub use edge_key::{EdgeKey, EdgeRef};
pub use options::GraphOptions;

use crate::error::{Error, Result};
use adjacency::DirectedAdjacency;
use edge_key::EdgeKeyView;
use entries::{EdgeEntry, NodeEntry};
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Value given to nodes added without an explicit value.
pub const DEFAULT_NODE_VALUE: f64 = 1.0;

/// Weight given to document edges that omit one.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Digraph {
    options: GraphOptions,

    nodes: Vec<NodeEntry>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry>,
    edge_index: HashMap<EdgeKey, usize>,
    edge_names: HashMap<String, usize>,

    adj: DirectedAdjacency,
}

impl Default for Digraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Digraph {
    /// Creates an empty graph with the default [`GraphOptions`] (parallel edges allowed).
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Creates an empty graph; `options.multigraph = false` rejects a second edge on a pair.
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            edge_names: HashMap::default(),
            adj: DirectedAdjacency::default(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    fn node_ix(&self, id: &str) -> Result<usize> {
        match self.node_index.get(id) {
            Some(&ix) => Ok(ix),
            None => {
                tracing::trace!(id, "node lookup failed");
                Err(Error::NodeNotFound { id: id.to_string() })
            }
        }
    }

    fn edge_ix_of_view(&self, view: EdgeKeyView<'_>) -> Option<usize> {
        self.edge_index.get(&view).copied()
    }

    /// Returns `true` if a node called `id` exists.
    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Adds a node. Fails if the value is not a finite number or the id is already taken;
    /// the graph is left untouched on failure.
    pub fn add_node(&mut self, id: impl Into<String>, value: f64) -> Result<&mut Self> {
        let id = id.into();
        if !value.is_finite() {
            return Err(Error::InvalidValue {
                subject: format!("node `{id}`"),
                message: format!("value must be a finite number, got {value}"),
            });
        }
        if self.node_index.contains_key(id.as_str()) {
            return Err(Error::DuplicateNode { id });
        }

        let ix = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            value,
        });
        self.adj.push_node();
        tracing::debug!(id = %id, value, "added node");
        self.node_index.insert(id, ix);
        Ok(self)
    }

    /// Adds a node carrying [`DEFAULT_NODE_VALUE`].
    pub fn add_node_default(&mut self, id: impl Into<String>) -> Result<&mut Self> {
        self.add_node(id, DEFAULT_NODE_VALUE)
    }

    /// Value of `id`, or `None` if there is no such node.
    pub fn node_value(&self, id: &str) -> Option<f64> {
        self.node_index.get(id).map(|&ix| self.nodes[ix].value)
    }

    /// Value of `id`; fails with [`Error::NodeNotFound`] for an unknown node.
    pub fn get_node_value(&self, id: &str) -> Result<f64> {
        let ix = self.node_ix(id)?;
        Ok(self.nodes[ix].value)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    /// `(id, value)` pairs in insertion order.
    pub fn node_values(&self) -> impl Iterator<Item = (&str, f64)> {
        self.nodes.iter().map(|n| (n.id.as_str(), n.value))
    }

    /// Snapshot of all node ids in insertion order.
    pub fn list_nodes(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.edges.iter().map(EdgeEntry::edge_ref)
    }

    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().map(|e| e.key.clone()).collect()
    }

    /// Adds the edge `v -> w` called `name`.
    ///
    /// Checks, in order: the weight is finite and strictly positive, both endpoints exist, the
    /// name is not used by any other edge, and (for non-multigraphs) the pair is still free.
    /// Nothing is inserted unless every check passes.
    pub fn add_edge(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: impl Into<String>,
        weight: f64,
    ) -> Result<&mut Self> {
        let (v, w, name) = (v.into(), w.into(), name.into());

        if !(weight.is_finite() && weight > 0.0) {
            return Err(Error::InvalidValue {
                subject: format!("edge `{name}`"),
                message: format!("weight must be a finite number greater than zero, got {weight}"),
            });
        }
        let Some(&v_ix) = self.node_index.get(v.as_str()) else {
            return Err(Error::MissingNode { edge: name, id: v });
        };
        let Some(&w_ix) = self.node_index.get(w.as_str()) else {
            return Err(Error::MissingNode { edge: name, id: w });
        };
        if self.edge_names.contains_key(name.as_str()) {
            return Err(Error::DuplicateEdgeName { name });
        }
        if !self.options.multigraph
            && self
                .adj
                .out_edges(v_ix)
                .iter()
                .any(|&e| self.edges[e].w_ix == w_ix)
        {
            return Err(Error::ParallelEdge { v, w, name });
        }

        let ix = self.edges.len();
        let key = EdgeKey { v, w, name };
        tracing::debug!(v = %key.v, w = %key.w, name = %key.name, weight, "added edge");
        self.edge_names.insert(key.name.clone(), ix);
        self.edge_index.insert(key.clone(), ix);
        self.edges.push(EdgeEntry { key, w_ix, weight });
        self.adj.push_edge(v_ix, w_ix, ix);
        Ok(self)
    }

    /// Returns `true` if the edge `v -> w` called `name` exists.
    pub fn has_edge(&self, v: &str, w: &str, name: &str) -> bool {
        self.edge_ix_of_view(EdgeKeyView { v, w, name }).is_some()
    }

    /// Looks up the edge `v -> w` called `name`.
    pub fn edge(&self, v: &str, w: &str, name: &str) -> Option<EdgeRef<'_>> {
        let ix = self.edge_ix_of_view(EdgeKeyView { v, w, name })?;
        Some(self.edges[ix].edge_ref())
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<EdgeRef<'_>> {
        let ix = self.edge_ix_of_view(key.view())?;
        Some(self.edges[ix].edge_ref())
    }

    /// Looks an edge up by its graph-wide unique name.
    pub fn edge_named(&self, name: &str) -> Option<EdgeRef<'_>> {
        self.edge_names
            .get(name)
            .map(|&ix| self.edges[ix].edge_ref())
    }

    /// Weight of the edge `v -> w`.
    ///
    /// With a `name` the exact edge is looked up. Without one, the pair must carry exactly one
    /// edge: none yields [`Error::EdgeNotFound`], several yield [`Error::EdgeNameRequired`].
    pub fn get_edge_weight(&self, v: &str, w: &str, name: Option<&str>) -> Result<f64> {
        if let Some(name) = name {
            return self
                .edge(v, w, name)
                .map(|e| e.weight)
                .ok_or_else(|| {
                    tracing::trace!(v, w, name, "edge lookup failed");
                    Error::EdgeNotFound {
                        edge: format!("{v} -[{name}]-> {w}"),
                    }
                });
        }

        let found = match (self.node_index.get(v), self.node_index.get(w)) {
            (Some(&v_ix), Some(&w_ix)) => self
                .adj
                .out_edges(v_ix)
                .iter()
                .map(|&e| &self.edges[e])
                .filter(|e| e.w_ix == w_ix)
                .collect::<Vec<_>>(),
            _ => Vec::new(),
        };
        match found.as_slice() {
            [] => {
                tracing::trace!(v, w, "edge lookup failed");
                Err(Error::EdgeNotFound {
                    edge: format!("{v} -> {w}"),
                })
            }
            [only] => Ok(only.weight),
            parallel => Err(Error::EdgeNameRequired {
                v: v.to_string(),
                w: w.to_string(),
                count: parallel.len(),
            }),
        }
    }

    /// End node of the edge called `name` that starts at `v`.
    pub fn successor_on_edge(&self, v: &str, name: &str) -> Result<&str> {
        match self.edge_named(name) {
            Some(e) if e.v == v => Ok(e.w),
            _ => {
                tracing::trace!(v, name, "edge lookup failed");
                Err(Error::EdgeNotFound {
                    edge: format!("{v} -[{name}]-> ?"),
                })
            }
        }
    }

    /// Outgoing edges of `v`, in insertion order.
    pub fn out_edges(&self, v: &str) -> Result<Vec<EdgeRef<'_>>> {
        let v_ix = self.node_ix(v)?;
        Ok(self
            .adj
            .out_edges(v_ix)
            .iter()
            .map(|&e| self.edges[e].edge_ref())
            .collect())
    }

    /// Incoming edges of `v`, in insertion order.
    pub fn in_edges(&self, v: &str) -> Result<Vec<EdgeRef<'_>>> {
        let v_ix = self.node_ix(v)?;
        Ok(self
            .adj
            .in_edges(v_ix)
            .iter()
            .map(|&e| self.edges[e].edge_ref())
            .collect())
    }

    /// Distinct ends of the edges leaving `v`, in first-seen order.
    pub fn successors(&self, v: &str) -> Result<Vec<&str>> {
        let v_ix = self.node_ix(v)?;
        let mut out: Vec<&str> = Vec::new();
        for &e in self.adj.out_edges(v_ix) {
            let w = self.edges[e].key.w.as_str();
            if !out.iter().any(|x| x == &w) {
                out.push(w);
            }
        }
        Ok(out)
    }

    /// Distinct starts of the edges entering `v`, in first-seen order.
    pub fn predecessors(&self, v: &str) -> Result<Vec<&str>> {
        let v_ix = self.node_ix(v)?;
        let mut out: Vec<&str> = Vec::new();
        for &e in self.adj.in_edges(v_ix) {
            let u = self.edges[e].key.v.as_str();
            if !out.iter().any(|x| x == &u) {
                out.push(u);
            }
        }
        Ok(out)
    }

    /// Number of edges leaving `v`; read from the same adjacency list `successors` walks, so
    /// parallel edges each count.
    pub fn out_degree(&self, v: &str) -> Result<usize> {
        let v_ix = self.node_ix(v)?;
        Ok(self.adj.out_edges(v_ix).len())
    }

    /// Number of edges entering `v`; see [`Digraph::out_degree`].
    pub fn in_degree(&self, v: &str) -> Result<usize> {
        let v_ix = self.node_ix(v)?;
        Ok(self.adj.in_edges(v_ix).len())
    }

    /// Writes the textual dump (see the `Display` impl) to stdout.
    pub fn print_graph(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.nodes {
            writeln!(f, "Node {}, value={}", n.id, n.value)?;
        }
        for e in &self.edges {
            writeln!(
                f,
                "An edge from {} to {}, weight={}, name={}",
                e.key.v, e.key.w, e.weight, e.key.name
            )?;
        }
        Ok(())
    }
}
