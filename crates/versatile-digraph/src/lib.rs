#![forbid(unsafe_code)]

//! In-memory directed graph with valued nodes and named, weighted edges.
//!
//! [`Digraph`] owns a node table and an edge table. Nodes carry an `f64` value; edges carry a
//! graph-wide unique name and a strictly positive weight, and parallel edges between the same pair
//! are told apart by name. The graph only grows: there are add operations and read-only queries
//! (lookups, predecessors/successors, degrees, textual dump), nothing else.
//!
//! Presentation is left to callers: [`Digraph::export_for_render`] and
//! [`Digraph::export_edge_weights`] produce detached snapshots for a graph renderer or a bar chart.
//!
//! ```
//! use versatile_digraph::Digraph;
//!
//! let mut g = Digraph::new();
//! g.add_node("A", 10.0)?.add_node("B", 20.0)?;
//! g.add_edge("A", "B", "e1", 5.0)?;
//!
//! assert_eq!(g.successors("A")?, vec!["B"]);
//! assert_eq!(g.get_edge_weight("A", "B", None)?, 5.0);
//! assert_eq!(g.successor_on_edge("A", "e1")?, "B");
//! # Ok::<(), versatile_digraph::Error>(())
//! ```

pub mod document;
pub mod error;
pub mod export;
mod graph;

pub use document::{EdgeDocument, GraphDocument, NodeDocument};
pub use error::{Error, Result};
pub use export::{EdgeWeightSeries, RenderEdge, RenderNode, RenderSnapshot};
pub use graph::{
    DEFAULT_EDGE_WEIGHT, DEFAULT_NODE_VALUE, Digraph, EdgeKey, EdgeRef, GraphOptions,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
