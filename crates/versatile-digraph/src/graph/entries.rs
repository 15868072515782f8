//! Internal storage entries for [`Digraph`](super::Digraph).

use super::{EdgeKey, EdgeRef};

#[derive(Debug, Clone)]
pub(in crate::graph) struct NodeEntry {
    pub(in crate::graph) id: String,
    pub(in crate::graph) value: f64,
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry {
    pub(in crate::graph) key: EdgeKey,
    pub(in crate::graph) w_ix: usize,
    pub(in crate::graph) weight: f64,
}

impl EdgeEntry {
    pub(in crate::graph) fn edge_ref(&self) -> EdgeRef<'_> {
        EdgeRef {
            v: &self.key.v,
            w: &self.key.w,
            name: &self.key.name,
            weight: self.weight,
        }
    }
}
