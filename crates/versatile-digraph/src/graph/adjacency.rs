//! Per-node adjacency lists used by [`Digraph`](super::Digraph).
//!
//! The graph only grows, so the lists are maintained eagerly on insert instead of being rebuilt
//! from the edge table on every traversal query.

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct DirectedAdjacency {
    out: Vec<Vec<usize>>,
    in_: Vec<Vec<usize>>,
}

impl DirectedAdjacency {
    pub(in crate::graph) fn push_node(&mut self) {
        self.out.push(Vec::new());
        self.in_.push(Vec::new());
    }

    pub(in crate::graph) fn push_edge(&mut self, v_ix: usize, w_ix: usize, edge_ix: usize) {
        self.out[v_ix].push(edge_ix);
        self.in_[w_ix].push(edge_ix);
    }

    pub(in crate::graph) fn out_edges(&self, v_ix: usize) -> &[usize] {
        &self.out[v_ix]
    }

    pub(in crate::graph) fn in_edges(&self, v_ix: usize) -> &[usize] {
        &self.in_[v_ix]
    }
}
