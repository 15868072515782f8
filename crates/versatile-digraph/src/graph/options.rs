//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Allow several (differently named) edges between the same ordered pair of nodes.
    ///
    /// With `false`, a second edge on a pair is rejected with
    /// [`Error::ParallelEdge`](crate::Error::ParallelEdge).
    pub multigraph: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self { multigraph: true }
    }
}
