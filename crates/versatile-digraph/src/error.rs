pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A node value or edge weight that is not a usable number.
    #[error("invalid value for {subject}: {message}")]
    InvalidValue { subject: String, message: String },

    #[error("node `{id}` already exists")]
    DuplicateNode { id: String },

    #[error("an edge named `{name}` already exists")]
    DuplicateEdgeName { name: String },

    /// An edge referenced an endpoint that was never added.
    #[error("edge `{edge}` references missing node `{id}`")]
    MissingNode { edge: String, id: String },

    #[error("node `{id}` not found")]
    NodeNotFound { id: String },

    #[error("no edge {edge}")]
    EdgeNotFound { edge: String },

    #[error("{count} parallel edges run from `{v}` to `{w}`; an edge name is required")]
    EdgeNameRequired { v: String, w: String, count: usize },

    #[error("edge `{name}` would be a second edge from `{v}` to `{w}` in a graph without parallel edges")]
    ParallelEdge { v: String, w: String, name: String },

    #[error("invalid graph document: {message}")]
    Document { message: String },
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Document {
            message: value.to_string(),
        }
    }
}
