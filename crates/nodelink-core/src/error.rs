pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed node record at index {index}: {source}")]
    MalformedNode {
        index: usize,
        source: serde_json::Error,
    },

    /// A link record without usable source/target references is the one
    /// input-contract violation we reject outright; links whose endpoints
    /// merely point at absent nodes are retained and degrade gracefully.
    #[error("Malformed link record at index {index}: {source}")]
    MalformedLink {
        index: usize,
        source: serde_json::Error,
    },

    #[error("Expected a JSON array of {expected} records")]
    NotAnArray { expected: &'static str },
}
