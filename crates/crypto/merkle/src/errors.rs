use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("required composite field `{field}` is not set")]
    NilComposite { field: &'static str },

    #[error("{count} chunks exceed the declared limit of {limit}")]
    ChunkLimitExceeded { count: usize, limit: usize },
}
