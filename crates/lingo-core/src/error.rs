use lingo_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    #[error("invalid threshold table: {0:?}")]
    InvalidThresholds(Vec<u32>),

    #[error(transparent)]
    Store(#[from] StoreError),
}
