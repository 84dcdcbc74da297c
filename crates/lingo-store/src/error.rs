#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("'{word}' is already in {owner}'s vocabulary")]
    DuplicateWord { owner: String, word: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize store document: {0}")]
    Serde(#[from] serde_json::Error),
}
