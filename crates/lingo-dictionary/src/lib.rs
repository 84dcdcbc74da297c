mod client;
mod error;
mod free_dictionary;
mod random_word;
mod types;

pub use client::http_client;
pub use error::SourceError;
pub use free_dictionary::FreeDictionaryClient;
pub use random_word::RandomWordClient;
pub use types::{DefinitionText, LexicalEntry, Phonetic, Sense};

/// Remote source of random candidate words
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Request `count` candidate words, in the order the source returned them
    async fn random_words(&self, count: usize) -> Result<Vec<String>, SourceError>;
}

/// Remote dictionary keyed by headword
#[async_trait::async_trait]
pub trait DefinitionSource: Send + Sync {
    /// Look up a single word; `Ok(None)` means the dictionary has no entry
    async fn lookup(&self, word: &str) -> Result<Option<LexicalEntry>, SourceError>;
}
