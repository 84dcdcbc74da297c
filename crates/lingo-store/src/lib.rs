mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use lingo_types::{
    OwnerId, PracticeDraft, SentencePracticeRecord, VocabularyDraft, VocabularyEntry,
};
use tokio::sync::watch;

/// Owner-scoped vocabulary persistence
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// Append an entry; storage assigns the id and creation time.
    /// Fails with `StoreError::DuplicateWord` when the owner already has the word.
    async fn create_entry(
        &self,
        owner: &OwnerId,
        draft: VocabularyDraft,
    ) -> Result<VocabularyEntry, StoreError>;

    /// Every entry of the owner, in no particular order
    async fn list_entries(&self, owner: &OwnerId) -> Result<Vec<VocabularyEntry>, StoreError>;

    /// Remove every entry of the owner, returning how many were removed
    async fn delete_entries(&self, owner: &OwnerId) -> Result<usize, StoreError>;

    /// Live view of the owner's full entry set, pushed on every change
    async fn subscribe_entries(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<VocabularyEntry>>, StoreError>;
}

/// Owner-scoped, append-only practice history
#[async_trait]
pub trait PracticeStore: Send + Sync {
    async fn create_record(
        &self,
        owner: &OwnerId,
        draft: PracticeDraft,
    ) -> Result<SentencePracticeRecord, StoreError>;

    async fn list_records(
        &self,
        owner: &OwnerId,
    ) -> Result<Vec<SentencePracticeRecord>, StoreError>;

    /// Live view of the owner's full record set, pushed on every change
    async fn subscribe_records(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<SentencePracticeRecord>>, StoreError>;
}

/// Key used for the per-owner uniqueness constraint
pub fn word_key(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Sort by creation time, newest first
pub fn newest_first(entries: &mut [VocabularyEntry]) {
    entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
