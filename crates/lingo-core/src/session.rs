use lingo_store::{VocabularyStore, newest_first};
use lingo_types::{OwnerId, VocabularyEntry};

use crate::acquisition::{AcquisitionPipeline, AcquisitionReport};
use crate::dedup::KnownWords;
use crate::error::CoreError;

/// The owner's vocabulary as last read from storage, plus the dedup set built from it
pub struct VocabularySession {
    owner: OwnerId,
    entries: Vec<VocabularyEntry>,
    known: KnownWords,
}

impl VocabularySession {
    pub fn new(owner: OwnerId) -> Self {
        Self {
            owner,
            entries: Vec::new(),
            known: KnownWords::new(),
        }
    }

    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }

    /// Newest first
    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn known(&self) -> &KnownWords {
        &self.known
    }

    pub fn words(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.word.clone()).collect()
    }

    /// Rebuild entries and known words from storage
    pub async fn refresh(&mut self, store: &dyn VocabularyStore) -> Result<(), CoreError> {
        let mut entries = store.list_entries(&self.owner).await?;
        newest_first(&mut entries);

        self.known = KnownWords::from_entries(&entries);
        self.entries = entries;

        tracing::debug!(owner = %self.owner, entries = self.entries.len(), "vocabulary refreshed");
        Ok(())
    }

    /// Run the pipeline against this session's known words, then re-read storage
    pub async fn generate(&mut self, pipeline: &AcquisitionPipeline<'_>) -> AcquisitionReport {
        let report = pipeline.run(&self.owner, &mut self.known).await;

        if let Err(e) = self.refresh(pipeline.store()).await {
            tracing::error!(owner = %self.owner, "failed to refresh vocabulary after acquisition: {e}");
        }

        report
    }

    /// Delete every entry of the owner and forget the known words
    pub async fn clear(&mut self, store: &dyn VocabularyStore) -> Result<usize, CoreError> {
        let removed = store.delete_entries(&self.owner).await?;

        self.entries.clear();
        self.known.clear();

        tracing::info!(owner = %self.owner, removed, "vocabulary cleared");
        Ok(removed)
    }
}
