use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use lingo_types::{
    OwnerId, PracticeDraft, SentencePracticeRecord, VocabularyDraft, VocabularyEntry,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock, watch};
use uuid::Uuid;

use crate::{PracticeStore, StoreError, VocabularyStore, word_key};

/// Everything the store holds, across owners
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Document {
    #[serde(default)]
    pub vocabulary: Vec<VocabularyEntry>,
    #[serde(default)]
    pub practice: Vec<SentencePracticeRecord>,
}

impl Document {
    fn entries_of(&self, owner: &OwnerId) -> Vec<VocabularyEntry> {
        self.vocabulary
            .iter()
            .filter(|e| &e.owner_id == owner)
            .cloned()
            .collect()
    }

    fn records_of(&self, owner: &OwnerId) -> Vec<SentencePracticeRecord> {
        self.practice
            .iter()
            .filter(|r| &r.owner_id == owner)
            .cloned()
            .collect()
    }
}

/// In-process store; also the working copy behind `JsonFileStore`
#[derive(Default)]
pub struct MemoryStore {
    document: RwLock<Document>,
    entry_feeds: Mutex<HashMap<OwnerId, watch::Sender<Vec<VocabularyEntry>>>>,
    record_feeds: Mutex<HashMap<OwnerId, watch::Sender<Vec<SentencePracticeRecord>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_document(document: Document) -> Self {
        Self {
            document: RwLock::new(document),
            ..Default::default()
        }
    }

    pub(crate) async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }

    async fn publish_entries(&self, owner: &OwnerId) {
        let feeds = self.entry_feeds.lock().await;
        if let Some(feed) = feeds.get(owner) {
            let entries = self.document.read().await.entries_of(owner);
            feed.send_replace(entries);
        }
    }

    async fn publish_records(&self, owner: &OwnerId) {
        let feeds = self.record_feeds.lock().await;
        if let Some(feed) = feeds.get(owner) {
            let records = self.document.read().await.records_of(owner);
            feed.send_replace(records);
        }
    }
}

#[async_trait]
impl VocabularyStore for MemoryStore {
    async fn create_entry(
        &self,
        owner: &OwnerId,
        draft: VocabularyDraft,
    ) -> Result<VocabularyEntry, StoreError> {
        let entry = {
            let mut document = self.document.write().await;

            let key = word_key(&draft.word);
            let taken = document
                .vocabulary
                .iter()
                .any(|e| &e.owner_id == owner && word_key(&e.word) == key);
            if taken {
                return Err(StoreError::DuplicateWord {
                    owner: owner.to_string(),
                    word: draft.word,
                });
            }

            let entry = VocabularyEntry {
                id: Uuid::new_v4(),
                owner_id: owner.clone(),
                word: draft.word,
                meaning: draft.meaning,
                example: draft.example,
                part_of_speech: draft.part_of_speech,
                pronunciation: draft.pronunciation,
                synonyms: draft.synonyms,
                antonyms: draft.antonyms,
                created_at: Utc::now(),
            };
            document.vocabulary.push(entry.clone());
            entry
        };

        tracing::debug!(%owner, word = %entry.word, "vocabulary entry stored");
        self.publish_entries(owner).await;

        Ok(entry)
    }

    async fn list_entries(&self, owner: &OwnerId) -> Result<Vec<VocabularyEntry>, StoreError> {
        Ok(self.document.read().await.entries_of(owner))
    }

    async fn delete_entries(&self, owner: &OwnerId) -> Result<usize, StoreError> {
        let removed = {
            let mut document = self.document.write().await;
            let before = document.vocabulary.len();
            document.vocabulary.retain(|e| &e.owner_id != owner);
            before - document.vocabulary.len()
        };

        tracing::debug!(%owner, removed, "vocabulary cleared");
        self.publish_entries(owner).await;

        Ok(removed)
    }

    async fn subscribe_entries(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<VocabularyEntry>>, StoreError> {
        let mut feeds = self.entry_feeds.lock().await;
        if let Some(feed) = feeds.get(owner) {
            return Ok(feed.subscribe());
        }

        let current = self.document.read().await.entries_of(owner);
        let (feed, receiver) = watch::channel(current);
        feeds.insert(owner.clone(), feed);
        Ok(receiver)
    }
}

#[async_trait]
impl PracticeStore for MemoryStore {
    async fn create_record(
        &self,
        owner: &OwnerId,
        draft: PracticeDraft,
    ) -> Result<SentencePracticeRecord, StoreError> {
        let record = SentencePracticeRecord {
            id: Uuid::new_v4(),
            owner_id: owner.clone(),
            sentence: draft.sentence,
            vocab_words: draft.vocab_words,
            matched_words: draft.matched_words,
            grammar_feedback: draft.grammar_feedback,
            score: draft.score,
            created_at: Utc::now(),
        };
        self.document.write().await.practice.push(record.clone());

        tracing::debug!(%owner, score = record.score, "practice record stored");
        self.publish_records(owner).await;

        Ok(record)
    }

    async fn list_records(
        &self,
        owner: &OwnerId,
    ) -> Result<Vec<SentencePracticeRecord>, StoreError> {
        Ok(self.document.read().await.records_of(owner))
    }

    async fn subscribe_records(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<SentencePracticeRecord>>, StoreError> {
        let mut feeds = self.record_feeds.lock().await;
        if let Some(feed) = feeds.get(owner) {
            return Ok(feed.subscribe());
        }

        let current = self.document.read().await.records_of(owner);
        let (feed, receiver) = watch::channel(current);
        feeds.insert(owner.clone(), feed);
        Ok(receiver)
    }
}
