use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use lingo_types::{
    OwnerId, PracticeDraft, SentencePracticeRecord, VocabularyDraft, VocabularyEntry,
};
use tokio::sync::{Mutex, watch};

use crate::memory::{Document, MemoryStore};
use crate::{PracticeStore, StoreError, VocabularyStore};

/// Store persisted as a single JSON document, rewritten after each mutation
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
    /// Serializes mutate-then-flush so the file never lags behind a later write
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open the document at `path`, starting empty when the file does not exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let document = match tokio::fs::read_to_string(&path).await {
            Ok(data) if data.trim().is_empty() => Document::default(),
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No data file at {}, starting empty", path.display());
                Document::default()
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            entries = document.vocabulary.len(),
            records = document.practice.len(),
            "Loaded store from {}",
            path.display()
        );

        Ok(Self {
            path,
            inner: MemoryStore::from_document(document),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self) -> Result<(), StoreError> {
        let document = self.inner.snapshot().await;
        let data = serde_json::to_vec_pretty(&document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut temp = self.path.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        tokio::fs::write(&temp, data).await?;
        tokio::fs::rename(&temp, &self.path).await?;

        Ok(())
    }
}

#[async_trait]
impl VocabularyStore for JsonFileStore {
    async fn create_entry(
        &self,
        owner: &OwnerId,
        draft: VocabularyDraft,
    ) -> Result<VocabularyEntry, StoreError> {
        let _guard = self.write_lock.lock().await;
        let entry = self.inner.create_entry(owner, draft).await?;
        self.flush().await?;
        Ok(entry)
    }

    async fn list_entries(&self, owner: &OwnerId) -> Result<Vec<VocabularyEntry>, StoreError> {
        self.inner.list_entries(owner).await
    }

    async fn delete_entries(&self, owner: &OwnerId) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.inner.delete_entries(owner).await?;
        self.flush().await?;
        Ok(removed)
    }

    async fn subscribe_entries(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<VocabularyEntry>>, StoreError> {
        self.inner.subscribe_entries(owner).await
    }
}

#[async_trait]
impl PracticeStore for JsonFileStore {
    async fn create_record(
        &self,
        owner: &OwnerId,
        draft: PracticeDraft,
    ) -> Result<SentencePracticeRecord, StoreError> {
        let _guard = self.write_lock.lock().await;
        let record = self.inner.create_record(owner, draft).await?;
        self.flush().await?;
        Ok(record)
    }

    async fn list_records(
        &self,
        owner: &OwnerId,
    ) -> Result<Vec<SentencePracticeRecord>, StoreError> {
        self.inner.list_records(owner).await
    }

    async fn subscribe_records(
        &self,
        owner: &OwnerId,
    ) -> Result<watch::Receiver<Vec<SentencePracticeRecord>>, StoreError> {
        self.inner.subscribe_records(owner).await
    }
}
