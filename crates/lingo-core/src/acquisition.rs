//! Word acquisition: draw random candidates, validate them against the
//! dictionary and the owner's known words, persist the accepted ones.
//!
//! A run fills up to `max_slots` slots and stops once `target_count` words
//! are accepted. Each slot gets `max_retries` attempts. Every rejected
//! attempt counts as a failure, duplicates included, and an abandoned slot
//! counts once more. Nothing escapes a run as an error.

use std::future::Future;
use std::time::Duration;

use lingo_config::Config;
use lingo_dictionary::{DefinitionSource, LexicalEntry, SourceError, WordSource};
use lingo_store::VocabularyStore;
use lingo_types::{AcquisitionSummary, AcquisitionTally, OwnerId, VocabularyDraft, VocabularyEntry};

use crate::dedup::KnownWords;

const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

#[derive(Debug, Clone)]
pub struct AcquisitionPolicy {
    pub target_count: usize,
    pub max_slots: usize,
    pub max_retries: usize,
    pub min_word_length: usize,
    /// Deadline for each word source and dictionary call
    pub call_timeout: Duration,
}

impl AcquisitionPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            target_count: config.acquisition.target_count,
            max_slots: config.acquisition.max_slots,
            max_retries: config.acquisition.max_retries,
            min_word_length: config.acquisition.min_word_length,
            call_timeout: config.network.request_timeout(),
        }
    }
}

impl Default for AcquisitionPolicy {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Why a candidate was turned down
#[derive(Debug, thiserror::Error)]
pub enum Rejection {
    #[error("'{0}' is already known")]
    Duplicate(String),

    #[error("'{word}' is shorter than {min} characters")]
    TooShort { word: String, min: usize },

    #[error("no dictionary entry for '{0}'")]
    NotFound(String),

    #[error("dictionary entry for '{0}' has no definition text")]
    NoDefinition(String),

    #[error("dictionary entry for '{word}' is missing {field}")]
    MissingField { word: String, field: &'static str },

    #[error("remote source failed: {0}")]
    Source(#[from] SourceError),

    #[error("remote call timed out after {0:?}")]
    Timeout(Duration),
}

#[derive(Debug, Clone, Default)]
pub struct AcquisitionReport {
    /// Entries as persisted, in acceptance order
    pub entries: Vec<VocabularyEntry>,
    pub tally: AcquisitionTally,
    pub slots_used: usize,
    pub abandoned_slots: usize,
    /// The run ended short of the target: no new words were available
    pub exhausted: bool,
}

impl AcquisitionReport {
    pub fn summary(&self) -> AcquisitionSummary {
        AcquisitionSummary {
            tally: self.tally,
            accepted: self.entries.iter().map(|e| e.word.clone()).collect(),
            exhausted: self.exhausted,
        }
    }
}

type StatusFn<'a> = Box<dyn Fn(AcquisitionTally) + Send + Sync + 'a>;

pub struct AcquisitionPipeline<'a> {
    words: &'a dyn WordSource,
    definitions: &'a dyn DefinitionSource,
    store: &'a dyn VocabularyStore,
    policy: AcquisitionPolicy,
    on_status: Option<StatusFn<'a>>,
}

impl<'a> AcquisitionPipeline<'a> {
    pub fn new(
        words: &'a dyn WordSource,
        definitions: &'a dyn DefinitionSource,
        store: &'a dyn VocabularyStore,
        policy: AcquisitionPolicy,
    ) -> Self {
        Self {
            words,
            definitions,
            store,
            policy,
            on_status: None,
        }
    }

    /// Called with the running tally after every success or failure
    pub fn on_status(mut self, callback: impl Fn(AcquisitionTally) + Send + Sync + 'a) -> Self {
        self.on_status = Some(Box::new(callback));
        self
    }

    pub fn store(&self) -> &'a dyn VocabularyStore {
        self.store
    }

    pub fn policy(&self) -> &AcquisitionPolicy {
        &self.policy
    }

    /// Acquire and persist new words for `owner`.
    /// `known` is updated as soon as a word is accepted.
    pub async fn run(&self, owner: &OwnerId, known: &mut KnownWords) -> AcquisitionReport {
        let mut report = AcquisitionReport::default();
        let mut batch: Vec<VocabularyDraft> = Vec::with_capacity(self.policy.target_count);

        while batch.len() < self.policy.target_count && report.slots_used < self.policy.max_slots {
            report.slots_used += 1;
            let slot = report.slots_used;

            match self.fill_slot(slot, known, &mut report).await {
                Some(draft) => {
                    tracing::debug!(%owner, slot, word = %draft.word, "candidate accepted");
                    known.insert(&draft.word);
                    batch.push(draft);
                }
                None => {
                    tracing::warn!(%owner, slot, "slot abandoned after {} attempts", self.policy.max_retries);
                    report.abandoned_slots += 1;
                    report.tally.failures += 1;
                    self.publish(report.tally);
                }
            }
        }

        report.exhausted = batch.len() < self.policy.target_count;
        if report.exhausted {
            tracing::warn!(
                %owner,
                accepted = batch.len(),
                target = self.policy.target_count,
                "no new words available"
            );
        }

        for draft in batch {
            let word = draft.word.clone();
            match self.store.create_entry(owner, draft).await {
                Ok(entry) => {
                    report.tally.successes += 1;
                    report.entries.push(entry);
                }
                Err(e) => {
                    tracing::error!(%owner, %word, "failed to persist vocabulary entry: {e}");
                    report.tally.failures += 1;
                }
            }
            self.publish(report.tally);
        }

        tracing::info!(
            %owner,
            successes = report.tally.successes,
            failures = report.tally.failures,
            slots = report.slots_used,
            "acquisition finished"
        );

        report
    }

    async fn fill_slot(
        &self,
        slot: usize,
        known: &KnownWords,
        report: &mut AcquisitionReport,
    ) -> Option<VocabularyDraft> {
        for attempt in 1..=self.policy.max_retries {
            match self.attempt(known).await {
                Ok(draft) => return Some(draft),
                Err(rejection) => {
                    tracing::debug!(slot, attempt, "candidate rejected: {rejection}");
                    report.tally.failures += 1;
                    self.publish(report.tally);
                }
            }
        }
        None
    }

    async fn attempt(&self, known: &KnownWords) -> Result<VocabularyDraft, Rejection> {
        let candidate = self.draw_candidate().await?;

        // cheap checks first, no dictionary call for these
        if known.contains(&candidate) {
            return Err(Rejection::Duplicate(candidate));
        }
        if candidate.chars().count() < self.policy.min_word_length {
            return Err(Rejection::TooShort {
                word: candidate,
                min: self.policy.min_word_length,
            });
        }

        let entry = self
            .within(self.definitions.lookup(&candidate))
            .await?
            .ok_or_else(|| Rejection::NotFound(candidate.clone()))?;

        build_draft(&candidate, &entry, known, self.policy.min_word_length)
    }

    async fn draw_candidate(&self) -> Result<String, Rejection> {
        let words = self.within(self.words.random_words(1)).await?;
        words
            .into_iter()
            .map(|w| w.trim().to_string())
            .find(|w| !w.is_empty())
            .ok_or(Rejection::Source(SourceError::Empty))
    }

    async fn within<T>(
        &self,
        call: impl Future<Output = Result<T, SourceError>>,
    ) -> Result<T, Rejection> {
        match tokio::time::timeout(self.policy.call_timeout, call).await {
            Ok(result) => result.map_err(Rejection::from),
            Err(_) => Err(Rejection::Timeout(self.policy.call_timeout)),
        }
    }

    fn publish(&self, tally: AcquisitionTally) {
        if let Some(callback) = &self.on_status {
            callback(tally);
        }
    }
}

/// Turn a dictionary entry into a draft, or say why it cannot be used
pub fn build_draft(
    candidate: &str,
    entry: &LexicalEntry,
    known: &KnownWords,
    min_word_length: usize,
) -> Result<VocabularyDraft, Rejection> {
    let (sense, definition) = entry
        .first_definition()
        .ok_or_else(|| Rejection::NoDefinition(candidate.to_string()))?;

    let word = match entry.word.trim() {
        "" => candidate.trim(),
        headword => headword,
    }
    .to_string();

    if word.is_empty() {
        return Err(Rejection::MissingField {
            word: candidate.to_string(),
            field: "word",
        });
    }
    if word.chars().count() < min_word_length {
        return Err(Rejection::TooShort {
            word,
            min: min_word_length,
        });
    }

    let meaning = definition.definition.trim().to_string();
    if meaning.is_empty() {
        return Err(Rejection::MissingField { word, field: "meaning" });
    }

    let pronunciation = match entry.pronunciation() {
        Some(p) => p.to_string(),
        None => return Err(Rejection::MissingField { word, field: "pronunciation" }),
    };

    // the headword may differ from what was asked for
    if known.contains(&word) {
        return Err(Rejection::Duplicate(word));
    }

    let part_of_speech = sense
        .part_of_speech
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(UNKNOWN_PART_OF_SPEECH)
        .to_string();

    Ok(VocabularyDraft {
        word,
        meaning,
        example: definition.example.clone().unwrap_or_default(),
        part_of_speech,
        pronunciation: Some(pronunciation),
        synonyms: merged(&definition.synonyms, &sense.synonyms),
        antonyms: merged(&definition.antonyms, &sense.antonyms),
    })
}

/// Concatenate keeping first occurrences
fn merged(first: &[String], second: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(first.len() + second.len());
    for item in first.iter().chain(second) {
        let item = item.trim();
        if !item.is_empty() && !out.iter().any(|o| o.eq_ignore_ascii_case(item)) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use lingo_dictionary::{DefinitionText, Sense};
    use lingo_store::MemoryStore;

    use super::*;
    use crate::testing::{FakeDictionary, ScriptedWords, entry};

    fn policy() -> AcquisitionPolicy {
        AcquisitionPolicy {
            call_timeout: Duration::from_secs(5),
            ..AcquisitionPolicy::default()
        }
    }

    #[tokio::test]
    async fn accepts_target_count_of_new_words() {
        let words = ScriptedWords::new(["harbor", "meadow", "canyon", "glacier"]);
        let dictionary = FakeDictionary::new()
            .with("harbor", "noun", "/ˈhɑɹbɚ/")
            .with("meadow", "noun", "/ˈmɛdoʊ/")
            .with("canyon", "noun", "/ˈkænjən/")
            .with("glacier", "noun", "/ˈɡleɪʃɚ/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::new();

        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy());
        let report = pipeline.run(&owner, &mut known).await;

        let accepted: Vec<&str> = report.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(accepted, vec!["harbor", "meadow", "canyon"]);
        assert_eq!(report.tally, AcquisitionTally { successes: 3, failures: 0 });
        assert!(!report.exhausted);
        assert_eq!(report.slots_used, 3);
        assert!(known.contains("canyon"));
        assert!(!known.contains("glacier"));
        assert_eq!(store.list_entries(&owner).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn accepted_words_are_unique_and_complete() {
        // "Meadow" repeats within the run, "harbor" is already owned
        let words = ScriptedWords::new([
            "harbor", "meadow", "Meadow", "cat", "canyon", "bare", "glacier",
        ]);
        let dictionary = FakeDictionary::new()
            .with("harbor", "noun", "/h/")
            .with("meadow", "noun", "/m/")
            .with("canyon", "noun", "/c/")
            .with("bare", "adjective", "")
            .with("glacier", "noun", "/g/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::from_words(["Harbor"]);

        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy());
        let report = pipeline.run(&owner, &mut known).await;

        let mut seen = HashSet::new();
        for entry in &report.entries {
            assert!(seen.insert(entry.word.to_lowercase()), "duplicate {}", entry.word);
            assert_ne!(entry.word.to_lowercase(), "harbor");
            assert!(entry.word.chars().count() >= 4);
            assert!(!entry.meaning.is_empty());
            assert!(entry.pronunciation.as_deref().is_some_and(|p| !p.is_empty()));
        }
        let accepted: Vec<&str> = report.entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(accepted, vec!["meadow", "canyon", "glacier"]);
        // harbor, Meadow, cat, bare rejected
        assert_eq!(report.tally.failures, 4);
        // duplicates and "cat" never reached the dictionary
        assert_eq!(dictionary.lookups(), 4);
    }

    #[tokio::test]
    async fn not_found_everywhere_terminates_with_bounded_lookups() {
        let words = ScriptedWords::repeating("phantom");
        let dictionary = FakeDictionary::new();
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::new();

        let policy = policy();
        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy.clone());
        let report = pipeline.run(&owner, &mut known).await;

        assert!(report.entries.is_empty());
        assert!(report.exhausted);
        assert_eq!(report.slots_used, policy.max_slots);
        assert_eq!(report.abandoned_slots, policy.max_slots);
        assert_eq!(dictionary.lookups(), policy.max_retries * policy.max_slots);
        // one failure per attempt plus one per abandoned slot
        assert_eq!(
            report.tally.failures,
            policy.max_slots * (policy.max_retries + 1)
        );
        assert_eq!(report.tally.successes, 0);
    }

    #[tokio::test]
    async fn endless_duplicates_consume_attempts() {
        let words = ScriptedWords::repeating("harbor");
        let dictionary = FakeDictionary::new().with("harbor", "noun", "/h/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::from_words(["harbor"]);

        let policy = policy();
        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy.clone());
        let report = pipeline.run(&owner, &mut known).await;

        assert!(report.exhausted);
        assert!(report.entries.is_empty());
        assert_eq!(words.calls(), policy.max_slots * policy.max_retries);
        assert_eq!(dictionary.lookups(), 0);
    }

    #[tokio::test]
    async fn word_source_running_dry_is_a_failure_not_an_error() {
        let words = ScriptedWords::new(["harbor"]);
        let dictionary = FakeDictionary::new().with("harbor", "noun", "/h/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::new();

        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy());
        let report = pipeline.run(&owner, &mut known).await;

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.tally.successes, 1);
        assert!(report.exhausted);
        assert_eq!(report.abandoned_slots, 4);
    }

    #[tokio::test]
    async fn stalled_dictionary_times_out() {
        let words = ScriptedWords::repeating("harbor");
        let dictionary = FakeDictionary::new()
            .with("harbor", "noun", "/h/")
            .stalled(Duration::from_secs(30));
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::new();

        let policy = AcquisitionPolicy {
            target_count: 1,
            max_slots: 1,
            max_retries: 2,
            call_timeout: Duration::from_millis(20),
            ..AcquisitionPolicy::default()
        };
        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy);
        let report = pipeline.run(&owner, &mut known).await;

        assert!(report.entries.is_empty());
        assert_eq!(dictionary.lookups(), 2);
        assert_eq!(report.tally.failures, 3);
    }

    #[tokio::test]
    async fn storage_constraint_rejection_counts_as_failure() {
        let words = ScriptedWords::new(["harbor", "meadow", "canyon"]);
        let dictionary = FakeDictionary::new()
            .with("harbor", "noun", "/h/")
            .with("meadow", "noun", "/m/")
            .with("canyon", "noun", "/c/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");

        // stored by a concurrent run this session has not seen yet
        let draft = build_draft("meadow", &entry("meadow", "noun", "/m/"), &KnownWords::new(), 4)
            .unwrap();
        store.create_entry(&owner, draft).await.unwrap();

        let mut known = KnownWords::new();
        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy());
        let report = pipeline.run(&owner, &mut known).await;

        assert_eq!(report.tally, AcquisitionTally { successes: 2, failures: 1 });
        assert_eq!(store.list_entries(&owner).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn status_callback_sees_running_tally() {
        let words = ScriptedWords::new(["cat", "harbor", "meadow", "canyon"]);
        let dictionary = FakeDictionary::new()
            .with("harbor", "noun", "/h/")
            .with("meadow", "noun", "/m/")
            .with("canyon", "noun", "/c/");
        let store = MemoryStore::new();
        let owner = OwnerId::new("alice");
        let mut known = KnownWords::new();
        let seen = Mutex::new(Vec::new());

        let pipeline = AcquisitionPipeline::new(&words, &dictionary, &store, policy())
            .on_status(|tally| seen.lock().unwrap().push(tally));
        pipeline.run(&owner, &mut known).await;
        drop(pipeline);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.first(), Some(&AcquisitionTally { successes: 0, failures: 1 }));
        assert_eq!(seen.last(), Some(&AcquisitionTally { successes: 3, failures: 1 }));
    }

    #[test]
    fn draft_fills_defaults_and_merges_synonyms() {
        let entry = LexicalEntry {
            word: "Harbor".to_string(),
            phonetic: Some("/ˈhɑɹbɚ/".to_string()),
            phonetics: vec![],
            meanings: vec![Sense {
                part_of_speech: None,
                definitions: vec![DefinitionText {
                    definition: " A sheltered expanse of water. ".to_string(),
                    example: None,
                    synonyms: vec!["haven".to_string()],
                    antonyms: vec![],
                }],
                synonyms: vec!["Haven".to_string(), "port".to_string()],
                antonyms: vec!["open sea".to_string()],
            }],
        };

        let draft = build_draft("harbor", &entry, &KnownWords::new(), 4).unwrap();
        assert_eq!(draft.word, "Harbor");
        assert_eq!(draft.meaning, "A sheltered expanse of water.");
        assert_eq!(draft.example, "");
        assert_eq!(draft.part_of_speech, "unknown");
        assert_eq!(draft.pronunciation.as_deref(), Some("/ˈhɑɹbɚ/"));
        assert_eq!(draft.synonyms, vec!["haven", "port"]);
        assert_eq!(draft.antonyms, vec!["open sea"]);
    }

    #[test]
    fn draft_rejects_incomplete_entries() {
        let known = KnownWords::new();

        let no_phonetic = entry("harbor", "noun", "  ");
        assert!(matches!(
            build_draft("harbor", &no_phonetic, &known, 4),
            Err(Rejection::MissingField { field: "pronunciation", .. })
        ));

        let mut no_definition = entry("harbor", "noun", "/h/");
        no_definition.meanings[0].definitions.clear();
        assert!(matches!(
            build_draft("harbor", &no_definition, &known, 4),
            Err(Rejection::NoDefinition(_))
        ));

        // the headword resolves to something already owned
        let redirected = entry("Canyon", "noun", "/c/");
        let known = KnownWords::from_words(["canyon"]);
        assert!(matches!(
            build_draft("canyons", &redirected, &known, 4),
            Err(Rejection::Duplicate(_))
        ));
    }
}
