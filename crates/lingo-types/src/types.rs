use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the user whose records are read or written
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A persisted vocabulary word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    pub part_of_speech: String,
    #[serde(default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A validated vocabulary word that storage has not assigned an id to yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyDraft {
    pub word: String,
    pub meaning: String,
    pub example: String,
    pub part_of_speech: String,
    pub pronunciation: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// One submitted practice sentence and how it scored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentencePracticeRecord {
    pub id: Uuid,
    pub owner_id: OwnerId,
    pub sentence: String,
    pub vocab_words: Vec<String>,
    pub matched_words: Vec<String>,
    pub grammar_feedback: String,
    pub score: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeDraft {
    pub sentence: String,
    pub vocab_words: Vec<String>,
    pub matched_words: Vec<String>,
    pub grammar_feedback: String,
    pub score: u32,
}

/// How target words are located inside a practice sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Case-insensitive substring test, "cat" matches inside "category"
    #[default]
    Lenient,
    /// Targets must line up with whole sentence tokens
    WholeWord,
}

/// Level reached from distinct practiced words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub distinct_words: usize,
    /// 1-based
    pub level: usize,
    pub max_level: usize,
    /// Completion towards the next threshold, 0..=100
    pub percent: u8,
}

/// Running counters of one acquisition run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AcquisitionTally {
    pub successes: usize,
    pub failures: usize,
}

#[derive(Debug, Clone)]
pub struct AcquisitionSummary {
    pub tally: AcquisitionTally,
    pub accepted: Vec<String>,
    /// Ended before reaching the target count
    pub exhausted: bool,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // Front end -> event loop
    GenerateVocabulary,
    ListVocabulary,
    ClearVocabulary {
        confirmed: bool,
    },
    Translate {
        text: String,
        from_lang: Option<String>,
        to_lang: Option<String>,
    },
    SubmitPractice {
        sentence: String,
        words: Vec<String>,
    },
    ShowProgress,
    Shutdown,

    // Event loop -> front end
    AcquisitionStatus(AcquisitionTally),
    AcquisitionFinished(AcquisitionSummary),
    ShowVocabulary(Vec<VocabularyEntry>),
    VocabularyCleared {
        removed: usize,
    },
    ShowTranslation {
        text: String,
        translated: String,
        from_lang: String,
        to_lang: String,
    },
    ShowPractice {
        record: SentencePracticeRecord,
        suggestion: String,
    },
    ProgressUpdated(Progress),
    Notice(String),
    Done,
}
