//! In-process fakes of the remote adapters

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lingo_dictionary::{
    DefinitionSource, DefinitionText, LexicalEntry, Phonetic, Sense, SourceError, WordSource,
};
use lingo_translator::{
    GrammarChecker, GrammarIssue, LanguageCode, ProviderMetadata, ServiceError, Translation,
    Translator,
};

/// Hands out words in order, then reports an empty source
pub struct ScriptedWords {
    queue: Mutex<VecDeque<String>>,
    repeat: Option<String>,
    pub calls: AtomicUsize,
}

impl ScriptedWords {
    pub fn new<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            queue: Mutex::new(words.into_iter().map(str::to_string).collect()),
            repeat: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Always answers with the same word
    pub fn repeating(word: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            repeat: Some(word.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WordSource for ScriptedWords {
    async fn random_words(&self, count: usize) -> Result<Vec<String>, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(word) = &self.repeat {
            return Ok(vec![word.clone(); count]);
        }

        let mut queue = self.queue.lock().unwrap();
        let words: Vec<String> = (0..count).filter_map(|_| queue.pop_front()).collect();
        if words.is_empty() {
            return Err(SourceError::Empty);
        }
        Ok(words)
    }
}

/// Dictionary answering from a fixed table
#[derive(Default)]
pub struct FakeDictionary {
    entries: HashMap<String, LexicalEntry>,
    stall: Option<Duration>,
    pub lookups: AtomicUsize,
}

impl FakeDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, word: &str, part_of_speech: &str, phonetic: &str) -> Self {
        self.entries
            .insert(word.to_lowercase(), entry(word, part_of_speech, phonetic));
        self
    }

    pub fn with_entry(mut self, word: &str, entry: LexicalEntry) -> Self {
        self.entries.insert(word.to_lowercase(), entry);
        self
    }

    /// Every lookup hangs for `delay` before answering
    pub fn stalled(mut self, delay: Duration) -> Self {
        self.stall = Some(delay);
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DefinitionSource for FakeDictionary {
    async fn lookup(&self, word: &str) -> Result<Option<LexicalEntry>, SourceError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.stall {
            tokio::time::sleep(delay).await;
        }
        Ok(self.entries.get(&word.to_lowercase()).cloned())
    }
}

pub fn entry(word: &str, part_of_speech: &str, phonetic: &str) -> LexicalEntry {
    LexicalEntry {
        word: word.to_string(),
        phonetic: None,
        phonetics: vec![Phonetic {
            text: Some(phonetic.to_string()),
            audio: None,
        }],
        meanings: vec![Sense {
            part_of_speech: Some(part_of_speech.to_string()),
            definitions: vec![DefinitionText {
                definition: format!("The meaning of {word}."),
                example: Some(format!("An example with {word}.")),
                synonyms: vec![],
                antonyms: vec![],
            }],
            synonyms: vec![],
            antonyms: vec![],
        }],
    }
}

pub struct FakeGrammar {
    pub issues: Vec<GrammarIssue>,
    pub fail: bool,
}

#[async_trait]
impl GrammarChecker for FakeGrammar {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, ServiceError> {
        if self.fail {
            return Err(ServiceError::ApiError("HTTP 503".to_string()));
        }
        Ok(self.issues.clone())
    }
}

pub struct FakeTranslator {
    pub fail: bool,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, ServiceError> {
        if self.fail {
            return Err(ServiceError::RateLimitExceeded);
        }
        Ok(Translation {
            text: format!("[{to}] {text}"),
            from,
            to,
            provider: "fake".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Fake".to_string(),
            requires_api_key: false,
        }
    }
}
