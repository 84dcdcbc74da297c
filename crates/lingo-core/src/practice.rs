use std::collections::HashSet;
use std::future::Future;
use std::time::Duration;

use lingo_store::PracticeStore;
use lingo_translator::GrammarChecker;
use lingo_translator::grammar::feedback_from;
use lingo_types::{MatchMode, OwnerId, PracticeDraft, SentencePracticeRecord};

use crate::error::CoreError;

/// Feedback stored when the checker is missing or fails
pub const GRAMMAR_UNAVAILABLE: &str = "Grammar check unavailable";
/// Suggestion shown when the checker is missing or fails
pub const NO_SUGGESTION: &str = "No suggestion available";

#[derive(Debug, Clone)]
pub struct PracticeOutcome {
    pub record: SentencePracticeRecord,
    pub suggestion: String,
}

/// Target words found in `sentence`, in target order
pub fn match_words(sentence: &str, targets: &[String], mode: MatchMode) -> Vec<String> {
    match mode {
        MatchMode::Lenient => {
            let haystack = sentence.to_lowercase();
            targets
                .iter()
                .filter(|target| {
                    let needle = target.trim().to_lowercase();
                    !needle.is_empty() && haystack.contains(&needle)
                })
                .cloned()
                .collect()
        }
        MatchMode::WholeWord => {
            let tokens = tokenize(sentence);
            targets
                .iter()
                .filter(|target| {
                    let needle = tokenize(target);
                    !needle.is_empty()
                        && tokens
                            .windows(needle.len())
                            .any(|w| w == needle.as_slice())
                })
                .cloned()
                .collect()
        }
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Trimmed, non-empty targets with case-insensitive repeats dropped
fn distinct_targets(targets: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    targets
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty() && seen.insert(t.to_lowercase()))
        .map(str::to_string)
        .collect()
}

pub struct PracticeService<'a> {
    store: &'a dyn PracticeStore,
    grammar: Option<&'a dyn GrammarChecker>,
    mode: MatchMode,
    call_timeout: Duration,
}

impl<'a> PracticeService<'a> {
    pub fn new(
        store: &'a dyn PracticeStore,
        grammar: Option<&'a dyn GrammarChecker>,
        mode: MatchMode,
        call_timeout: Duration,
    ) -> Self {
        Self {
            store,
            grammar,
            mode,
            call_timeout,
        }
    }

    /// Score a sentence against `targets` and persist the record.
    /// Callers pass the owner's vocabulary when the user named no targets.
    pub async fn submit(
        &self,
        owner: &OwnerId,
        sentence: &str,
        targets: &[String],
    ) -> Result<PracticeOutcome, CoreError> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Err(CoreError::EmptyInput("sentence"));
        }

        let vocab_words = distinct_targets(targets);
        let matched_words = match_words(sentence, &vocab_words, self.mode);

        let (grammar_feedback, suggestion) = match self.grammar {
            Some(checker) => {
                tokio::join!(
                    self.feedback(checker, sentence),
                    self.suggestion(checker, sentence)
                )
            }
            None => (GRAMMAR_UNAVAILABLE.to_string(), NO_SUGGESTION.to_string()),
        };

        let draft = PracticeDraft {
            sentence: sentence.to_string(),
            score: matched_words.len() as u32,
            vocab_words,
            matched_words,
            grammar_feedback,
        };
        let record = self.store.create_record(owner, draft).await?;

        tracing::info!(
            %owner,
            score = record.score,
            targets = record.vocab_words.len(),
            "practice sentence scored"
        );

        Ok(PracticeOutcome { record, suggestion })
    }

    async fn feedback(&self, checker: &dyn GrammarChecker, sentence: &str) -> String {
        match self.within(checker.check(sentence)).await {
            Some(issues) => feedback_from(&issues),
            None => GRAMMAR_UNAVAILABLE.to_string(),
        }
    }

    async fn suggestion(&self, checker: &dyn GrammarChecker, sentence: &str) -> String {
        self.within(checker.suggest(sentence))
            .await
            .unwrap_or_else(|| NO_SUGGESTION.to_string())
    }

    async fn within<T, E: std::fmt::Display>(
        &self,
        call: impl Future<Output = Result<T, E>>,
    ) -> Option<T> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(e)) => {
                tracing::warn!("grammar service failed: {e}");
                None
            }
            Err(_) => {
                tracing::warn!("grammar service timed out after {:?}", self.call_timeout);
                None
            }
        }
    }
}
