use std::collections::HashSet;

use lingo_config::progress::ProgressConfig;
use lingo_types::{Progress, SentencePracticeRecord};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::dedup::normalize_word;
use crate::error::CoreError;

/// Ascending distinct-word counts that close each level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdTable {
    thresholds: Vec<u32>,
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            thresholds: vec![100, 200, 500, 1000, 2000, 3000],
        }
    }
}

impl ThresholdTable {
    pub fn new(thresholds: Vec<u32>) -> Result<Self, CoreError> {
        let ascending = thresholds.windows(2).all(|pair| pair[0] < pair[1]);
        if thresholds.is_empty() || !ascending || thresholds[0] == 0 {
            return Err(CoreError::InvalidThresholds(thresholds));
        }
        Ok(Self { thresholds })
    }

    pub fn from_config(config: &ProgressConfig) -> Result<Self, CoreError> {
        Self::new(config.thresholds.clone())
    }

    pub fn max_level(&self) -> usize {
        self.thresholds.len()
    }

    /// Level 1 covers `[0, thresholds[0])`; saturates at the last threshold
    pub fn level_for(&self, distinct: usize) -> usize {
        let passed = self
            .thresholds
            .iter()
            .take_while(|&&t| distinct >= t as usize)
            .count();
        (passed + 1).min(self.max_level())
    }

    pub fn progress_for(&self, distinct: usize) -> Progress {
        let level = self.level_for(distinct);
        let prev = if level >= 2 {
            self.thresholds[level - 2] as f64
        } else {
            0.0
        };
        let next = self.thresholds[level - 1] as f64;

        let percent = if next > prev {
            ((distinct as f64 - prev) / (next - prev) * 100.0)
                .round()
                .clamp(0.0, 100.0) as u8
        } else {
            100
        };

        Progress {
            distinct_words: distinct,
            level,
            max_level: self.max_level(),
            percent,
        }
    }
}

/// Distinct matched words across all records, case-insensitively
pub fn distinct_matched_words(records: &[SentencePracticeRecord]) -> usize {
    records
        .iter()
        .flat_map(|r| r.matched_words.iter())
        .map(|w| normalize_word(w))
        .filter(|w| !w.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

pub fn compute_progress(records: &[SentencePracticeRecord], table: &ThresholdTable) -> Progress {
    table.progress_for(distinct_matched_words(records))
}

/// Recompute progress whenever the record feed changes.
/// Stops when the feed closes or `cancel` fires.
pub fn track_progress(
    mut records: watch::Receiver<Vec<SentencePracticeRecord>>,
    table: ThresholdTable,
    cancel: CancellationToken,
) -> (watch::Receiver<Progress>, JoinHandle<()>) {
    let initial = compute_progress(&records.borrow_and_update(), &table);
    let (progress_tx, progress_rx) = watch::channel(initial);

    let handle = tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                changed = records.changed() => {
                    if changed.is_err() {
                        tracing::debug!("practice feed closed, progress tracking stops");
                        break;
                    }
                    let progress = compute_progress(&records.borrow_and_update(), &table);
                    tracing::debug!(level = progress.level, percent = progress.percent, "progress recomputed");
                    progress_tx.send_replace(progress);
                }
            }
        }
    });

    (progress_rx, handle)
}
