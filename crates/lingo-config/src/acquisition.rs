use serde::{Deserialize, Serialize};

fn default_target_count() -> usize {
    3
}

fn default_max_slots() -> usize {
    5
}

fn default_max_retries() -> usize {
    3
}

fn default_min_word_length() -> usize {
    4
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AcquisitionConfig {
    /// Accepted words wanted per run
    #[serde(default = "default_target_count")]
    pub target_count: usize,
    /// Hard cap on slots tried per run
    #[serde(default = "default_max_slots")]
    pub max_slots: usize,
    /// Candidate attempts per slot, duplicates included
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
    #[serde(default = "default_min_word_length")]
    pub min_word_length: usize,
}

impl Default for AcquisitionConfig {
    fn default() -> Self {
        Self {
            target_count: default_target_count(),
            max_slots: default_max_slots(),
            max_retries: default_max_retries(),
            min_word_length: default_min_word_length(),
        }
    }
}
