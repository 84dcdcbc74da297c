use serde::{Deserialize, Serialize};

fn default_thresholds() -> Vec<u32> {
    vec![100, 200, 500, 1000, 2000, 3000]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ProgressConfig {
    /// Distinct practiced words needed to leave each level
    #[serde(default = "default_thresholds")]
    pub thresholds: Vec<u32>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            thresholds: default_thresholds(),
        }
    }
}
