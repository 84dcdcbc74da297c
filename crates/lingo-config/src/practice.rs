use lingo_types::MatchMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PracticeConfig {
    #[serde(default)]
    pub match_mode: MatchMode,
}
