use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_path() -> PathBuf {
    PathBuf::from("lingo-data.json")
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// JSON document holding every owner's records
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}
