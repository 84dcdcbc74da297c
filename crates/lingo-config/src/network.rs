use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_word_source_url() -> String {
    "https://random-word-api.herokuapp.com".to_string()
}

fn default_dictionary_url() -> String {
    "https://api.dictionaryapi.dev/api/v2".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "lingo/0.1 (+reqwest)".to_string()
}

/// Remote word and dictionary services
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_word_source_url")]
    pub word_source_url: String,
    #[serde(default = "default_dictionary_url")]
    pub dictionary_url: String,
    /// Deadline for every single remote call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            word_source_url: default_word_source_url(),
            dictionary_url: default_dictionary_url(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}
