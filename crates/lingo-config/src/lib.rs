use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::acquisition::AcquisitionConfig;
use self::grammar::GrammarConfig;
use self::logging::LoggingConfig;
use self::network::NetworkConfig;
use self::practice::PracticeConfig;
use self::progress::ProgressConfig;
use self::storage::StorageConfig;
use self::translator::TranslatorConfig;

pub mod acquisition;
pub mod error;
pub mod grammar;
pub mod logging;
pub mod network;
pub mod practice;
pub mod progress;
pub mod storage;
pub mod translator;

pub use error::ConfigError;

fn default_owner() -> String {
    "local".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub acquisition: AcquisitionConfig,
    pub translator: TranslatorConfig,
    pub grammar: GrammarConfig,
    pub storage: StorageConfig,
    pub progress: ProgressConfig,
    pub practice: PracticeConfig,
    pub logging: LoggingConfig,

    /// Owner used when none is passed on the command line
    #[serde(default = "default_owner")]
    pub default_owner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            acquisition: AcquisitionConfig::default(),
            translator: TranslatorConfig::default(),
            grammar: GrammarConfig::default(),
            storage: StorageConfig::default(),
            progress: ProgressConfig::default(),
            practice: PracticeConfig::default(),
            logging: LoggingConfig::default(),
            default_owner: default_owner(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(owner) = env::var("LINGO_OWNER") {
            self.default_owner = owner;
        }

        if let Ok(path) = env::var("LINGO_DATA_PATH") {
            self.storage.data_path = PathBuf::from(path);
        }

        if let Some(timeout) = env::var("LINGO_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.network.request_timeout_ms = timeout;
        }

        if let Ok(key) = env::var("LINGO_TRANSLATOR_API_KEY") {
            self.translator.api_key = key;
        }

        if let Ok(filter) = env::var("LINGO_LOG") {
            self.logging.filter = filter;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.progress.thresholds;
        if thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        let ascending = thresholds.windows(2).all(|pair| pair[0] < pair[1]);
        if !ascending || thresholds[0] == 0 {
            return Err(ConfigError::UnorderedThresholds(thresholds.clone()));
        }

        let acquisition = &self.acquisition;
        if acquisition.target_count == 0 {
            return Err(ConfigError::Zero("acquisition.target_count"));
        }
        if acquisition.max_retries == 0 {
            return Err(ConfigError::Zero("acquisition.max_retries"));
        }
        if acquisition.target_count > acquisition.max_slots {
            return Err(ConfigError::TargetAboveSlotCap {
                target: acquisition.target_count,
                max_slots: acquisition.max_slots,
            });
        }

        if self.network.request_timeout_ms == 0 {
            return Err(ConfigError::Zero("network.request_timeout_ms"));
        }

        Ok(())
    }
}
