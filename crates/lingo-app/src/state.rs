use std::sync::Arc;

use anyhow::Context;
use lingo_config::Config;
use lingo_config::translator::TranslatorProvider;
use lingo_dictionary::{DefinitionSource, FreeDictionaryClient, RandomWordClient, WordSource};
use lingo_store::{JsonFileStore, PracticeStore, VocabularyStore};
use lingo_translator::{
    GrammarChecker, LanguageToolChecker, LibreTranslator, OpenLTranslator, Translator,
};
use lingo_types::OwnerId;
use tokio::sync::RwLock;

/// Remote adapters and storage the event handlers work with
pub struct Services {
    pub words: Arc<dyn WordSource>,
    pub definitions: Arc<dyn DefinitionSource>,
    pub vocabulary: Arc<dyn VocabularyStore>,
    pub practice: Arc<dyn PracticeStore>,
    pub translator: Option<Arc<dyn Translator>>,
    pub grammar: Option<Arc<dyn GrammarChecker>>,
}

impl Services {
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let network = &config.network;
        let client = lingo_dictionary::http_client(network.request_timeout(), &network.user_agent)
            .context("failed to build HTTP client")?;

        let data_path = &config.storage.data_path;
        let store = JsonFileStore::open(data_path)
            .await
            .with_context(|| format!("failed to open data file {}", data_path.display()))?;
        let store = Arc::new(store);

        let translator = if config.translator.enabled {
            Some(build_translator(config, client.clone()))
        } else {
            tracing::warn!("Translator disabled");
            None
        };

        let grammar = if config.grammar.enabled {
            let checker: Arc<dyn GrammarChecker> = Arc::new(LanguageToolChecker::new(
                client.clone(),
                config.grammar.api_url.clone(),
                config.grammar.language.clone(),
            ));
            Some(checker)
        } else {
            tracing::warn!("Grammar checker disabled");
            None
        };

        Ok(Self {
            words: Arc::new(RandomWordClient::new(
                config.network.word_source_url.clone(),
                client.clone(),
            )),
            definitions: Arc::new(FreeDictionaryClient::new(
                config.network.dictionary_url.clone(),
                client,
            )),
            vocabulary: store.clone(),
            practice: store,
            translator,
            grammar,
        })
    }
}

fn build_translator(config: &Config, client: reqwest::Client) -> Arc<dyn Translator> {
    let translator = &config.translator;
    match translator.provider {
        TranslatorProvider::LibreTranslate => Arc::new(LibreTranslator::new(
            client,
            translator.api_url.clone(),
            translator.api_key.clone(),
        )),
        TranslatorProvider::OpenL => Arc::new(OpenLTranslator::new(
            client,
            translator.api_url.clone(),
            translator.api_host.clone(),
            translator.api_key.clone(),
        )),
    }
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub owner: OwnerId,
    pub services: Services,
}

impl AppState {
    pub async fn new(config: Config, owner: OwnerId) -> anyhow::Result<Self> {
        let services = Services::from_config(&config).await?;
        Ok(Self::with_services(config, owner, services))
    }

    pub fn with_services(config: Config, owner: OwnerId, services: Services) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            owner,
            services,
        }
    }
}
