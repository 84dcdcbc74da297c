use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::{DefinitionSource, LexicalEntry, SourceError};

/// Client for the free dictionary API (`GET /entries/en/{word}`)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl FreeDictionaryClient {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self {
            base_url,
            language: "en".to_string(),
            client,
        }
    }

    fn entry_url(&self, word: &str) -> Result<Url, SourceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["entries", self.language.as_str(), word]);
        Ok(url)
    }
}

#[async_trait]
impl DefinitionSource for FreeDictionaryClient {
    async fn lookup(&self, word: &str) -> Result<Option<LexicalEntry>, SourceError> {
        let url = self.entry_url(word)?;

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::warn!(word, "word not found in dictionary");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        let entry = LexicalEntry::parse_all(&body)?.into_iter().next();

        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_entry_url() {
        let client = FreeDictionaryClient::new(
            "https://api.dictionaryapi.dev/api/v2".to_string(),
            reqwest::Client::new(),
        );
        let url = client.entry_url("harbor").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/harbor"
        );
    }

    #[test]
    fn escapes_path_characters_in_word() {
        let client = FreeDictionaryClient::new(
            "https://api.dictionaryapi.dev/api/v2".to_string(),
            reqwest::Client::new(),
        );
        let url = client.entry_url("a/b").unwrap();
        assert!(url.as_str().ends_with("/entries/en/a%2Fb"));
    }
}
