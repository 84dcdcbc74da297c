use async_trait::async_trait;
use reqwest::Url;

use crate::{SourceError, WordSource};

/// Client for a random-word API answering `GET /word?number=N` with a JSON array
#[derive(Clone)]
pub struct RandomWordClient {
    base_url: String,
    client: reqwest::Client,
}

impl RandomWordClient {
    pub fn new(base_url: String, client: reqwest::Client) -> Self {
        Self { base_url, client }
    }

    fn words_url(&self, count: usize) -> Result<Url, SourceError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| SourceError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SourceError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("word");
        url.query_pairs_mut()
            .append_pair("number", &count.to_string());
        Ok(url)
    }
}

#[async_trait]
impl WordSource for RandomWordClient {
    async fn random_words(&self, count: usize) -> Result<Vec<String>, SourceError> {
        let url = self.words_url(count)?;
        tracing::debug!(%url, "requesting random words");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        let words: Vec<String> = serde_json::from_str::<Vec<String>>(&body)?
            .into_iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();

        if words.is_empty() {
            return Err(SourceError::Empty);
        }

        Ok(words)
    }
}
