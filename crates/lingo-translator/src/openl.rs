use async_trait::async_trait;
use serde::Serialize;

use crate::{LanguageCode, ProviderMetadata, ServiceError, Translation, Translator};

/// OpenL translation hosted on RapidAPI; detects the source language itself
#[derive(Clone)]
pub struct OpenLTranslator {
    client: reqwest::Client,
    api_url: String,
    api_host: String,
    api_key: String,
}

#[derive(Serialize)]
struct OpenLRequest<'a> {
    target_lang: &'a str,
    text: &'a str,
}

impl OpenLTranslator {
    pub fn new(client: reqwest::Client, api_url: String, api_host: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_host,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for OpenLTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, ServiceError> {
        if self.api_key.is_empty() {
            return Err(ServiceError::AuthenticationError);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("x-rapidapi-host", &self.api_host)
            .header("x-rapidapi-key", &self.api_key)
            .json(&OpenLRequest {
                target_lang: &to,
                text,
            })
            .send()
            .await?;

        let translated = crate::read_translation(response).await?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "openl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "OpenL".to_string(),
            requires_api_key: true,
        }
    }
}
