use async_trait::async_trait;
use serde::Serialize;

use crate::{LanguageCode, ProviderMetadata, ServiceError, Translation, Translator};

/// LibreTranslate compatible endpoint (Argos Open Tech and self-hosted instances)
#[derive(Clone)]
pub struct LibreTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct LibreRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

impl LibreTranslator {
    pub fn new(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        let api_key = Some(api_key).filter(|k| !k.is_empty());
        Self {
            client,
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl Translator for LibreTranslator {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, ServiceError> {
        let request = LibreRequest {
            q: text,
            source: &from,
            target: &to,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Accept", "application/json")
            .json(&request)
            .send()
            .await?;

        let translated = crate::read_translation(response).await?;

        Ok(Translation {
            text: translated,
            from,
            to,
            provider: "libretranslate".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "LibreTranslate".to_string(),
            requires_api_key: false,
        }
    }
}
