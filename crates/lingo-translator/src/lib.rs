pub mod grammar;
pub mod libre;
pub mod openl;

pub use grammar::{GrammarChecker, GrammarIssue, LanguageToolChecker};
pub use libre::LibreTranslator;
pub use openl::OpenLTranslator;

use reqwest::StatusCode;
use serde::Deserialize;

pub type LanguageCode = String;

/// Shown in place of a translation when the provider fails
pub const TRANSLATION_FAILED: &str = "Translation failed";

/// Translation provider interface
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate text from source to target language
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<Translation, ServiceError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct Translation {
    pub text: String,
    pub from: LanguageCode,
    pub to: LanguageCode,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Body shared by the translation providers
#[derive(Debug, Deserialize)]
struct TranslatedText {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

impl TranslatedText {
    fn into_text(self) -> Result<String, ServiceError> {
        self.translated_text
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ServiceError::ApiError("No translation in response".to_string()))
    }
}

/// Map provider status codes onto `ServiceError`
fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err(ServiceError::RateLimitExceeded),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ServiceError::AuthenticationError),
        status if !status.is_success() => Err(ServiceError::ApiError(format!("HTTP {}", status))),
        _ => Ok(response),
    }
}

async fn read_translation(response: reqwest::Response) -> Result<String, ServiceError> {
    let body: TranslatedText = ensure_success(response)?
        .json()
        .await
        .map_err(|e| ServiceError::ApiError(format!("Failed to parse response: {}", e)))?;
    body.into_text()
}
