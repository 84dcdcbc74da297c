use std::time::Duration;

use lingo_translator::{TRANSLATION_FAILED, Translator};

use crate::error::CoreError;

/// Translate `text`, answering with the failure sentinel instead of an error
/// when the provider is missing, fails or times out
pub async fn translate_text(
    translator: Option<&dyn Translator>,
    text: &str,
    from: &str,
    to: &str,
    call_timeout: Duration,
) -> Result<String, CoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::EmptyInput("text"));
    }

    let Some(translator) = translator else {
        tracing::warn!("no translator configured");
        return Ok(TRANSLATION_FAILED.to_string());
    };

    let call = translator.translate(text, from.to_string(), to.to_string());
    match tokio::time::timeout(call_timeout, call).await {
        Ok(Ok(translation)) => {
            tracing::debug!(
                provider = %translation.provider,
                from,
                to,
                "translated {} chars",
                text.chars().count()
            );
            Ok(translation.text)
        }
        Ok(Err(e)) => {
            tracing::error!("{} translation failed: {e}", translator.metadata().name);
            Ok(TRANSLATION_FAILED.to_string())
        }
        Err(_) => {
            tracing::error!("translation timed out after {call_timeout:?}");
            Ok(TRANSLATION_FAILED.to_string())
        }
    }
}
