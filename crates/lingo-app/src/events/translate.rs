use kanal::AsyncSender;
use lingo_core::{CoreError, translate_text};
use lingo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_translate(
    state: &AppState,
    text: String,
    from_lang: Option<String>,
    to_lang: Option<String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (from_lang, to_lang, timeout) = {
        let config = state.config.read().await;
        (
            from_lang.unwrap_or_else(|| config.translator.from_lang.clone()),
            to_lang.unwrap_or_else(|| config.translator.to_lang.clone()),
            config.network.request_timeout(),
        )
    };

    let translator = state.services.translator.as_deref();
    let translated = match translate_text(translator, &text, &from_lang, &to_lang, timeout).await
    {
        Ok(translated) => translated,
        Err(e @ CoreError::EmptyInput(_)) => {
            app_to_ui_tx.send(AppEvent::Notice(e.to_string())).await?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    app_to_ui_tx
        .send(AppEvent::ShowTranslation {
            text: text.trim().to_string(),
            translated,
            from_lang,
            to_lang,
        })
        .await?;

    Ok(())
}
