use kanal::AsyncSender;
use lingo_core::{CoreError, PracticeService, VocabularySession};
use lingo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_practice(
    state: &AppState,
    session: &VocabularySession,
    sentence: String,
    words: Vec<String>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (mode, timeout) = {
        let config = state.config.read().await;
        (config.practice.match_mode, config.network.request_timeout())
    };

    let targets = if words.is_empty() {
        tracing::debug!("No target words given, using {} known words", session.entries().len());
        session.words()
    } else {
        words
    };

    let service = PracticeService::new(
        state.services.practice.as_ref(),
        state.services.grammar.as_deref(),
        mode,
        timeout,
    );

    match service.submit(&state.owner, &sentence, &targets).await {
        Ok(outcome) => {
            app_to_ui_tx
                .send(AppEvent::ShowPractice {
                    record: outcome.record,
                    suggestion: outcome.suggestion,
                })
                .await?;
        }
        Err(e @ CoreError::EmptyInput(_)) => {
            app_to_ui_tx.send(AppEvent::Notice(e.to_string())).await?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
