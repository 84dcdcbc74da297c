use kanal::AsyncSender;
use lingo_core::VocabularySession;
use lingo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_clear(
    state: &AppState,
    session: &mut VocabularySession,
    confirmed: bool,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    if !confirmed {
        tracing::warn!("Refusing to clear vocabulary without confirmation");
        app_to_ui_tx
            .send(AppEvent::Notice(
                "Clearing deletes every word, pass --yes to confirm".to_string(),
            ))
            .await?;
        return Ok(());
    }

    let removed = session.clear(state.services.vocabulary.as_ref()).await?;
    app_to_ui_tx
        .send(AppEvent::VocabularyCleared { removed })
        .await?;

    Ok(())
}
