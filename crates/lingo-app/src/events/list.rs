use kanal::AsyncSender;
use lingo_core::VocabularySession;
use lingo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_list(
    state: &AppState,
    session: &mut VocabularySession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    session.refresh(state.services.vocabulary.as_ref()).await?;

    tracing::debug!("Listing {} entries", session.entries().len());
    app_to_ui_tx
        .send(AppEvent::ShowVocabulary(session.entries().to_vec()))
        .await?;

    Ok(())
}
