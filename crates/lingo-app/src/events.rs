use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lingo_core::VocabularySession;
use lingo_types::AppEvent;

use crate::state::AppState;

pub mod clear;
pub mod generate;
pub mod list;
pub mod practice;
pub mod progress;
pub mod translate;

use clear::handle_clear;
use generate::handle_generate;
use list::handle_list;
use practice::handle_practice;
use progress::handle_progress;
use translate::handle_translate;

/// App's main loop, one request at a time
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let mut session = VocabularySession::new(state.owner.clone());
    if let Err(e) = session.refresh(state.services.vocabulary.as_ref()).await {
        tracing::error!("failed to load vocabulary: {e}");
    }

    tracing::info!(
        owner = %state.owner,
        words = session.known().len(),
        "[EVENT_LOOP] Starting main loop, waiting for events"
    );
    loop {
        let event = match ui_to_app_rx.recv().await {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("[EVENT_LOOP] request channel closed: {e}");
                return Ok(());
            }
        };

        tracing::debug!("[EVENT_LOOP] EVENT RECEIVED: {:?}", std::mem::discriminant(&event));

        if matches!(event, AppEvent::Shutdown) {
            tracing::info!("[EVENT_LOOP] Shutdown requested");
            app_to_ui_tx.send(AppEvent::Done).await?;
            return Ok(());
        }

        if let Err(e) = handle_events(&state, &mut session, &app_to_ui_tx, event).await {
            tracing::error!("[EVENT_LOOP] request failed: {e:#}");
            app_to_ui_tx.send(AppEvent::Notice(format!("Error: {e}"))).await?;
        }
    }
}

async fn handle_events(
    state: &AppState,
    session: &mut VocabularySession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::GenerateVocabulary => handle_generate(state, session, app_to_ui_tx).await?,
        AppEvent::ListVocabulary => handle_list(state, session, app_to_ui_tx).await?,
        AppEvent::ClearVocabulary { confirmed } => {
            handle_clear(state, session, confirmed, app_to_ui_tx).await?
        }
        AppEvent::Translate {
            text,
            from_lang,
            to_lang,
        } => handle_translate(state, text, from_lang, to_lang, app_to_ui_tx).await?,
        AppEvent::SubmitPractice { sentence, words } => {
            handle_practice(state, session, sentence, words, app_to_ui_tx).await?
        }
        AppEvent::ShowProgress => handle_progress(state, app_to_ui_tx).await?,
        AppEvent::Shutdown => {}

        // Outbound only, nothing to do when they come back in
        AppEvent::AcquisitionStatus(_)
        | AppEvent::AcquisitionFinished(_)
        | AppEvent::ShowVocabulary(_)
        | AppEvent::VocabularyCleared { .. }
        | AppEvent::ShowTranslation { .. }
        | AppEvent::ShowPractice { .. }
        | AppEvent::ProgressUpdated(_)
        | AppEvent::Notice(_)
        | AppEvent::Done => {
            tracing::warn!("[EVENT_LOOP] ignoring outbound event sent to the event loop");
        }
    }

    Ok(())
}
