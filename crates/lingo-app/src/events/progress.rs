use std::sync::Arc;

use kanal::AsyncSender;
use lingo_core::{ThresholdTable, compute_progress, track_progress};
use lingo_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub async fn handle_progress(
    state: &AppState,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let table = threshold_table(state).await?;
    let records = state.services.practice.list_records(&state.owner).await?;

    let progress = compute_progress(&records, &table);
    app_to_ui_tx.send(AppEvent::ProgressUpdated(progress)).await?;

    Ok(())
}

/// Push a `ProgressUpdated` whenever the owner's practice records change
pub async fn forward_progress(
    state: Arc<AppState>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let table = threshold_table(&state).await?;
    let records = state.services.practice.subscribe_records(&state.owner).await?;

    let (mut progress_rx, tracker) = track_progress(records, table, cancel.child_token());

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            changed = progress_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let progress = *progress_rx.borrow_and_update();
                app_to_ui_tx.send(AppEvent::ProgressUpdated(progress)).await?;
            }
        }
    }

    tracker.await?;
    tracing::debug!("progress forwarding stopped");
    Ok(())
}

async fn threshold_table(state: &AppState) -> anyhow::Result<ThresholdTable> {
    let config = state.config.read().await;
    Ok(ThresholdTable::from_config(&config.progress)?)
}
