use kanal::AsyncSender;
use lingo_core::{AcquisitionPipeline, AcquisitionPolicy, VocabularySession};
use lingo_types::AppEvent;

use crate::state::AppState;

pub async fn handle_generate(
    state: &AppState,
    session: &mut VocabularySession,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let policy = {
        let config = state.config.read().await;
        AcquisitionPolicy::from_config(&config)
    };

    let services = &state.services;
    let status_tx = app_to_ui_tx.clone();
    let pipeline = AcquisitionPipeline::new(
        services.words.as_ref(),
        services.definitions.as_ref(),
        services.vocabulary.as_ref(),
        policy,
    )
    .on_status(move |tally| {
        // Best effort; a full channel only drops an intermediate tally
        if let Err(e) = status_tx.try_send(AppEvent::AcquisitionStatus(tally)) {
            tracing::debug!("dropped acquisition status: {e}");
        }
    });

    let report = session.generate(&pipeline).await;
    tracing::info!(
        owner = %session.owner(),
        successes = report.tally.successes,
        failures = report.tally.failures,
        slots = report.slots_used,
        abandoned = report.abandoned_slots,
        "acquisition finished"
    );

    app_to_ui_tx
        .send(AppEvent::AcquisitionFinished(report.summary()))
        .await?;
    app_to_ui_tx
        .send(AppEvent::ShowVocabulary(session.entries().to_vec()))
        .await?;

    Ok(())
}
