use std::fmt::Write as _;

use kanal::AsyncReceiver;
use lingo_types::{AppEvent, VocabularyEntry};
use tokio_util::sync::CancellationToken;

/// Print everything the event loop sends until `Done`, then cancel `shutdown`
/// so the remaining tasks wind down
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let received = tokio::select! {
            _ = shutdown.cancelled() => break,
            received = app_to_ui_rx.recv() => received,
        };
        let event = match received {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("ui channel closed: {e}");
                break;
            }
        };

        if matches!(event, AppEvent::Done) {
            tracing::debug!("[UI] Done received");
            break;
        }

        if let Some(text) = render(&event) {
            println!("{text}");
        }
    }

    shutdown.cancel();
    Ok(())
}

/// Text shown for an outbound event, `None` for requests
pub fn render(event: &AppEvent) -> Option<String> {
    let text = match event {
        AppEvent::AcquisitionStatus(tally) => {
            format!("... {} saved, {} failed", tally.successes, tally.failures)
        }
        AppEvent::AcquisitionFinished(summary) => {
            let mut text = format!(
                "Added {} word(s) ({} failed attempts)",
                summary.accepted.len(),
                summary.tally.failures
            );
            if !summary.accepted.is_empty() {
                let _ = write!(text, ": {}", summary.accepted.join(", "));
            }
            if summary.exhausted {
                text.push_str("\nNo new words available right now");
            }
            text
        }
        AppEvent::ShowVocabulary(entries) => render_vocabulary(entries),
        AppEvent::VocabularyCleared { removed } => format!("Removed {removed} word(s)"),
        AppEvent::ShowTranslation {
            text,
            translated,
            from_lang,
            to_lang,
        } => format!("[{from_lang}] {text}\n[{to_lang}] {translated}"),
        AppEvent::ShowPractice { record, suggestion } => {
            let mut text = format!("Score: {}/{}", record.score, record.vocab_words.len());
            if !record.matched_words.is_empty() {
                let _ = write!(text, " ({})", record.matched_words.join(", "));
            }
            let _ = write!(
                text,
                "\nGrammar: {}\nSuggestion: {suggestion}",
                record.grammar_feedback
            );
            text
        }
        AppEvent::ProgressUpdated(progress) => format!(
            "Level {}/{}: {}% ({} distinct words practiced)",
            progress.level, progress.max_level, progress.percent, progress.distinct_words
        ),
        AppEvent::Notice(message) => message.clone(),
        _ => return None,
    };

    Some(text)
}

fn render_vocabulary(entries: &[VocabularyEntry]) -> String {
    if entries.is_empty() {
        return "No words yet, try `generate`".to_string();
    }

    let mut text = String::new();
    for entry in entries {
        let _ = write!(text, "{} ({})", entry.word, entry.part_of_speech);
        if let Some(pronunciation) = &entry.pronunciation {
            let _ = write!(text, " {pronunciation}");
        }
        let _ = write!(text, "\n    {}", entry.meaning);
        if !entry.example.is_empty() {
            let _ = write!(text, "\n    e.g. {}", entry.example);
        }
        if !entry.synonyms.is_empty() {
            let _ = write!(text, "\n    synonyms: {}", entry.synonyms.join(", "));
        }
        text.push('\n');
    }
    text.truncate(text.trim_end().len());
    text
}
