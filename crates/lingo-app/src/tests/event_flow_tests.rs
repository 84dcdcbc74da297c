use lingo_store::{PracticeStore, VocabularyStore};
use lingo_translator::TRANSLATION_FAILED;
use lingo_types::AppEvent;

use super::fakes::Harness;

#[tokio::test]
async fn generate_reports_status_and_vocabulary() {
    let harness = Harness::new(&["harbor", "meadow", "canyon"]);

    let events = harness.run(vec![AppEvent::GenerateVocabulary]).await;

    let statuses: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            AppEvent::AcquisitionStatus(tally) => Some(*tally),
            _ => None,
        })
        .collect();
    assert_eq!(statuses.len(), 3);
    assert_eq!(statuses.last().map(|t| t.successes), Some(3));

    let summary = events
        .iter()
        .find_map(|e| match e {
            AppEvent::AcquisitionFinished(summary) => Some(summary),
            _ => None,
        })
        .expect("no AcquisitionFinished");
    assert_eq!(summary.accepted, vec!["harbor", "meadow", "canyon"]);
    assert!(!summary.exhausted);

    match events.last() {
        Some(AppEvent::ShowVocabulary(entries)) => assert_eq!(entries.len(), 3),
        other => panic!("expected vocabulary last, got {other:?}"),
    }
}

#[tokio::test]
async fn second_generate_skips_known_words() {
    let harness = Harness::new(&["harbor", "meadow", "canyon", "HARBOR", "glacier"]);

    let events = harness
        .run(vec![
            AppEvent::GenerateVocabulary,
            AppEvent::GenerateVocabulary,
        ])
        .await;

    let summaries: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            AppEvent::AcquisitionFinished(summary) => Some(summary),
            _ => None,
        })
        .collect();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[1].accepted, vec!["glacier"]);
    assert!(summaries[1].exhausted);

    let owner = &harness.state.owner;
    assert_eq!(harness.store.list_entries(owner).await.unwrap().len(), 4);
}

#[tokio::test]
async fn clear_requires_confirmation() {
    let harness = Harness::new(&["harbor", "meadow", "canyon"]);

    let events = harness
        .run(vec![
            AppEvent::GenerateVocabulary,
            AppEvent::ClearVocabulary { confirmed: false },
        ])
        .await;
    assert!(matches!(events.last(), Some(AppEvent::Notice(_))));
    let owner = &harness.state.owner;
    assert_eq!(harness.store.list_entries(owner).await.unwrap().len(), 3);

    let events = harness
        .run(vec![
            AppEvent::ClearVocabulary { confirmed: true },
            AppEvent::ListVocabulary,
        ])
        .await;
    assert!(matches!(
        events[0],
        AppEvent::VocabularyCleared { removed: 3 }
    ));
    assert!(matches!(&events[1], AppEvent::ShowVocabulary(entries) if entries.is_empty()));
    assert!(harness.store.list_entries(owner).await.unwrap().is_empty());
}

#[tokio::test]
async fn practice_defaults_to_known_words_and_feeds_progress() {
    let harness = Harness::new(&["apple", "banana", "orange"]);

    let events = harness
        .run(vec![
            AppEvent::GenerateVocabulary,
            AppEvent::SubmitPractice {
                sentence: "I eat an apple and a banana".to_string(),
                words: vec![],
            },
            AppEvent::ShowProgress,
        ])
        .await;

    let (record, suggestion) = events
        .iter()
        .find_map(|e| match e {
            AppEvent::ShowPractice { record, suggestion } => Some((record, suggestion)),
            _ => None,
        })
        .expect("no ShowPractice");
    assert_eq!(record.score, 2);
    assert_eq!(record.vocab_words.len(), 3);
    assert_eq!(record.grammar_feedback, "Looks good!");
    assert_eq!(suggestion, "I eat an apple and a banana");

    match events.last() {
        Some(AppEvent::ProgressUpdated(progress)) => {
            assert_eq!(progress.distinct_words, 2);
            assert_eq!(progress.level, 1);
            assert_eq!(progress.percent, 2);
        }
        other => panic!("expected progress last, got {other:?}"),
    }

    let records = harness.store.list_records(&harness.state.owner).await.unwrap();
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn empty_practice_sentence_is_a_notice() {
    let harness = Harness::offline(&[]);

    let events = harness
        .run(vec![AppEvent::SubmitPractice {
            sentence: "  ".to_string(),
            words: vec!["apple".to_string()],
        }])
        .await;

    assert!(matches!(&events[..], [AppEvent::Notice(_)]));
    let records = harness.store.list_records(&harness.state.owner).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn translation_uses_configured_languages() {
    let harness = Harness::new(&[]);

    let events = harness
        .run(vec![
            AppEvent::Translate {
                text: "good morning".to_string(),
                from_lang: None,
                to_lang: Some("fr".to_string()),
            },
            AppEvent::Translate {
                text: " ".to_string(),
                from_lang: None,
                to_lang: None,
            },
        ])
        .await;

    match &events[0] {
        AppEvent::ShowTranslation {
            translated,
            from_lang,
            to_lang,
            ..
        } => {
            assert_eq!(translated, "GOOD MORNING");
            assert_eq!(from_lang, "en");
            assert_eq!(to_lang, "fr");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(&events[1], AppEvent::Notice(_)));
}

#[tokio::test]
async fn missing_translator_yields_failure_text() {
    let harness = Harness::offline(&[]);

    let events = harness
        .run(vec![AppEvent::Translate {
            text: "hello".to_string(),
            from_lang: None,
            to_lang: None,
        }])
        .await;

    assert!(matches!(
        &events[..],
        [AppEvent::ShowTranslation { translated, .. }] if translated == TRANSLATION_FAILED
    ));
}
