//! End-to-end Resolution Tests
//!
//! The resolver wired to a real SQLite lexicon.

use std::sync::Arc;

use crate::core::resolver::{Outcome, ResolutionMode, WordResolver};
use crate::core::suggest::SuggestionService;
use crate::database::{LexiconOps, SearchHistoryOps};
use crate::tests::common::{create_seeded_db, create_test_db, CannedSource};

#[tokio::test]
async fn test_curated_word_resolves_locally() {
    let (db, _temp) = create_seeded_db(&[("அறம்", "virtue")]).await;
    let wiktionary = CannedSource::answering("Wiktionary", "external text");

    let resolver = WordResolver::builder(Arc::new(db))
        .add_source(wiktionary.clone())
        .build();

    assert_eq!(
        serde_json::to_value(resolver.resolve("அறம்").await).unwrap(),
        serde_json::json!({
            "outcome": "resolved",
            "lemma": "அறம்",
            "body": "virtue",
            "originatingSource": "LocalStore"
        })
    );
    assert_eq!(wiktionary.calls(), 0);
}

#[tokio::test]
async fn test_unknown_word_offers_itself() {
    let (db, _temp) = create_test_db().await;
    let resolver = WordResolver::builder(Arc::new(db))
        .add_source(CannedSource::silent("Wiktionary"))
        .add_source(CannedSource::silent("TamilLexicon"))
        .build();

    assert_eq!(
        serde_json::to_value(resolver.resolve("புதியசொல்").await).unwrap(),
        serde_json::json!({ "outcome": "choose", "candidates": ["புதியசொல்"] })
    );
}

#[tokio::test]
async fn test_external_confirmation_is_persisted() {
    let (db, _temp) = create_test_db().await;
    let resolver = WordResolver::builder(Arc::new(db.clone()))
        .add_source(CannedSource::answering("Wiktionary", "மழை: rain"))
        .build();

    resolver.resolve("மழை").await;

    let entry = db.get_entry("மழை").await.unwrap().expect("cache-filled");
    assert_eq!(entry.body, "மழை: rain");
}

#[tokio::test]
async fn test_concurrent_cache_fill_is_idempotent() {
    let (db, _temp) = create_test_db().await;
    let resolver = Arc::new(
        WordResolver::builder(Arc::new(db.clone()))
            .with_mode(ResolutionMode::Aggregate)
            .add_source(CannedSource::answering("Wiktionary", "one"))
            .add_source(CannedSource::answering("TamilLexicon", "two"))
            .build(),
    );

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let resolver = resolver.clone();
            tokio::spawn(async move { resolver.resolve("தீ").await })
        })
        .collect();

    for handle in handles {
        assert!(!handle.await.unwrap().is_error());
    }
    assert_eq!(db.count_entries().await.unwrap(), 1);
}

#[tokio::test]
async fn test_cache_fill_never_overwrites_but_finalize_does() {
    let (db, _temp) = create_seeded_db(&[("அன்பு", "hand-curated")]).await;
    let resolver = WordResolver::builder(Arc::new(db.clone()))
        .with_mode(ResolutionMode::Aggregate)
        .add_source(CannedSource::answering("Wiktionary", "scraped"))
        .build();

    resolver.resolve("அன்பு").await;
    assert!(!db.insert_entry_if_absent("அன்பு", "scraped").await.unwrap());
    assert_eq!(db.get_entry("அன்பு").await.unwrap().unwrap().body, "hand-curated");

    resolver.finalize("அன்பு", Some("re-finalized")).await.unwrap();
    assert_eq!(db.get_entry("அன்பு").await.unwrap().unwrap().body, "re-finalized");
}

#[tokio::test]
async fn test_finalize_new_lemma_creates_stub() {
    let (db, _temp) = create_test_db().await;
    let resolver = WordResolver::builder(Arc::new(db.clone())).build();

    let entry = resolver.finalize(" கடல் ", None).await.unwrap();
    assert_eq!(entry.lemma, "கடல்");
    assert!(entry.body.starts_with("கடல்\n"));
    assert!(entry.body.contains("பொருள்: "));

    match resolver.resolve("கடல்").await {
        Outcome::Resolved { originating_source, .. } => assert_eq!(originating_source, "LocalStore"),
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn test_closed_store_degrades_to_external_sources() {
    let (db, _temp) = create_test_db().await;
    db.close().await;

    let resolver = WordResolver::builder(Arc::new(db))
        .add_source(CannedSource::answering("Wiktionary", "still here"))
        .build();

    match resolver.resolve("அறம்").await {
        Outcome::Resolved { originating_source, body, .. } => {
            assert_eq!(originating_source, "Wiktionary");
            assert_eq!(body, "still here");
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn test_closed_store_and_no_externals_is_an_error() {
    let (db, _temp) = create_test_db().await;
    db.close().await;

    let resolver = WordResolver::builder(Arc::new(db)).build();
    assert!(resolver.resolve("அறம்").await.is_error());
}

#[tokio::test]
async fn test_search_history_and_word_of_the_day() {
    let (db, _temp) = create_test_db().await;
    let resolver = WordResolver::builder(Arc::new(db.clone())).build();

    for (term, times) in [("அறம்", 3), ("அன்பு", 5), ("மழை", 1)] {
        for _ in 0..times {
            resolver.resolve(term).await;
        }
    }
    resolver.resolve("virtue").await;

    let top = resolver.word_of_the_day().await.unwrap().unwrap();
    assert_eq!(top.term, "அன்பு");
    assert_eq!(top.count, 5);
    assert_eq!(db.search_count("virtue").await.unwrap(), 0);
}

#[tokio::test]
async fn test_english_input_never_touches_the_store() {
    let (db, _temp) = create_seeded_db(&[("love", "should stay hidden")]).await;
    let wiktionary = CannedSource::answering("Wiktionary", "x");
    let resolver = WordResolver::builder(Arc::new(db.clone()))
        .add_source(wiktionary.clone())
        .with_suggestions(SuggestionService::offline())
        .build();

    assert_eq!(
        resolver.resolve("Love").await,
        Outcome::choose(vec!["அன்பு".to_string(), "காதல்".to_string()])
    );
    assert_eq!(wiktionary.calls(), 0);
    assert!(resolver.stats().await.is_empty());
}
