//! Lexicon Database Tests
//!
//! Insert-if-absent, upsert and bulk import against SQLite.

use crate::database::{LexiconOps, LexiconStore};
use crate::tests::common::create_test_db;

#[tokio::test]
async fn test_get_missing_entry() {
    let (db, _temp) = create_test_db().await;
    assert!(db.get_entry("அறம்").await.expect("Failed to query").is_none());
    assert_eq!(db.count_entries().await.unwrap(), 0);
}

#[tokio::test]
async fn test_insert_if_absent_keeps_first_body() {
    let (db, _temp) = create_test_db().await;

    assert!(db.insert_entry_if_absent("அறம்", "virtue").await.unwrap());
    assert!(!db.insert_entry_if_absent("அறம்", "something else").await.unwrap());

    let entry = db.get_entry("அறம்").await.unwrap().expect("entry exists");
    assert_eq!(entry.body, "virtue");
    assert_eq!(db.count_entries().await.unwrap(), 1);
}

#[tokio::test]
async fn test_upsert_overwrites_body_and_keeps_created_at() {
    let (db, _temp) = create_test_db().await;

    let first = db.upsert_entry("அன்பு", "love").await.unwrap();
    let second = db.upsert_entry("அன்பு", "affection").await.unwrap();

    assert_eq!(second.body, "affection");
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(db.count_entries().await.unwrap(), 1);
}

#[tokio::test]
async fn test_lemma_lookup_is_exact() {
    let (db, _temp) = create_test_db().await;
    db.upsert_entry("மழை", "rain").await.unwrap();

    assert!(db.get_entry("மழை ").await.unwrap().is_none());
    assert!(db.get_entry("மழ").await.unwrap().is_none());
}

#[tokio::test]
async fn test_import_counts_only_new_rows() {
    let (db, _temp) = create_test_db().await;
    db.upsert_entry("அறம்", "curated").await.unwrap();

    let rows = vec![
        ("அறம்".to_string(), "imported".to_string()),
        ("மழை".to_string(), "rain".to_string()),
        ("கடல்".to_string(), "sea".to_string()),
    ];
    assert_eq!(db.import_entries(&rows).await.unwrap(), 2);
    assert_eq!(db.import_entries(&rows).await.unwrap(), 0);

    assert_eq!(db.count_entries().await.unwrap(), 3);
    assert_eq!(db.get_entry("அறம்").await.unwrap().unwrap().body, "curated");
}

#[tokio::test]
async fn test_concurrent_insert_if_absent_creates_one_row() {
    let (db, _temp) = create_test_db().await;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move { db.insert_entry_if_absent("தீ", &format!("body {i}")).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().expect("insert must not fail on conflict") {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(db.count_entries().await.unwrap(), 1);
}

#[tokio::test]
async fn test_store_trait_delegates_to_database() {
    let (db, _temp) = create_test_db().await;
    let store: &dyn LexiconStore = &db;

    assert!(store.insert_if_absent("நீர்", "water").await.unwrap());
    assert_eq!(store.get_by_key("நீர்").await.unwrap().unwrap().body, "water");
    assert_eq!(store.upsert("நீர்", "H2O").await.unwrap().body, "H2O");
}

#[tokio::test]
async fn test_reopen_keeps_entries() {
    let (db, temp) = create_test_db().await;
    db.upsert_entry("வானம்", "sky").await.unwrap();
    db.close().await;

    let reopened = crate::database::Database::new(temp.path()).await.unwrap();
    assert_eq!(reopened.get_entry("வானம்").await.unwrap().unwrap().body, "sky");
}
