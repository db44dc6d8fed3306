//! 再起動をまたいだ復元と、ストレージ不調時の振る舞い

use std::sync::Arc;

use super::{Harness, T0};
use crate::adapter::{FileLocalStorage, MemoryLocalStorage};
use crate::domain::RestaurantId;
use crate::ports::outbound::LocalStorage;
use common::adapter::{FixedClock, MemoryLog, StdFileSystem};
use common::error::Error;
use common::ports::outbound::LogLevel;

/// 読み込みは空、書き込み・削除は常に失敗するストレージ
struct FailingStorage;

impl LocalStorage for FailingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, Error> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), Error> {
        Err(Error::io_msg("disk full"))
    }

    fn remove_item(&self, _key: &str) -> Result<(), Error> {
        Err(Error::io_msg("disk full"))
    }
}

#[test]
fn test_all_stores_survive_restart() {
    let h = Harness::new(Arc::new(MemoryLocalStorage::new()));
    let r1 = RestaurantId::new("r1");
    let r3 = RestaurantId::new("r3");

    let posted = {
        let mut app = h.start();
        app.toggle_bookmark(&r3);
        app.login("Asha", "asha@example.com");
        app.submit_review(&r1, 4, "Loved it here").unwrap()
    };

    let app = h.start();
    assert!(app.is_bookmarked(&r3));
    assert!(!app.is_bookmarked(&r1));
    assert_eq!(app.current_session().map(|s| s.email.as_str()), Some("asha@example.com"));
    assert_eq!(app.reviews_for(&r1), &[posted]);
    // 画面状態は保存しない
    assert_eq!(app.view(), &crate::domain::ViewState::default());
}

#[test]
fn test_records_use_prefixed_keys_and_wire_shape() {
    let h = Harness::new(Arc::new(MemoryLocalStorage::new()));
    let mut app = h.start();
    app.toggle_bookmark(&RestaurantId::new("r2"));
    app.toggle_bookmark(&RestaurantId::new("r1"));
    app.login("Asha", "asha@example.com");
    app.submit_review(&RestaurantId::new("r1"), 4, "Loved it here")
        .unwrap();

    let bookmarks = h.storage.get_item("nom_bookmarks").unwrap().unwrap();
    assert_eq!(bookmarks, r#"["r1","r2"]"#);

    let user: serde_json::Value =
        serde_json::from_str(&h.storage.get_item("nom_user").unwrap().unwrap()).unwrap();
    assert_eq!(user["name"], "Asha");

    let reviews: serde_json::Value =
        serde_json::from_str(&h.storage.get_item("nom_reviews").unwrap().unwrap()).unwrap();
    assert_eq!(reviews["r1"][0]["user"], "Asha");
    assert_eq!(reviews["r1"][0]["id"], T0);
}

#[test]
fn test_logout_removes_persisted_session() {
    let h = Harness::new(Arc::new(MemoryLocalStorage::new()));
    {
        let mut app = h.start();
        app.login("Asha", "asha@example.com");
        app.logout();
    }
    assert_eq!(h.storage.get_item("nom_user").unwrap(), None);
    assert!(h.start().current_session().is_none());
}

#[test]
fn test_stale_bookmarks_are_kept_but_not_listed() {
    let storage = Arc::new(MemoryLocalStorage::new());
    storage
        .set_item("nom_bookmarks", r#"["r2","closed-down"]"#)
        .unwrap();
    let h = Harness::new(storage);
    let app = h.start();

    let names: Vec<&str> = app
        .bookmarked_restaurants()
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Chaa Club"]);
    assert!(app.is_bookmarked(&RestaurantId::new("closed-down")));
}

#[test]
fn test_corrupt_record_falls_back_and_warns() {
    let storage = Arc::new(MemoryLocalStorage::new());
    storage.set_item("nom_reviews", "{not json").unwrap();
    storage.set_item("nom_user", "null").unwrap();
    let h = Harness::new(storage);
    let app = h.start();

    assert!(app.reviews_for(&RestaurantId::new("r1")).is_empty());
    assert!(app.current_session().is_none());

    let warns: Vec<_> = h
        .logger
        .records()
        .into_iter()
        .filter(|r| r.level == LogLevel::Warn)
        .collect();
    assert_eq!(warns.len(), 1);
    let key = warns[0].fields.as_ref().map(|f| f["key"].clone());
    assert_eq!(key, Some(serde_json::json!("nom_reviews")));
}

#[test]
fn test_write_failures_keep_memory_state() {
    let h = Harness::new(Arc::new(FailingStorage));
    let mut app = h.start();
    let r1 = RestaurantId::new("r1");

    assert!(app.toggle_bookmark(&r1));
    assert!(app.is_bookmarked(&r1));
    app.login("Asha", "asha@example.com");
    app.submit_review(&r1, 5, "Best banh mi in town").unwrap();
    assert_eq!(app.reviews_for(&r1).len(), 1);
    app.logout();

    let errors = h
        .logger
        .records()
        .into_iter()
        .filter(|r| r.level == LogLevel::Error && r.kind.as_deref() == Some("persistence"))
        .count();
    assert_eq!(errors, 4);
}

#[test]
fn test_review_ids_stay_increasing_when_clock_goes_back() {
    let storage: Arc<dyn LocalStorage> = Arc::new(MemoryLocalStorage::new());
    let r1 = RestaurantId::new("r1");

    let first = {
        let h = Harness::new(Arc::clone(&storage));
        let mut app = h.start();
        app.login("Asha", "asha@example.com");
        app.submit_review(&r1, 4, "Loved it here").unwrap()
    };

    let earlier = Harness {
        storage,
        clock: Arc::new(FixedClock::new(T0 - 60_000)),
        logger: Arc::new(MemoryLog::new()),
    };
    let mut app = earlier.start();
    let second = app.submit_review(&r1, 3, "Slower service today").unwrap();
    assert!(second.id > first.id);
    assert_eq!(app.reviews_for(&r1)[0], second);
}

#[test]
fn test_file_storage_restores_after_restart() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("data").join("storage");
    let file_storage = || -> Arc<dyn LocalStorage> {
        Arc::new(FileLocalStorage::new(Arc::new(StdFileSystem), &dir))
    };
    let r2 = RestaurantId::new("r2");

    {
        let h = Harness::new(file_storage());
        let mut app = h.start();
        app.toggle_bookmark(&r2);
        app.login("Rafi", "rafi@example.com");
        h.clock.advance(1_000);
        app.submit_review(&r2, 5, "Masala chai is perfect").unwrap();
    }
    assert!(dir.join("nom_reviews.json").exists());
    assert!(!dir.join("nom_reviews.json.tmp").exists());

    let h = Harness::new(file_storage());
    let app = h.start();
    assert!(app.is_bookmarked(&r2));
    assert_eq!(app.current_session().map(|s| s.name.as_str()), Some("Rafi"));
    let reviews = app.reviews_for(&r2);
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].created_at.timestamp_millis() as u64, T0 + 1_000);
    assert!(h.logger.records().is_empty());
}
