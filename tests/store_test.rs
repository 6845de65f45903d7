use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use tutor_portal::api::HttpLessonService;
use tutor_portal::api::mock::MockLessonService;
use tutor_portal::db;
use tutor_portal::error::PortalError;
use tutor_portal::models::{LessonType, Tutor};
use tutor_portal::store::{AuthStore, LessonStore, Theme, ThemeStore};

// A single connection keeps every query on the same in-memory database.
async fn memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    db::MIGRATOR.run(&pool).await.expect("migrations");
    pool
}

fn tutor() -> Tutor {
    Tutor {
        name: "Sarah Tan".to_string(),
        email: "sarah@champcode.test".to_string(),
    }
}

fn mock_service() -> Arc<MockLessonService> {
    Arc::new(MockLessonService::with_latency(Duration::ZERO))
}

#[test]
fn session_record_keeps_its_persisted_shape() {
    let session = tutor_portal::models::Session {
        tutor: tutor(),
        token: "tok-abc123".to_string(),
    };

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "tutor": { "name": "Sarah Tan", "email": "sarah@champcode.test" },
            "token": "tok-abc123",
        })
    );

    let back: tutor_portal::models::Session = serde_json::from_value(value).unwrap();
    assert_eq!(back, session);
}

#[tokio::test]
async fn login_persists_the_session_across_restarts() {
    let pool = memory_db().await;

    let mut store = AuthStore::restore(pool.clone()).await.unwrap();
    assert!(!store.is_authenticated());

    store
        .login(tutor(), "tok-abc123".to_string())
        .await
        .unwrap();
    assert!(store.is_authenticated());

    // A fresh store over the same database sees the persisted session.
    let restored = AuthStore::restore(pool).await.unwrap();
    assert!(restored.is_authenticated());
    assert_eq!(restored.tutor().unwrap().email, "sarah@champcode.test");
    assert_eq!(restored.token(), Some("tok-abc123"));
}

#[tokio::test]
async fn logout_removes_the_persisted_session() {
    let pool = memory_db().await;

    let mut store = AuthStore::restore(pool.clone()).await.unwrap();
    store.login(tutor(), "tok-abc123".to_string()).await.unwrap();
    store.logout().await.unwrap();

    assert!(!store.is_authenticated());
    assert!(store.tutor().is_none());
    assert!(store.token().is_none());

    let restored = AuthStore::restore(pool).await.unwrap();
    assert!(!restored.is_authenticated());
}

#[tokio::test]
async fn corrupted_session_record_starts_logged_out() {
    let pool = memory_db().await;
    db::put_value(&pool, "auth", "{definitely not json")
        .await
        .unwrap();

    let store = AuthStore::restore(pool)
        .await
        .expect("corrupt data must not surface an error");
    assert!(!store.is_authenticated());
}

#[tokio::test]
async fn theme_preference_defaults_and_persists() {
    let pool = memory_db().await;

    let mut store = ThemeStore::restore(pool.clone()).await.unwrap();
    assert_eq!(store.theme(), Theme::Light);

    store.set(Theme::Dark).await.unwrap();
    let restored = ThemeStore::restore(pool.clone()).await.unwrap();
    assert_eq!(restored.theme(), Theme::Dark);

    assert_eq!(store.toggle().await.unwrap(), Theme::Light);

    // An unrecognized persisted value falls back to the default.
    db::put_value(&pool, "theme", "solarized").await.unwrap();
    let fallback = ThemeStore::restore(pool).await.unwrap();
    assert_eq!(fallback.theme(), Theme::Light);
}

#[tokio::test]
async fn fetch_lessons_populates_the_store() {
    let mut store = LessonStore::new(mock_service());
    assert!(store.lessons().is_empty());

    store.fetch_lessons().await;

    assert_eq!(store.lessons().len(), 10);
    assert!(!store.is_loading());
    assert!(store.error().is_none());
}

#[tokio::test]
async fn fetch_failure_records_a_display_message() {
    // A bare HTTP client with nothing listening: no fallback in the way.
    let service = Arc::new(HttpLessonService::new("http://127.0.0.1:9").unwrap());
    let mut store = LessonStore::new(service);

    store.fetch_lessons().await;

    assert!(store.lessons().is_empty());
    assert!(!store.is_loading());
    assert!(store.error().is_some());
}

#[tokio::test]
async fn take_class_replaces_only_the_target_lesson() {
    let mut store = LessonStore::new(mock_service());
    store.fetch_lessons().await;
    let before = store.lessons().to_vec();

    store.take_class("L007", "Sarah Tan").await.unwrap();

    let after = store.lessons();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(old.id, new.id, "order must be preserved");
        if old.id == "L007" {
            assert_eq!(new.kind, LessonType::Upcoming);
            assert_eq!(new.tutor.as_deref(), Some("Sarah Tan"));
            assert_eq!(new.status, "Confirmed");
        } else {
            assert_eq!(old, new);
        }
    }
}

#[tokio::test]
async fn take_class_failure_records_and_reraises() {
    let mut store = LessonStore::new(mock_service());
    store.fetch_lessons().await;
    let before = store.lessons().to_vec();

    // L001 is Historic, not claimable.
    let result = store.take_class("L001", "Sarah Tan").await;
    assert!(matches!(result, Err(PortalError::Conflict(_))));
    assert!(store.error().unwrap().contains("not available"));
    assert_eq!(store.lessons(), before.as_slice());
}

#[tokio::test]
async fn fetch_clears_a_previous_error() {
    let mut store = LessonStore::new(mock_service());
    store.fetch_lessons().await;

    let _ = store.take_class("L001", "Sarah Tan").await;
    assert!(store.error().is_some());

    store.fetch_lessons().await;
    assert!(store.error().is_none());
}
