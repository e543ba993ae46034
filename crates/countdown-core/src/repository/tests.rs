//! Store Integration Tests
//!
//! CountdownStore over MemoryStorage with predictable ids and a frozen clock.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::rstest;

use crate::domain::{CountdownDraft, CountdownPatch, DomainError};
use crate::repository::{
    CountdownStore, FixedClock, KeyValueStorage, MemoryStorage, SequentialIds, ViewOptions,
};

const KEY: &str = "countdowns";

type TestStore = CountdownStore<MemoryStorage, SequentialIds, FixedClock>;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn at(offset: Duration) -> String {
    (now() + offset).to_rfc3339()
}

fn open(storage: MemoryStorage) -> (TestStore, Option<DomainError>) {
    CountdownStore::load_with(storage, SequentialIds::default(), FixedClock(now()), KEY)
}

fn setup_store() -> TestStore {
    open(MemoryStorage::new()).0
}

fn setup_store_with(titles: &[&str]) -> TestStore {
    let mut store = setup_store();
    for (i, title) in titles.iter().enumerate() {
        store
            .create(&CountdownDraft::new(*title, at(Duration::days(i as i64 + 1))))
            .expect("Failed to create");
    }
    store
}

fn titles(store: &TestStore) -> Vec<String> {
    store.list().iter().map(|c| c.title.clone()).collect()
}

#[test]
fn test_create_countdown() {
    let mut store = setup_store();

    let created = store
        .create(&CountdownDraft::new("Launch", at(Duration::days(2))))
        .expect("Failed to create");

    assert_eq!(created.id, "id-1");
    assert_eq!(created.title, "Launch");
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0], created);
}

#[test]
fn test_create_appends_in_order() {
    let store = setup_store_with(&["A", "B", "C"]);
    assert_eq!(titles(&store), vec!["A", "B", "C"]);
}

#[rstest]
#[case("", "2025-02-01T00:00:00Z")]
#[case("   ", "2025-02-01T00:00:00Z")]
#[case("Launch", "")]
#[case("Launch", "next tuesday")]
fn test_create_rejects_invalid_draft(#[case] title: &str, #[case] date: &str) {
    let mut store = setup_store_with(&["Existing"]);

    let result = store.create(&CountdownDraft::new(title, date));

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_create_persists_collection() {
    let store = setup_store_with(&["A"]);

    let blob = store.storage().load(KEY).expect("Nothing persisted");
    let json: serde_json::Value = serde_json::from_str(&blob).unwrap();
    assert_eq!(json[0]["id"], "id-1");
    assert_eq!(json[0]["title"], "A");
    assert!(json[0]["targetDate"].is_string());
}

#[test]
fn test_reload_preserves_order() {
    let mut store = setup_store_with(&["A", "B", "C"]);
    store.reorder(&["id-3", "id-1", "id-2"]).unwrap();

    let (reloaded, warning) = open(store.into_storage());

    assert!(warning.is_none());
    assert_eq!(titles(&reloaded), vec!["C", "A", "B"]);
}

#[test]
fn test_update_keeps_position_and_id() {
    let mut store = setup_store_with(&["A", "B", "C"]);

    let patch = CountdownPatch {
        title: Some("B2".to_string()),
        description: Some("moved deadline".to_string()),
        ..Default::default()
    };
    let updated = store.update("id-2", &patch).expect("Update failed");

    assert_eq!(updated.id, "id-2");
    assert_eq!(titles(&store), vec!["A", "B2", "C"]);
    assert_eq!(store.get("id-2").unwrap().description.as_deref(), Some("moved deadline"));
}

#[test]
fn test_update_unknown_id() {
    let mut store = setup_store_with(&["A"]);

    let result = store.update("missing", &CountdownPatch::default());

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

#[test]
fn test_failed_update_changes_nothing() {
    let mut store = setup_store_with(&["A"]);
    let before = store.list().to_vec();

    let patch = CountdownPatch {
        title: Some("Renamed".to_string()),
        target_date: Some("garbage".to_string()),
        ..Default::default()
    };
    assert!(store.update("id-1", &patch).is_err());

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn test_empty_patch_skips_write() {
    // Hand-formatted blob: any rewrite would normalize it
    let blob = r#"[ {"id":"a", "title":"Only", "targetDate":"2025-04-15T00:00:00.000Z"} ]"#;
    let (mut store, _) = open(MemoryStorage::with_entry(KEY, blob));

    let unchanged = store.update("a", &CountdownPatch::default()).unwrap();

    assert_eq!(unchanged.title, "Only");
    assert_eq!(store.storage().load(KEY).as_deref(), Some(blob));
}

#[test]
fn test_delete_countdown() {
    let mut store = setup_store_with(&["A", "B"]);

    store.delete("id-1").expect("Delete failed");

    assert_eq!(titles(&store), vec!["B"]);
    assert!(store.get("id-1").is_none());
    let (reloaded, _) = open(store.into_storage());
    assert_eq!(titles(&reloaded), vec!["B"]);
}

#[test]
fn test_delete_unknown_id_is_signaled() {
    let mut store = setup_store_with(&["A"]);

    assert!(matches!(store.delete("id-9"), Err(DomainError::NotFound(_))));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_reorder_swap() {
    let mut store = setup_store_with(&["First", "Second"]);

    store.reorder(&["id-2", "id-1"]).expect("Reorder failed");

    assert_eq!(titles(&store), vec!["Second", "First"]);
}

#[rstest]
#[case(&["id-1", "id-2"])]
#[case(&["id-1", "id-2", "id-3", "id-3"])]
#[case(&["id-1", "id-1", "id-2"])]
#[case(&["id-1", "id-2", "id-9"])]
#[case(&[])]
fn test_reorder_rejects_non_permutation(#[case] order: &[&str]) {
    let mut store = setup_store_with(&["A", "B", "C"]);

    let result = store.reorder(order);

    assert!(matches!(result, Err(DomainError::InvalidOperation(_))));
    assert_eq!(titles(&store), vec!["A", "B", "C"]);
}

#[test]
fn test_corrupt_blob_starts_empty() {
    let (store, warning) = open(MemoryStorage::with_entry(KEY, "{not json"));

    assert!(store.is_empty());
    assert!(matches!(warning, Some(DomainError::PersistenceLoad(_))));
}

#[rstest]
#[case(r#"{"id":"a"}"#)]
#[case(r#"[{"id":"a","title":"A"}]"#)]
#[case(r#"[{"id":"a","title":"A","targetDate":"not a date"}]"#)]
fn test_unusable_blob_is_a_load_error(#[case] blob: &str) {
    let (store, warning) = open(MemoryStorage::with_entry(KEY, blob));

    assert!(store.is_empty());
    assert!(matches!(warning, Some(DomainError::PersistenceLoad(_))));
}

#[test]
fn test_store_recovers_after_corrupt_load() {
    let (mut store, _) = open(MemoryStorage::with_entry(KEY, "corrupt"));

    store.create(&CountdownDraft::new("Fresh", at(Duration::days(1)))).unwrap();

    let (reloaded, warning) = open(store.into_storage());
    assert!(warning.is_none());
    assert_eq!(titles(&reloaded), vec!["Fresh"]);
}

#[test]
fn test_loads_blob_written_by_browser() {
    let blob = r#"[
        {"id":"b","title":"Taxes","targetDate":"2025-04-15T00:00:00.000Z"},
        {"id":"a","title":"Trip","description":"Lisbon","targetDate":"2025-03-01T09:30:00.000Z"}
    ]"#;

    let (store, warning) = open(MemoryStorage::with_entry(KEY, blob));

    assert!(warning.is_none());
    assert_eq!(store.ids(), vec!["b", "a"]);
    assert_eq!(store.get("a").unwrap().description.as_deref(), Some("Lisbon"));
}

#[test]
fn test_repeated_stored_ids_keep_first() {
    let blob = r#"[
        {"id":"a","title":"One","targetDate":"2025-04-15T00:00:00.000Z"},
        {"id":"a","title":"Two","targetDate":"2025-04-16T00:00:00.000Z"}
    ]"#;

    let (store, warning) = open(MemoryStorage::with_entry(KEY, blob));

    assert!(warning.is_none());
    assert_eq!(titles(&store), vec!["One"]);
}

#[test]
fn test_invalid_stored_records_are_dropped() {
    let blob = r#"[
        {"id":"a","title":"","description":"","targetDate":"2025-01-01T00:00:00Z"},
        {"id":"b","title":"  Dentist  ","description":"  ","targetDate":"2025-01-02T00:00:00Z"},
        {"id":"","title":"Nameless","targetDate":"2025-01-03T00:00:00Z"}
    ]"#;

    let (store, warning) = open(MemoryStorage::with_entry(KEY, blob));

    assert!(warning.is_none());
    assert_eq!(store.ids(), vec!["b"]);
    let kept = store.get("b").unwrap();
    assert_eq!(kept.title, "Dentist");
    assert_eq!(kept.description, None);
    assert!(store.list().iter().all(|c| !c.title.trim().is_empty()));
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let mut storage = MemoryStorage::new();
    storage.set_read_only(true);
    let (mut store, _) = open(storage);

    let created = store.create(&CountdownDraft::new("Offline", at(Duration::days(1))));

    assert!(created.is_ok());
    assert_eq!(store.len(), 1);
    assert!(store.storage().load(KEY).is_none());
}

#[test]
fn test_view_hides_expired_and_sorts() {
    let mut store = setup_store();
    store.create(&CountdownDraft::new("Later", at(Duration::days(10)))).unwrap();
    store.create(&CountdownDraft::new("Past", at(-Duration::hours(1)))).unwrap();
    store.create(&CountdownDraft::new("Soon", at(Duration::hours(3)))).unwrap();

    let all = ViewOptions::default();
    let names = |options| store.view(options).into_iter().map(|c| c.title).collect::<Vec<_>>();

    assert_eq!(names(all), vec!["Later", "Past", "Soon"]);
    assert_eq!(
        names(ViewOptions { hide_expired: true, ..all }),
        vec!["Later", "Soon"]
    );
    assert_eq!(
        names(ViewOptions { sort_by_time: true, ..all }),
        vec!["Past", "Soon", "Later"]
    );
    assert_eq!(
        names(ViewOptions { sort_by_time: true, hide_expired: true }),
        vec!["Soon", "Later"]
    );
    // Views never reorder storage
    assert_eq!(titles(&store), vec!["Later", "Past", "Soon"]);
}
