//! Import Flow Tests
//!
//! Link → decode → stage → confirm, against a real store.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{Countdown, CountdownDraft, DomainError, ImportDraft};
use crate::import::{cancel, confirm, stage};
use crate::repository::{CountdownStore, FixedClock, MemoryStorage, SequentialIds};
use crate::share::{decode, encode, share_url, ImportSource};

type TestStore = CountdownStore<MemoryStorage, SequentialIds, FixedClock>;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

fn setup_store() -> TestStore {
    CountdownStore::load_with(
        MemoryStorage::new(),
        SequentialIds::default(),
        FixedClock(now()),
        "countdowns",
    )
    .0
}

fn countdown(title: &str, offset: Duration) -> Countdown {
    Countdown {
        id: format!("remote-{}", title),
        title: title.to_string(),
        description: None,
        target_date: now() + offset,
    }
}

fn draft(title: &str, date: &str) -> ImportDraft {
    ImportDraft {
        title: title.to_string(),
        date: date.to_string(),
        description: None,
    }
}

#[test]
fn test_titleless_entry_is_dropped_and_one_commits() {
    let token = encode(&[countdown("A", Duration::days(1)), countdown("", Duration::days(1))]);
    let mut store = setup_store();

    let pending = stage(decode(&token).unwrap());
    assert_eq!(pending.len(), 1);
    assert_eq!(pending.selected_count(), 1);

    let report = pending.confirm(&mut store);

    assert_eq!(report.committed, 1);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].title, "A");
    assert_eq!(store.list()[0].target_date, now() + Duration::days(1));
}

#[test]
fn test_imported_countdowns_get_fresh_ids() {
    let token = encode(&[countdown("A", Duration::days(1)), countdown("B", Duration::days(2))]);
    let mut store = setup_store();

    stage(decode(&token).unwrap()).confirm(&mut store);

    assert_eq!(store.ids(), vec!["id-1", "id-2"]);
}

#[test]
fn test_confirm_only_selected_in_original_order() {
    let drafts = vec![
        draft("A", "2025-02-01"),
        draft("B", "2025-02-02"),
        draft("C", "2025-02-03"),
    ];
    let mut store = setup_store();

    let report = confirm(&mut store, stage(drafts), &[2, 0, 2, 17]);

    assert_eq!(report.committed, 2);
    let titles: Vec<&str> = store.list().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "C"]);
}

#[test]
fn test_unparsable_draft_is_skipped_not_fatal() {
    let drafts = vec![
        draft("A", "2025-02-01"),
        draft("Broken", "someday"),
        draft("C", "2025-02-03"),
    ];
    let mut store = setup_store();

    let report = stage(drafts).confirm(&mut store);

    assert_eq!(report.committed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_selection_toggles() {
    let mut pending = stage(vec![draft("A", "2025-02-01"), draft("B", "2025-02-02")]);
    assert!(pending.is_selected(0) && pending.is_selected(1));

    pending.toggle(0);
    assert_eq!(pending.selected_indices(), vec![1]);

    pending.deselect_all();
    assert_eq!(pending.selected_count(), 0);

    pending.select_all();
    assert_eq!(pending.selected_count(), 2);

    pending.toggle(5);
    assert_eq!(pending.selected_count(), 2);
}

#[test]
fn test_deselected_batch_commits_nothing() {
    let mut pending = stage(vec![draft("A", "2025-02-01")]);
    pending.deselect_all();
    let mut store = setup_store();

    let report = pending.confirm(&mut store);

    assert_eq!(report.committed, 0);
    assert!(store.is_empty());
}

#[test]
fn test_stage_drops_repeated_drafts() {
    let pending = stage(vec![
        draft("A", "2025-02-01"),
        draft("A", "2025-02-01"),
        draft("A", "2025-02-02"),
        draft(" ", "2025-02-02"),
    ]);

    assert_eq!(pending.len(), 2);
    assert_eq!(pending.drafts()[1].date, "2025-02-02");
}

#[test]
fn test_existing_matches() {
    let mut store = setup_store();
    store
        .create(&CountdownDraft::new("Exam", "2025-02-01T09:00:00.000Z"))
        .unwrap();

    let pending = stage(vec![
        draft("Exam", "2025-02-01T10:00:00+01:00"),
        draft("Exam", "2025-02-02T09:00:00.000Z"),
        draft("Other", "2025-02-01T09:00:00.000Z"),
    ]);

    assert_eq!(pending.existing_matches(store.list()), vec![0]);
}

#[test]
fn test_cancel_leaves_store_untouched() {
    let mut store = setup_store();
    store.create(&CountdownDraft::new("Mine", "2025-03-01")).unwrap();

    cancel(stage(vec![draft("Theirs", "2025-02-01")]));

    assert_eq!(store.len(), 1);
}

#[test]
fn test_malformed_link_aborts_before_staging() {
    let source = ImportSource::from_query("?countdowns=not-valid-base64!!", "countdowns").unwrap();
    assert!(matches!(source.decode(), Err(DomainError::MalformedToken(_))));
}

#[test]
fn test_shared_link_imports_into_another_store() {
    let mut sender = setup_store();
    sender
        .create(&CountdownDraft::new("Wedding", "2025-06-14T15:00:00.000Z").with_description("Bring gift"))
        .unwrap();
    sender.create(&CountdownDraft::new("Move out", "2025-07-01")).unwrap();

    let url = share_url("https://deadlines.example/", "countdowns", sender.list()).unwrap();
    let search = &url[url.find('?').unwrap()..];
    let source = ImportSource::from_query(search, "countdowns").unwrap();

    let mut receiver = setup_store();
    let report = stage(source.decode().unwrap()).confirm(&mut receiver);

    assert_eq!(report.committed, 2);
    for (sent, received) in sender.list().iter().zip(receiver.list()) {
        assert_eq!(sent.title, received.title);
        assert_eq!(sent.description, received.description);
        assert_eq!(sent.target_date, received.target_date);
    }
}

#[test]
fn test_legacy_link_imports_one() {
    let source = ImportSource::from_query(
        "?title=Dentist&date=2025-02-03T09%3A00%3A00.000Z&description=Cleaning",
        "countdowns",
    )
    .unwrap();
    let mut store = setup_store();

    let report = stage(source.decode().unwrap()).confirm(&mut store);

    assert_eq!(report.committed, 1);
    assert_eq!(store.list()[0].description.as_deref(), Some("Cleaning"));
}
