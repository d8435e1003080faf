use tasklist_core::{FixedClock, HydrateError, Task, TaskStore, TaskValidationError};

fn store_at(now: i64) -> TaskStore<FixedClock> {
    TaskStore::with_clock(FixedClock::new(now))
}

#[test]
fn add_trims_and_appends_in_order() {
    let mut store = store_at(100);
    store.add("  first ").unwrap();
    store.add("second").unwrap();

    let texts: Vec<_> = store.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert!(store.iter().all(|task| !task.completed));
}

#[test]
fn blank_add_is_rejected_without_changing_length() {
    let mut store = store_at(100);
    store.add("keep").unwrap();

    assert!(store.add("").is_none());
    assert!(store.add("   ").is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn edit_replaces_text_but_keeps_id_and_status() {
    let mut store = store_at(100);
    let id = store.add("draft").unwrap().id;
    store.set_completed(id, true);

    assert!(store.edit_text(id, "  final  "));

    let task = store.get(id).unwrap();
    assert_eq!(task.text, "final");
    assert!(task.completed);
    assert_eq!(task.id, id);
}

#[test]
fn blank_edit_leaves_text_unchanged() {
    let mut store = store_at(100);
    let id = store.add("draft").unwrap().id;

    assert!(!store.edit_text(id, ""));
    assert!(!store.edit_text(id, " \n"));
    assert_eq!(store.get(id).unwrap().text, "draft");
}

#[test]
fn id_misses_are_silent_no_ops() {
    let mut store = store_at(100);
    store.add("only").unwrap();
    let before = store.tasks().to_vec();

    assert!(!store.set_completed(42, true));
    assert!(!store.edit_text(42, "new"));
    assert!(store.remove(42).is_none());
    assert_eq!(store.toggle(42), None);
    assert_eq!(store.tasks(), before.as_slice());
}

#[test]
fn set_completed_is_idempotent() {
    let mut once = store_at(100);
    let id = once.add("x").unwrap().id;
    let mut twice = store_at(100);
    twice.add("x").unwrap();

    once.set_completed(id, true);
    twice.set_completed(id, true);
    twice.set_completed(id, true);

    assert_eq!(once.tasks(), twice.tasks());
}

#[test]
fn remove_preserves_order_of_remaining_tasks() {
    let clock = FixedClock::new(10);
    let mut store = TaskStore::with_clock(&clock);
    let a = store.add("a").unwrap().id;
    clock.advance(1);
    let b = store.add("b").unwrap().id;
    clock.advance(1);
    let c = store.add("c").unwrap().id;

    let removed = store.remove(b).unwrap();
    assert_eq!(removed.text, "b");
    let ids: Vec<_> = store.iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn active_count_tracks_completed_flags() {
    let mut store = store_at(1);
    let a = store.add("a").unwrap().id;
    store.add("b").unwrap();
    store.add("c").unwrap();
    assert_eq!(store.active_count(), 3);

    store.set_completed(a, true);
    assert_eq!(store.active_count(), 2);

    assert_eq!(store.clear(), 3);
    assert_eq!(store.active_count(), 0);
    assert!(store.is_empty());
}

#[test]
fn hydrate_absent_or_blank_is_empty() {
    assert!(TaskStore::hydrate(None).is_empty());
    assert!(TaskStore::hydrate(Some("")).is_empty());
    assert!(TaskStore::hydrate(Some("  ")).is_empty());
}

#[test]
fn hydrate_discards_corrupt_or_mismatched_blobs() {
    for raw in [
        "not json",
        "{}",
        "null",
        r#"[{"id":"1","text":"a","completed":false}]"#,
        r#"[{"id":1,"completed":false}]"#,
        r#"[{"id":1,"text":"  ","completed":false}]"#,
        r#"[{"id":1,"text":"a","completed":false},{"id":1,"text":"b","completed":false}]"#,
    ] {
        assert!(TaskStore::hydrate(Some(raw)).is_empty(), "accepted {raw}");
    }
}

#[test]
fn try_hydrate_reports_blank_text() {
    let raw = r#"[{"id":9,"text":"","completed":true}]"#;
    let err = TaskStore::try_hydrate(Some(raw)).unwrap_err();
    assert!(matches!(
        err,
        HydrateError::Invalid(TaskValidationError::BlankText(9))
    ));
}

#[test]
fn hydrate_keeps_stored_order_and_values() {
    let raw = r#"[
        {"id":3,"text":"c","completed":true},
        {"id":1,"text":"a","completed":false}
    ]"#;
    let store = TaskStore::hydrate(Some(raw));

    assert_eq!(
        store.tasks(),
        &[
            Task {
                id: 3,
                text: "c".to_string(),
                completed: true,
            },
            Task {
                id: 1,
                text: "a".to_string(),
                completed: false,
            },
        ]
    );
}

#[test]
fn ids_continue_above_hydrated_maximum() {
    let raw = r#"[{"id":5000,"text":"old","completed":false}]"#;
    let mut store = TaskStore::hydrate_with_clock(Some(raw), FixedClock::new(10));

    let id = store.add("new").unwrap().id;
    assert_eq!(id, 5001);
}

#[test]
fn add_after_maximum_id_picks_a_free_id_below() {
    let raw = r#"[
        {"id":9223372036854775807,"text":"last","completed":false},
        {"id":100,"text":"early","completed":false}
    ]"#;
    let mut store = TaskStore::hydrate_with_clock(Some(raw), FixedClock::new(10));

    let id = store.add("new").unwrap().id;
    assert_eq!(id, 99);

    let ids: std::collections::HashSet<_> = store.iter().map(|task| task.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn add_fills_a_gap_when_both_ends_are_taken() {
    let raw = r#"[
        {"id":9223372036854775807,"text":"max","completed":false},
        {"id":-9223372036854775808,"text":"min","completed":false},
        {"id":-9223372036854775807,"text":"next","completed":false}
    ]"#;
    let mut store = TaskStore::hydrate_with_clock(Some(raw), FixedClock::new(10));

    let id = store.add("new").unwrap().id;
    assert_eq!(id, -9_223_372_036_854_775_806);
    assert_eq!(store.len(), 4);
}
