//! End-to-end session scenarios exercising the store, projector, and
//! deletion workflow together.

use taskflow_app::{Session, StatusFilter};
use taskflow_core::{AddTaskError, Category, Priority, TaskId};
use time::macros::date;

fn add(session: &mut Session, text: &str) -> TaskId {
    session
        .add_task(text, Priority::Medium, Category::Personal, None)
        .unwrap_or_else(|err| panic!("add must accept {text:?}: {err}"))
}

#[test]
fn add_toggle_confirm_delete_walkthrough() {
    let mut session = Session::new();
    assert!(session.is_empty());
    assert_eq!(session.len(), 0);

    let id = session
        .add_task(
            "Buy milk",
            Priority::Medium,
            Category::Personal,
            Some(date!(2025 - 06 - 10)),
        )
        .unwrap_or_else(|err| panic!("add must succeed: {err}"));

    let counts = session.counts();
    assert_eq!((counts.total, counts.completed, counts.pending), (1, 0, 1));

    assert!(session.toggle_task(id));
    let counts = session.counts();
    assert_eq!((counts.total, counts.completed, counts.pending), (1, 1, 0));

    assert!(session.request_delete(id));
    assert_eq!(session.counts().total, 1, "request must not remove the task");
    assert!(session.deletion().is_pending());
    assert_eq!(
        session
            .deletion()
            .pending_target()
            .map(|target| target.text.as_str()),
        Some("Buy milk")
    );

    let removed = session
        .confirm_delete()
        .unwrap_or_else(|| panic!("confirm must remove the pending target"));
    assert_eq!(removed.id, id);
    assert!(session.tasks().is_empty());
    assert!(!session.deletion().is_pending());
}

#[test]
fn filter_and_search_scenario() {
    let mut session = Session::new();
    let a = add(&mut session, "A");
    let b = add(&mut session, "B");
    assert!(session.toggle_task(b));

    session.set_status_filter(StatusFilter::Completed);
    let visible = session.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, b);

    session.set_status_filter(StatusFilter::All);
    session.set_search("a");
    let visible = session.visible_tasks();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, a, "search must match case-insensitively");
}

#[test]
fn cancel_leaves_the_collection_unchanged() {
    let mut session = Session::new();
    let id = add(&mut session, "Keep me");

    assert!(session.request_delete(id));
    session.cancel_delete();

    assert!(!session.deletion().is_pending());
    assert_eq!(session.counts().total, 1);
    assert!(session.confirm_delete().is_none(), "nothing left to confirm");
    assert_eq!(session.counts().total, 1);
}

#[test]
fn re_request_overwrites_the_pending_target() {
    let mut session = Session::new();
    let first = add(&mut session, "first");
    let second = add(&mut session, "second");

    assert!(session.request_delete(first));
    assert!(session.request_delete(second));

    let removed = session
        .confirm_delete()
        .unwrap_or_else(|| panic!("confirm must apply to the latest request"));
    assert_eq!(removed.id, second);
    assert!(session.tasks().get(first).is_some());
}

#[test]
fn request_delete_for_unknown_id_is_a_noop() {
    let mut session = Session::new();
    add(&mut session, "only task");
    let unknown: TaskId = "999".parse().unwrap_or_else(|err| panic!("id: {err}"));

    assert!(!session.request_delete(unknown));
    assert!(!session.deletion().is_pending());
    assert!(session.confirm_delete().is_none());
    assert_eq!(session.counts().total, 1);
}

#[test]
fn blank_text_is_rejected_without_growing_the_collection() {
    let mut session = Session::new();
    for text in ["", "   ", "\t"] {
        let result = session.add_task(text, Priority::Low, Category::Work, None);
        assert_eq!(result, Err(AddTaskError::EmptyText));
    }
    assert!(session.tasks().is_empty());
}

#[test]
fn ids_stay_pairwise_distinct_across_many_adds() {
    let mut session = Session::new();
    let ids: Vec<TaskId> = (0..100)
        .map(|n| add(&mut session, &format!("task {n}")))
        .collect();

    for (i, left) in ids.iter().enumerate() {
        for right in &ids[i + 1..] {
            assert_ne!(left, right);
        }
    }
}
