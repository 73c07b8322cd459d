use super::*;

// =============================================================
// Show / replace semantics
// =============================================================

#[test]
fn starts_empty() {
    let queue = AlertQueue::default();
    assert!(queue.is_empty());
    assert!(queue.alerts().is_empty());
}

#[test]
fn show_inserts_one_alert() {
    let mut queue = AlertQueue::default();
    let id = queue.show(AlertKind::Success, "Sent!");
    assert_eq!(queue.alerts().len(), 1);
    assert_eq!(queue.alerts()[0].id, id);
    assert_eq!(queue.alerts()[0].kind, AlertKind::Success);
    assert_eq!(queue.alerts()[0].message, "Sent!");
}

#[test]
fn show_replaces_prior_alert() {
    let mut queue = AlertQueue::default();
    let first = queue.show(AlertKind::Danger, "Fix errors");
    let second = queue.show(AlertKind::Success, "Sent!");
    assert_eq!(queue.alerts().len(), 1);
    assert!(!queue.contains(first));
    assert!(queue.contains(second));
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut queue = AlertQueue::default();
    let a = queue.show(AlertKind::Success, "a");
    let b = queue.show(AlertKind::Success, "b");
    let c = queue.show(AlertKind::Danger, "c");
    assert!(a < b && b < c);
}

// =============================================================
// Dismiss idempotence
// =============================================================

#[test]
fn dismiss_removes_alert() {
    let mut queue = AlertQueue::default();
    let id = queue.show(AlertKind::Danger, "oops");
    queue.dismiss(id);
    assert!(queue.is_empty());
}

#[test]
fn dismiss_twice_is_noop_after_first() {
    let mut queue = AlertQueue::default();
    let id = queue.show(AlertKind::Danger, "oops");
    queue.dismiss(id);
    let snapshot = queue.clone();
    queue.dismiss(id);
    assert_eq!(queue, snapshot);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut queue = AlertQueue::default();
    let id = queue.show(AlertKind::Success, "Sent!");
    queue.dismiss(id + 100);
    assert!(queue.contains(id));
}

// Stale expiry timer: the success alert was replaced before its 5000ms
// dismissal fired. The old id is gone, so the dismissal must not touch the
// replacement.
#[test]
fn stale_dismiss_leaves_replacement_alone() {
    let mut queue = AlertQueue::default();
    let stale = queue.show(AlertKind::Success, "Sent!");
    let current = queue.show(AlertKind::Danger, "Fix errors");
    queue.dismiss(stale);
    assert!(queue.contains(current));
    assert_eq!(queue.alerts().len(), 1);
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_empties_queue() {
    let mut queue = AlertQueue::default();
    queue.show(AlertKind::Success, "Sent!");
    queue.clear();
    assert!(queue.is_empty());
}

#[test]
fn ids_stay_unique_across_clear() {
    let mut queue = AlertQueue::default();
    let before = queue.show(AlertKind::Success, "a");
    queue.clear();
    let after = queue.show(AlertKind::Success, "b");
    assert!(after > before);
}

// =============================================================
// Kind labels
// =============================================================

#[test]
fn kind_labels() {
    assert_eq!(AlertKind::Success.as_str(), "success");
    assert_eq!(AlertKind::Danger.as_str(), "danger");
}
