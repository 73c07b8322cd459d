use super::*;

use std::collections::HashMap;

use crate::net::types::FieldMessages;
use crate::state::alerts::AlertKind;

fn filled_form() -> ContactFormState {
    let mut form = ContactFormState::new();
    form.edit(Field::Name, "Ann".to_owned());
    form.edit(Field::Email, "a@x.com".to_owned());
    form.edit(Field::Subject, "Hi".to_owned());
    form.edit(Field::Message, "Hello".to_owned());
    form
}

fn email_errors(message: &str) -> FieldErrors {
    let mut wire = HashMap::new();
    wire.insert(
        "email".to_owned(),
        FieldMessages::Many(vec![message.to_owned()]),
    );
    FieldErrors::from(wire)
}

// =============================================================
// Edits
// =============================================================

#[test]
fn edit_updates_field_value() {
    let mut form = ContactFormState::new();
    form.edit(Field::Name, "Ann".to_owned());
    assert_eq!(form.fields.get(Field::Name), "Ann");
}

#[test]
fn edit_clears_exactly_that_fields_error() {
    let mut form = filled_form();
    form.begin_submit();
    let mut wire = HashMap::new();
    wire.insert(
        "email".to_owned(),
        FieldMessages::One("Invalid email".to_owned()),
    );
    wire.insert("name".to_owned(), FieldMessages::One("Too long".to_owned()));
    let errors = FieldErrors::from(wire);
    form.finish_submit(SubmissionOutcome::Rejected {
        message: "Fix errors".to_owned(),
        errors,
    });
    assert!(form.errors.has(Field::Email));
    assert!(form.errors.has(Field::Name));

    form.edit(Field::Email, "b@x.com".to_owned());
    assert!(!form.errors.has(Field::Email));
    assert!(form.errors.has(Field::Name), "other fields' errors stay");
}

// =============================================================
// Begin: guard and snapshot
// =============================================================

#[test]
fn begin_returns_trimmed_snapshot() {
    let mut form = ContactFormState::new();
    form.edit(Field::Name, "  Ann ".to_owned());
    form.edit(Field::Email, "a@x.com".to_owned());
    let request = form.begin_submit().unwrap();
    assert_eq!(request.name, "Ann");
    assert_eq!(request.email, "a@x.com");
    assert_eq!(request.subject, "");
    assert!(form.busy());
}

#[test]
fn begin_clears_prior_errors_and_alerts() {
    let mut form = filled_form();
    form.begin_submit();
    form.finish_submit(SubmissionOutcome::Rejected {
        message: "Fix errors".to_owned(),
        errors: email_errors("Invalid email"),
    });
    assert!(!form.errors.is_empty());
    assert!(!form.alerts.is_empty());

    form.begin_submit().unwrap();
    assert!(form.errors.is_empty());
    assert!(form.alerts.is_empty());
}

// Mutual exclusion: a second submit while busy must not produce a request.
#[test]
fn begin_while_busy_returns_none() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none());
    assert!(form.busy(), "busy holds until the in-flight attempt resolves");
}

#[test]
fn begin_allowed_again_after_finish() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.finish_submit(SubmissionOutcome::TransportFailed);
    assert!(form.begin_submit().is_some());
}

// =============================================================
// Scenario A: success
// =============================================================

#[test]
fn accepted_resets_fields_and_shows_success_alert() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    let scheduled = form.finish_submit(SubmissionOutcome::Accepted {
        message: "Sent!".to_owned(),
    });

    assert_eq!(form.fields, FormFields::default());
    assert!(form.errors.is_empty());
    assert!(!form.busy());

    let alerts = form.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Success);
    assert_eq!(alerts[0].message, "Sent!");
    assert_eq!(scheduled, Some(alerts[0].id), "expiry must target this alert");
}

// The 5000ms expiry funnels through dismiss_alert; once it fires the queue
// is empty again.
#[test]
fn scheduled_expiry_removes_success_alert() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    let id = form
        .finish_submit(SubmissionOutcome::Accepted {
            message: "Sent!".to_owned(),
        })
        .unwrap();
    form.dismiss_alert(id);
    assert!(form.alerts.is_empty());
}

// =============================================================
// Scenario B: validation failure
// =============================================================

#[test]
fn rejected_keeps_fields_and_installs_errors() {
    let mut form = filled_form();
    let before = form.fields.clone();
    form.begin_submit().unwrap();
    let scheduled = form.finish_submit(SubmissionOutcome::Rejected {
        message: "Fix errors".to_owned(),
        errors: email_errors("Invalid email"),
    });

    assert_eq!(form.fields, before, "input preserved for correction");
    assert_eq!(
        form.errors.get(Field::Email),
        Some(&["Invalid email".to_owned()][..])
    );
    assert!(!form.busy());
    assert_eq!(scheduled, None, "danger alerts never auto-expire");

    let alerts = form.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Danger);
    assert_eq!(alerts[0].message, "Fix errors");
}

// Business-rule rejection: danger alert only, no per-field errors.
#[test]
fn rejected_without_errors_shows_alert_only() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.finish_submit(SubmissionOutcome::Rejected {
        message: "Mailbox over quota".to_owned(),
        errors: FieldErrors::default(),
    });
    assert!(form.errors.is_empty());
    assert_eq!(form.alerts.alerts()[0].kind, AlertKind::Danger);
    assert!(!form.busy());
}

// =============================================================
// Scenario C: transport failure
// =============================================================

#[test]
fn transport_failure_shows_fallback_alert() {
    let mut form = filled_form();
    let before = form.fields.clone();
    form.begin_submit().unwrap();
    form.finish_submit(SubmissionOutcome::TransportFailed);

    assert!(!form.busy(), "busy drops on every terminal outcome");
    assert_eq!(form.fields, before);
    assert!(form.errors.is_empty());

    let alerts = form.alerts.alerts();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].kind, AlertKind::Danger);
    assert_eq!(alerts[0].message, TRANSPORT_FAILURE_MESSAGE);
}

// =============================================================
// Stale timers
// =============================================================

// A success alert's expiry fires after the user already submitted again and
// got a danger alert; the stale id must not remove the new alert.
#[test]
fn stale_expiry_after_resubmission_is_noop() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    let stale = form
        .finish_submit(SubmissionOutcome::Accepted {
            message: "Sent!".to_owned(),
        })
        .unwrap();

    form.edit(Field::Message, "Hello again".to_owned());
    form.begin_submit().unwrap();
    form.finish_submit(SubmissionOutcome::Rejected {
        message: "Fix errors".to_owned(),
        errors: email_errors("Invalid email"),
    });

    form.dismiss_alert(stale);
    assert_eq!(form.alerts.alerts().len(), 1);
    assert_eq!(form.alerts.alerts()[0].message, "Fix errors");
}
