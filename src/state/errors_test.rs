use super::*;

fn wire(entries: &[(&str, FieldMessages)]) -> HashMap<String, FieldMessages> {
    entries
        .iter()
        .map(|(key, messages)| ((*key).to_owned(), messages.clone()))
        .collect()
}

// =============================================================
// Wire conversion
// =============================================================

#[test]
fn from_wire_keeps_known_fields() {
    let errors = FieldErrors::from(wire(&[
        ("email", FieldMessages::Many(vec!["Invalid email".to_owned()])),
        ("name", FieldMessages::One("Required".to_owned())),
    ]));
    assert_eq!(errors.get(Field::Email), Some(&["Invalid email".to_owned()][..]));
    assert_eq!(errors.get(Field::Name), Some(&["Required".to_owned()][..]));
    assert!(!errors.has(Field::Subject));
}

#[test]
fn from_wire_drops_unknown_keys() {
    let errors = FieldErrors::from(wire(&[(
        "captcha",
        FieldMessages::One("nope".to_owned()),
    )]));
    assert!(errors.is_empty());
}

#[test]
fn from_wire_drops_empty_message_lists() {
    let errors = FieldErrors::from(wire(&[("email", FieldMessages::Many(vec![]))]));
    assert!(!errors.has(Field::Email));
    assert!(errors.is_empty());
}

// =============================================================
// Mutation
// =============================================================

#[test]
fn set_all_replaces_whole_mapping() {
    let mut errors = FieldErrors::from(wire(&[("name", FieldMessages::One("old".to_owned()))]));
    errors.set_all(FieldErrors::from(wire(&[(
        "email",
        FieldMessages::One("new".to_owned()),
    )])));
    assert!(!errors.has(Field::Name));
    assert!(errors.has(Field::Email));
}

#[test]
fn clear_removes_only_that_field() {
    let mut errors = FieldErrors::from(wire(&[
        ("email", FieldMessages::One("bad".to_owned())),
        ("subject", FieldMessages::One("too long".to_owned())),
    ]));
    errors.clear(Field::Email);
    assert!(!errors.has(Field::Email));
    assert!(errors.has(Field::Subject));
}

#[test]
fn clear_absent_field_is_noop() {
    let mut errors = FieldErrors::default();
    errors.clear(Field::Email);
    assert!(errors.is_empty());
}

#[test]
fn clear_all_empties_mapping() {
    let mut errors = FieldErrors::from(wire(&[
        ("name", FieldMessages::One("a".to_owned())),
        ("email", FieldMessages::One("b".to_owned())),
    ]));
    errors.clear_all();
    assert!(errors.is_empty());
}

// =============================================================
// Display
// =============================================================

#[test]
fn message_joins_with_comma_space() {
    let errors = FieldErrors::from(wire(&[(
        "email",
        FieldMessages::Many(vec!["Invalid email".to_owned(), "Too long".to_owned()]),
    )]));
    assert_eq!(
        errors.message(Field::Email).as_deref(),
        Some("Invalid email, Too long")
    );
}

#[test]
fn message_absent_field_is_none() {
    let errors = FieldErrors::default();
    assert_eq!(errors.message(Field::Email), None);
}
