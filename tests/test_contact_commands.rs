//! Integration tests for the contact commands: add, change, phone, all.

mod support;

use support::{assistant_on, fixtures::wednesday, send, send_all};

#[test]
fn test_add_then_lookup() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1234567890", "Contact added."),
            ("phone John", "1234567890"),
            ("all", "John: 1234567890"),
        ],
    );
}

#[test]
fn test_add_rejects_bad_phone_and_leaves_book_unchanged() {
    let mut assistant = assistant_on(wednesday());
    for line in [
        "add John 12345",
        "add John 12345678901",
        "add John 12345abcde",
        "add John +380501234",
    ] {
        assert_eq!(
            send(&mut assistant, line),
            "Give me name and phone(10 digits) please."
        );
    }
    assert!(assistant.book().is_empty());
    assert_eq!(send(&mut assistant, "all"), "");
}

#[test]
fn test_add_wrong_arity() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add", "Give me name and phone(10 digits) please."),
            ("add John", "Give me name and phone(10 digits) please."),
            (
                "add John 1234567890 0987654321",
                "Give me name and phone(10 digits) please.",
            ),
        ],
    );
    assert!(assistant.book().is_empty());
}

#[test]
fn test_add_duplicate_keeps_first_contact() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1111111111", "Contact added."),
            ("add John 2222222222", "Contact with the same name already exists."),
            ("phone John", "1111111111"),
        ],
    );
    assert_eq!(assistant.book().len(), 1);
}

#[test]
fn test_names_are_case_sensitive() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1111111111", "Contact added."),
            ("add john 2222222222", "Contact added."),
            ("phone john", "2222222222"),
            ("phone JOHN", "Contact not found."),
        ],
    );
}

#[test]
fn test_change_replaces_first_phone() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1111111111", "Contact added."),
            ("change John 2222222222", "Contact updated."),
            ("phone John", "2222222222"),
        ],
    );
}

#[test]
fn test_change_unknown_contact_does_not_mutate() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1111111111", "Contact added."),
            ("change Jane 2222222222", "Contact not found."),
            ("all", "John: 1111111111"),
        ],
    );
    assert!(assistant.book().find("Jane").is_none());
}

#[test]
fn test_change_validation_errors() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("add John 1111111111", "Contact added."),
            ("change John", "Give me name and phone(10 digits) please."),
            ("change John 22", "Give me name and phone(10 digits) please."),
            ("phone John", "1111111111"),
        ],
    );
}

#[test]
fn test_phone_requires_name() {
    let mut assistant = assistant_on(wednesday());
    assert_eq!(send(&mut assistant, "phone"), "Give me name please.");
    assert_eq!(send(&mut assistant, "phone Nobody"), "Contact not found.");
}

#[test]
fn test_all_lists_in_insertion_order() {
    let mut assistant = assistant_on(wednesday());
    send(&mut assistant, "add Zoe 3333333333");
    send(&mut assistant, "add Adam 1111111111");
    send(&mut assistant, "add Mia 2222222222");

    assert_eq!(
        send(&mut assistant, "all"),
        "Zoe: 3333333333\nAdam: 1111111111\nMia: 2222222222"
    );
}

#[test]
fn test_all_with_no_contacts_is_empty() {
    let mut assistant = assistant_on(wednesday());
    assert_eq!(send(&mut assistant, "all"), "");
}

#[test]
fn test_command_word_is_case_insensitive() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("ADD John 1111111111", "Contact added."),
            ("Phone John", "1111111111"),
            ("HELLO", "How can I help you?"),
        ],
    );
}

#[test]
fn test_unknown_and_blank_commands() {
    let mut assistant = assistant_on(wednesday());
    send_all(
        &mut assistant,
        &[
            ("", "Invalid command."),
            ("   ", "Invalid command."),
            ("delete John", "Invalid command."),
            ("add-phone John 1111111111", "Invalid command."),
        ],
    );
}
