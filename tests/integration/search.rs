//! Search through the executor, with related records attached.

use crate::common::*;
use zdsearch::Value;

#[test]
fn user_by_email_has_relations() {
    let executor = create_executor();
    let hits = search(
        &executor,
        &["search", "user.email", "coffeyrasmussen@flotonic.com"],
    );
    assert_eq!(hits.len(), 1);
    let user = &hits[0];

    assert_eq!(user.get("name"), Some(&Value::from("Francisca Rasmussen")));
    assert_eq!(
        user.get("_organization"),
        Some(&Value::Array(vec![summary(Value::Int(101), "name", "Enthaze")]))
    );
    assert_eq!(user.get("_assigned_tickets"), Some(&Value::Array(vec![])));
    assert_eq!(
        user.get("_submitted_tickets"),
        Some(&Value::Array(vec![summary(
            Value::from(TICKET_KOREA),
            "subject",
            "A Catastrophe in Korea (North)"
        )]))
    );
}

#[test]
fn literal_fields_need_the_whole_value() {
    let executor = create_executor();
    assert!(search(&executor, &["search", "user.email", "coffeyrasmussen"]).is_empty());
    assert!(search(&executor, &["search", "user.email", "COFFEYRASMUSSEN@flotonic.com"]).is_empty());
}

#[test]
fn text_fields_match_single_words_case_insensitively() {
    let executor = create_executor();
    let hits = search(&executor, &["search", "ticket.subject", "CATASTROPHE"]);
    let ids: Vec<_> = hits.iter().filter_map(|r| r.id().cloned()).collect();
    assert_eq!(
        ids,
        vec![Value::from(TICKET_KOREA), Value::from(TICKET_MICRONESIA)]
    );

    let hits = search(&executor, &["search", "ticket.subject", "korea"]);
    assert_eq!(hits.len(), 1);
}

#[test]
fn organization_by_domain_lists_members_and_tickets() {
    let executor = create_executor();
    let hits = search(&executor, &["search", "organization.domain_names", "kage.com"]);
    assert_eq!(hits.len(), 1);
    let org = &hits[0];

    assert_eq!(
        org.get("_users"),
        Some(&Value::Array(vec![summary(
            Value::Int(1),
            "name",
            "Francisca Rasmussen"
        )]))
    );
    assert_eq!(
        org.get("_tickets"),
        Some(&Value::Array(vec![summary(
            Value::from(TICKET_KOREA),
            "subject",
            "A Catastrophe in Korea (North)"
        )]))
    );
}

#[test]
fn ticket_by_id_resolves_people_and_organization() {
    let executor = create_executor();
    let hits = search(&executor, &["search", "ticket._id", TICKET_KOREA]);
    assert_eq!(hits.len(), 1);
    let ticket = &hits[0];

    assert_eq!(
        ticket.get("_submitter"),
        Some(&Value::Array(vec![summary(
            Value::Int(1),
            "name",
            "Francisca Rasmussen"
        )]))
    );
    assert_eq!(
        ticket.get("_assignee"),
        Some(&Value::Array(vec![summary(Value::Int(2), "name", "Cross Barlow")]))
    );
    assert_eq!(
        ticket.get("_organization"),
        Some(&Value::Array(vec![summary(Value::Int(101), "name", "Enthaze")]))
    );
}

#[test]
fn missing_foreign_key_resolves_to_nothing() {
    let executor = create_executor();
    let hits = search(&executor, &["search", "ticket._id", TICKET_MICRONESIA]);
    assert_eq!(hits[0].get("_assignee"), Some(&Value::Array(vec![])));
}

#[test]
fn numeric_and_boolean_terms_are_coerced() {
    let executor = create_executor();
    assert_eq!(search(&executor, &["search", "organization._id", "102"]).len(), 1);
    assert_eq!(search(&executor, &["search", "ticket.submitter_id", "2"]).len(), 1);
    assert_eq!(search(&executor, &["search", "user.active", "TRUE"]).len(), 2);
    assert_eq!(search(&executor, &["search", "user.verified", "false"]).len(), 1);
    assert_eq!(search(&executor, &["search", "ticket.has_incidents", "true"]).len(), 1);
}

#[test]
fn empty_term_finds_empty_values() {
    let executor = create_executor();
    let hits = search(&executor, &["search", "ticket.description", ""]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), Some(&Value::from(TICKET_MICRONESIA)));

    let hits = search(&executor, &["search", "ticket.tags", ""]);
    assert_eq!(hits.len(), 1);
}

#[test]
fn search_is_scoped_to_the_object_type() {
    let executor = create_executor();
    // organization_id 101 is held by a user and a ticket
    assert_eq!(search(&executor, &["search", "user.organization_id", "101"]).len(), 1);
    assert_eq!(search(&executor, &["search", "ticket.organization_id", "101"]).len(), 1);
    assert!(search(&executor, &["search", "organization.organization_id", "101"]).is_empty());
}

#[test]
fn unknown_field_finds_nothing() {
    let executor = create_executor();
    assert!(search(&executor, &["search", "user.nickname", "bob"]).is_empty());
}
