//! `fields TYPE` over the shared data set.

use crate::common::*;
use zdsearch::Output;

fn fields(object_type: &str) -> Vec<String> {
    match run(&create_executor(), &["fields", object_type]).unwrap() {
        Output::Fields(fields) => fields,
        other => panic!("expected fields, got {:?}", other),
    }
}

#[test]
fn fields_are_sorted_per_type() {
    assert_eq!(
        fields("user"),
        vec![
            "_id",
            "_type",
            "active",
            "email",
            "name",
            "organization_id",
            "role",
            "verified"
        ]
    );
}

#[test]
fn fields_union_over_all_records_of_a_type() {
    let ticket_fields = fields("ticket");
    // only the second ticket has a description
    assert!(ticket_fields.contains(&"description".to_string()));
    // url only appears on organizations
    assert!(!ticket_fields.contains(&"url".to_string()));
    assert!(fields("organization").contains(&"url".to_string()));
}
