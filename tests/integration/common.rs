//! Shared data set: two organizations, two users, two tickets.

use std::sync::Arc;

use zdsearch::{Executor, IndexBuilder, Record, Tokenizer, Value, TYPE_FIELD};

pub const TICKET_KOREA: &str = "436bf9b0-1147-4c0a-8439-6f79833bff5b";
pub const TICKET_MICRONESIA: &str = "1a227508-9f39-427c-8f57-1b72f3fab87c";

const ORGANIZATIONS: &str = r#"[
  {
    "_id": 101,
    "url": "http://initech.zendesk.com/api/v2/organizations/101.json",
    "name": "Enthaze",
    "domain_names": ["kage.com", "ecratic.com"],
    "details": "MegaCorp",
    "shared_tickets": false,
    "tags": ["Fulton", "West"]
  },
  {
    "_id": 102,
    "name": "Nutralab",
    "domain_names": ["trollery.com"],
    "details": "Non profit",
    "shared_tickets": true,
    "tags": ["Cherry"]
  }
]"#;

const USERS: &str = r#"[
  {
    "_id": 1,
    "name": "Francisca Rasmussen",
    "email": "coffeyrasmussen@flotonic.com",
    "active": true,
    "verified": true,
    "role": "admin",
    "organization_id": 101
  },
  {
    "_id": 2,
    "name": "Cross Barlow",
    "email": "jonibarlow@flotonic.com",
    "active": true,
    "verified": false,
    "role": "agent",
    "organization_id": 102
  }
]"#;

const TICKETS: &str = r#"[
  {
    "_id": "436bf9b0-1147-4c0a-8439-6f79833bff5b",
    "subject": "A Catastrophe in Korea (North)",
    "type": "incident",
    "priority": "high",
    "status": "pending",
    "submitter_id": 1,
    "assignee_id": 2,
    "organization_id": 101,
    "tags": ["Ohio", "Pennsylvania"],
    "has_incidents": false
  },
  {
    "_id": "1a227508-9f39-427c-8f57-1b72f3fab87c",
    "subject": "A Catastrophe in Micronesia",
    "description": "",
    "type": "problem",
    "priority": "low",
    "status": "hold",
    "submitter_id": 2,
    "organization_id": 102,
    "tags": [],
    "has_incidents": true
  }
]"#;

fn parse(json: &str, object_type: &str) -> Vec<Arc<Record>> {
    let items: Vec<serde_json::Map<String, serde_json::Value>> =
        serde_json::from_str(json).unwrap();
    items
        .into_iter()
        .map(|fields| {
            let mut record: Record = fields
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect();
            record.insert(TYPE_FIELD, object_type);
            Arc::new(record)
        })
        .collect()
}

pub fn create_executor() -> Executor {
    let tokenizer = Tokenizer::default()
        .with_literal_fields(["_id", "url", "external_id", "email", "domain_names"]);
    let mut builder = IndexBuilder::new(Arc::new(tokenizer));

    let mut records = parse(ORGANIZATIONS, "organization");
    records.extend(parse(TICKETS, "ticket"));
    records.extend(parse(USERS, "user"));
    assert_eq!(builder.index_all(records).unwrap(), 6);

    Executor::new(Arc::new(builder.build()))
}

/// Run one command line, already split into words.
pub fn run(executor: &Executor, words: &[&str]) -> zdsearch::Result<zdsearch::Output> {
    executor.execute_line(words)
}

/// Run a search and return the records.
pub fn search(executor: &Executor, words: &[&str]) -> Vec<Record> {
    match run(executor, words).unwrap() {
        zdsearch::Output::Records(records) => records,
        other => panic!("expected records, got {:?}", other),
    }
}

pub fn summary(id: Value, label_field: &str, label: &str) -> Value {
    let mut record = Record::new();
    record.insert("_id", id);
    record.insert(label_field, label);
    Value::from(record)
}
