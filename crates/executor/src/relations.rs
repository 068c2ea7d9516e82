//! Relations between object types.
//!
//! Every search hit is returned with summaries of the records it points at
//! (or that point at it). Each relation names a field on the hit, the field
//! on the target type it joins against, and the fields copied into the
//! summary.

use zdsearch_core::{Record, Value, ID_FIELD};
use zdsearch_index::SearchIndex;

use crate::command::ObjectType;
use crate::Result;

/// One foreign-key join, resolved at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relation {
    /// Key the summaries are stored under on the result
    pub key: &'static str,
    /// Field on the hit whose value is looked up
    pub source_field: &'static str,
    /// Type of the related records
    pub target_type: ObjectType,
    /// Field on the related records that must hold the value
    pub target_field: &'static str,
    /// Fields copied from each related record
    pub summary_fields: &'static [&'static str],
}

const TICKET_SUMMARY: &[&str] = &[ID_FIELD, "subject"];
const NAMED_SUMMARY: &[&str] = &[ID_FIELD, "name"];

const ORGANIZATION_RELATIONS: &[Relation] = &[
    Relation {
        key: "_tickets",
        source_field: ID_FIELD,
        target_type: ObjectType::Ticket,
        target_field: "organization_id",
        summary_fields: TICKET_SUMMARY,
    },
    Relation {
        key: "_users",
        source_field: ID_FIELD,
        target_type: ObjectType::User,
        target_field: "organization_id",
        summary_fields: NAMED_SUMMARY,
    },
];

const TICKET_RELATIONS: &[Relation] = &[
    Relation {
        key: "_assignee",
        source_field: "assignee_id",
        target_type: ObjectType::User,
        target_field: ID_FIELD,
        summary_fields: NAMED_SUMMARY,
    },
    Relation {
        key: "_submitter",
        source_field: "submitter_id",
        target_type: ObjectType::User,
        target_field: ID_FIELD,
        summary_fields: NAMED_SUMMARY,
    },
    Relation {
        key: "_organization",
        source_field: "organization_id",
        target_type: ObjectType::Organization,
        target_field: ID_FIELD,
        summary_fields: NAMED_SUMMARY,
    },
];

const USER_RELATIONS: &[Relation] = &[
    Relation {
        key: "_assigned_tickets",
        source_field: ID_FIELD,
        target_type: ObjectType::Ticket,
        target_field: "assignee_id",
        summary_fields: TICKET_SUMMARY,
    },
    Relation {
        key: "_submitted_tickets",
        source_field: ID_FIELD,
        target_type: ObjectType::Ticket,
        target_field: "submitter_id",
        summary_fields: TICKET_SUMMARY,
    },
    Relation {
        key: "_organization",
        source_field: "organization_id",
        target_type: ObjectType::Organization,
        target_field: ID_FIELD,
        summary_fields: NAMED_SUMMARY,
    },
];

impl ObjectType {
    /// Relations attached to hits of this type, in result order
    pub fn relations(self) -> &'static [Relation] {
        match self {
            ObjectType::Organization => ORGANIZATION_RELATIONS,
            ObjectType::Ticket => TICKET_RELATIONS,
            ObjectType::User => USER_RELATIONS,
        }
    }
}

impl Relation {
    /// Summaries of the records related to `record`.
    ///
    /// A missing or null source field relates to nothing.
    pub fn resolve(&self, record: &Record, index: &SearchIndex) -> Result<Vec<Value>> {
        let source = match record.get(self.source_field) {
            Some(value) if !value.is_null() => value,
            _ => return Ok(Vec::new()),
        };
        let related = index.records_for(
            source,
            Some(self.target_field),
            Some(self.target_type.as_str()),
        )?;
        Ok(related
            .iter()
            .map(|r| Value::from(r.project(self.summary_fields)))
            .collect())
    }
}

/// `record` plus one array of summaries per relation of `object_type`.
///
/// Relation keys go in first and the record's own fields overlay them, so a
/// field that happens to share a relation key's name keeps its value.
pub fn denormalize(record: &Record, object_type: ObjectType, index: &SearchIndex) -> Result<Record> {
    let mut result = Record::new();
    for relation in object_type.relations() {
        let summaries = relation.resolve(record, index)?;
        result.insert(relation.key, Value::Array(summaries));
    }
    for (field, value) in record.iter() {
        result.insert(field, value.clone());
    }
    Ok(result)
}
