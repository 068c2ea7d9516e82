//! Fields command handler.

use zdsearch_index::SearchIndex;

use crate::command::FieldsCommand;

/// Handle `fields TYPE`: every field name seen on records of that type
pub fn fields(index: &SearchIndex, cmd: &FieldsCommand) -> Vec<String> {
    let fields = index.fields_for(cmd.object_type.as_str());
    tracing::debug!(
        target: "zdsearch::executor",
        object_type = %cmd.object_type,
        count = fields.len(),
        "listed fields"
    );
    fields
}
