//! Plain-text rendering of payload descriptors.
//!
//! The root record comes first, followed by every record type reachable
//! through nested or collection fields, each rendered once in the order
//! it is first referenced.

use std::collections::{BTreeSet, VecDeque};

use nsa_core::RecordSchema;

use crate::payload::Payload;

/// Render the descriptors of `payload` and its nested record types.
pub fn describe(payload: Payload) -> String {
    let mut out = format!("{} (version {})\n", payload.namespace(), payload.version());
    for schema in reachable_schemas(payload.schema()) {
        out.push('\n');
        out.push_str(&render_schema(schema));
    }
    out
}

/// The root schema plus every record schema reachable from it, breadth first.
fn reachable_schemas(root: &'static RecordSchema) -> Vec<&'static RecordSchema> {
    let mut seen = BTreeSet::from([root.name]);
    let mut queue = VecDeque::from([root]);
    let mut ordered = Vec::new();

    while let Some(schema) = queue.pop_front() {
        ordered.push(schema);
        for field in schema.fields {
            let Some(name) = field.kind.record_name() else {
                continue;
            };
            if !seen.insert(name) {
                continue;
            }
            match nsa_records::schema_by_name(name) {
                Some(nested) => queue.push_back(nested),
                None => tracing::warn!(
                    record = schema.name,
                    field = field.name,
                    nested = name,
                    "nested record has no descriptor"
                ),
            }
        }
    }
    ordered
}

fn render_schema(schema: &RecordSchema) -> String {
    let name_width = schema.fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    let json_width = schema.fields.iter().map(|f| f.json_name.len()).max().unwrap_or(0);

    let header = format!("{}: {}\n", schema.name, schema.description);
    let rows = schema.fields.iter().map(|field| {
        let kind = field.kind.to_string();
        format!(
            "  {:<name_width$}  {:<json_width$}  {:<14}  {}\n",
            field.name,
            field.json_name,
            kind,
            if field.required { "required" } else { "optional" },
        )
    });
    std::iter::once(header).chain(rows).collect()
}
