//! Field editor: re-collect one field and apply it to the record.

use technique_core::{Field, FieldKind, FieldValue, Record};

use crate::input::{read_list, read_text_block, Prompter};

/// Message shown when the requested field does not exist.
pub const UNKNOWN_FIELD_MESSAGE: &str = "Field not found in data. Please check the field name.";

/// Result of an edit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The field was re-collected; `changed` is false for no-op edits.
    Applied { field: Field, changed: bool },
    /// The name did not match any field; the record was not touched.
    UnknownField,
}

/// Re-prompt for the field called `name` and apply the answer to `record`.
pub fn edit_field<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &mut Record,
    name: &str,
) -> anyhow::Result<EditOutcome> {
    let field: Field = match name.parse() {
        Ok(field) => field,
        Err(_) => {
            tracing::debug!(name, "unknown field requested");
            prompter.say(UNKNOWN_FIELD_MESSAGE)?;
            return Ok(EditOutcome::UnknownField);
        }
    };

    let value = collect_value(prompter, record, field)?;
    let changed = record.apply(field, value)?;
    tracing::debug!(field = %field, changed, "field edited");
    Ok(EditOutcome::Applied { field, changed })
}

fn collect_value<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &Record,
    field: Field,
) -> anyhow::Result<FieldValue> {
    let value = match field.kind() {
        FieldKind::Scalar => {
            let current = record.scalar(field).unwrap_or_default();
            let prompt = format!("Enter new value for {} (current: {}): ", field, current);
            FieldValue::Line(prompter.read_line(&prompt)?.unwrap_or_default())
        }
        FieldKind::Text => FieldValue::Text(read_text_block(
            prompter,
            &format!(
                "Enter new value for {} (current value will be replaced):",
                field
            ),
        )?),
        FieldKind::List => FieldValue::Items(read_list(
            prompter,
            &format!(
                "Enter new values for {} (current items will be replaced):",
                field
            ),
        )?),
        FieldKind::Steps => FieldValue::Items(read_list(
            prompter,
            "Enter new exploitation steps (each step on a new line):",
        )?),
        FieldKind::Tools => FieldValue::Items(read_list(
            prompter,
            "Enter new detection tools (each tool on a new line):",
        )?),
    };
    Ok(value)
}
