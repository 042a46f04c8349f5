//! Review loop: show the record and offer edits until the user is done.

use technique_core::{Field, FieldValue, Record};

use crate::edit::{edit_field, EditOutcome};
use crate::input::{ask, Prompter};
use crate::ui::{badge, divider, Badge, UiContext};

const EDIT_QUESTION: &str = "Do you want to edit any field?";
const FIELD_PROMPT: &str = "Enter the field name you want to edit (e.g., technique_id, description, requirements, exploitation_steps, detection, etc.): ";
const REQUIRED_ID_PROMPT: &str = "Enter technique_id (required to save): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewState {
    Reviewing,
    Done,
}

/// Run the review loop until the user declines to edit.
///
/// Declining with a record that cannot be saved reports the problem and asks
/// for a new technique_id instead of finishing. End of input finishes anyway
/// and leaves the record for the caller to reject.
///
/// Returns the number of edits that changed the record.
pub fn review<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &mut Record,
    ui: &UiContext,
) -> anyhow::Result<usize> {
    let mut state = ReviewState::Reviewing;
    let mut changes = 0;

    while state == ReviewState::Reviewing {
        show_summary(prompter, record, ui)?;
        state = if prompter.confirm(EDIT_QUESTION)? {
            let name = ask(prompter, FIELD_PROMPT)?;
            let outcome = edit_field(prompter, record, &name)?;
            if let EditOutcome::Applied {
                field,
                changed: true,
            } = outcome
            {
                tracing::info!(field = %field, "field updated");
                changes += 1;
            }
            ReviewState::Reviewing
        } else {
            finish_or_fix_id(prompter, record, ui, &mut changes)?
        };
    }

    tracing::debug!(changes, "review finished");
    Ok(changes)
}

fn finish_or_fix_id<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &mut Record,
    ui: &UiContext,
    changes: &mut usize,
) -> anyhow::Result<ReviewState> {
    let Err(e) = record.validate() else {
        return Ok(ReviewState::Done);
    };

    prompter.say(&badge(ui, Badge::Err, &e.to_string()))?;
    let Some(line) = prompter.read_line(REQUIRED_ID_PROMPT)? else {
        tracing::debug!("end of input with an unsavable record");
        return Ok(ReviewState::Done);
    };

    if record.apply(Field::TechniqueId, FieldValue::Line(line))? {
        tracing::info!(field = %Field::TechniqueId, "field updated");
        *changes += 1;
    }
    Ok(ReviewState::Reviewing)
}

/// Print the record as indented JSON.
pub fn show_summary<P: Prompter + ?Sized>(
    prompter: &mut P,
    record: &Record,
    ui: &UiContext,
) -> anyhow::Result<()> {
    prompter.say("")?;
    prompter.say("--- Current JSON Data ---")?;
    prompter.say(&record.to_pretty_json()?)?;
    prompter.say(&divider(ui))?;
    if record.id_drift() {
        prompter.say(&badge(
            ui,
            Badge::Warn,
            &format!(
                "exploitation_steps.technique_id is \"{}\" but technique_id is \"{}\"; edit exploitation_steps to update it.",
                record.exploitation_steps.technique_id, record.technique_id
            ),
        ))?;
    }
    prompter.say("")?;
    Ok(())
}
