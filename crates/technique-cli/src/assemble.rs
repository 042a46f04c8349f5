//! Record assembly: prompting for every field in record order.

use chrono::NaiveDate;
use technique_core::{Detection, ExploitationSteps, Record};

use crate::input::{ask, read_list, read_text_block, Prompter};

/// Values used when `last_updated` or `author` are left blank.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub author: String,
    pub today: NaiveDate,
}

impl Defaults {
    pub fn new(author: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            author: author.into(),
            today,
        }
    }

    fn today_iso(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }
}

/// Prompt for every field and build a new record.
pub fn assemble<P: Prompter + ?Sized>(
    prompter: &mut P,
    defaults: &Defaults,
) -> anyhow::Result<Record> {
    let technique_id = ask(prompter, "Enter technique_id: ")?;
    let title = ask(prompter, "Enter title: ")?;
    let category = ask(prompter, "Enter category: ")?;

    let description = read_text_block(prompter, "Enter description:")?;

    let requirements = read_list(prompter, "Enter requirements:")?;
    let enumeration_steps = read_list(prompter, "Enter enumeration_steps:")?;
    let steps = read_list(prompter, "Enter exploitation_steps (list of steps):")?;
    let validation = read_list(prompter, "Enter validation steps:")?;
    let tools = read_list(prompter, "Enter detection tools:")?;
    let references = read_list(prompter, "Enter references:")?;

    let default_date = defaults.today_iso();
    let mut last_updated = ask(
        prompter,
        &format!("Enter last_updated (default {}): ", default_date),
    )?;
    if last_updated.is_empty() {
        last_updated = default_date;
    }

    let mut author = ask(
        prompter,
        &format!("Enter author (default {}): ", defaults.author),
    )?;
    if author.is_empty() {
        author = defaults.author.clone();
    }

    let record = Record {
        exploitation_steps: ExploitationSteps::new(technique_id.clone(), steps),
        technique_id,
        title,
        category,
        description,
        requirements,
        enumeration_steps,
        validation,
        detection: Detection::new(tools),
        references,
        last_updated,
        author,
    };
    tracing::info!(technique_id = %record.technique_id, "record assembled");
    Ok(record)
}
