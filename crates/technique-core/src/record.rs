//! The technique record and its edit semantics.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TechniqueError};
use crate::field::{Field, FieldKind};

/// A technique (attack or procedure) record.
///
/// Field order matches the JSON document written to disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Identifier, also used as the output file name
    pub technique_id: String,

    /// Short label
    pub title: String,

    /// Short label
    pub category: String,

    /// Free-form multi-line text
    pub description: String,

    pub requirements: Vec<String>,

    pub enumeration_steps: Vec<String>,

    pub exploitation_steps: ExploitationSteps,

    pub validation: Vec<String>,

    pub detection: Detection,

    pub references: Vec<String>,

    /// ISO-8601 date (YYYY-MM-DD)
    pub last_updated: String,

    pub author: String,
}

/// Exploitation steps, carrying a copy of the technique id they were entered for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExploitationSteps {
    pub technique_id: String,
    pub steps: Vec<String>,
}

impl ExploitationSteps {
    pub fn new(technique_id: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            technique_id: technique_id.into(),
            steps,
        }
    }
}

/// Detection tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    pub tools: Vec<String>,
}

impl Detection {
    pub fn new(tools: Vec<String>) -> Self {
        Self { tools }
    }
}

/// A freshly collected value for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single line (scalar fields)
    Line(String),
    /// A joined text block (description)
    Text(String),
    /// Ordered items (list fields, exploitation steps, detection tools)
    Items(Vec<String>),
}

impl Record {
    /// Encode as four-space indented JSON. Non-ASCII text is kept verbatim.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| TechniqueError::Serialization(e.to_string()))
    }

    /// Current value of a scalar field, for display in edit prompts.
    pub fn scalar(&self, field: Field) -> Option<&str> {
        match field {
            Field::TechniqueId => Some(&self.technique_id),
            Field::Title => Some(&self.title),
            Field::Category => Some(&self.category),
            Field::LastUpdated => Some(&self.last_updated),
            Field::Author => Some(&self.author),
            _ => None,
        }
    }

    /// Apply a newly collected value to `field`.
    ///
    /// Blank input leaves scalar fields and the description untouched. List
    /// values always replace the previous list, even when empty. Exploitation
    /// steps are stamped with the record's technique id as it is now.
    ///
    /// Returns whether the record changed.
    pub fn apply(&mut self, field: Field, value: FieldValue) -> Result<bool> {
        let before = self.clone();
        match (field.kind(), value) {
            (FieldKind::Scalar, FieldValue::Line(line)) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let slot = match field {
                        Field::TechniqueId => &mut self.technique_id,
                        Field::Title => &mut self.title,
                        Field::Category => &mut self.category,
                        Field::LastUpdated => &mut self.last_updated,
                        _ => &mut self.author,
                    };
                    *slot = trimmed.to_string();
                }
            }
            (FieldKind::Text, FieldValue::Text(text)) => {
                if !text.trim().is_empty() {
                    self.description = text;
                }
            }
            (FieldKind::List, FieldValue::Items(items)) => {
                let slot = match field {
                    Field::Requirements => &mut self.requirements,
                    Field::EnumerationSteps => &mut self.enumeration_steps,
                    Field::Validation => &mut self.validation,
                    _ => &mut self.references,
                };
                *slot = items;
            }
            (FieldKind::Steps, FieldValue::Items(steps)) => {
                self.exploitation_steps = ExploitationSteps::new(self.technique_id.clone(), steps);
            }
            (FieldKind::Tools, FieldValue::Items(tools)) => {
                self.detection = Detection::new(tools);
            }
            (kind, value) => {
                return Err(TechniqueError::InvalidInput(format!(
                    "{:?} value does not fit {} ({:?} field)",
                    value, field, kind
                )));
            }
        }
        Ok(*self != before)
    }

    /// Whether the exploitation steps were stamped with a different id than
    /// the record currently carries.
    pub fn id_drift(&self) -> bool {
        self.exploitation_steps.technique_id != self.technique_id
    }

    /// Check that the record can be written to disk.
    pub fn validate(&self) -> Result<()> {
        let id = self.technique_id.trim();
        if id.is_empty() {
            return Err(TechniqueError::Validation(
                "technique_id is required to name the output file".to_string(),
            ));
        }
        if id == "." || id == ".." {
            return Err(TechniqueError::Validation(format!(
                "technique_id \"{}\" is not a valid file name",
                id
            )));
        }
        if id.contains(['/', '\\', '\0']) {
            return Err(TechniqueError::Validation(format!(
                "technique_id \"{}\" must not contain path separators",
                id
            )));
        }
        Ok(())
    }
}
