//! Field catalogue for technique records.

use std::fmt;
use std::str::FromStr;

use crate::error::TechniqueError;

/// How a field's value is collected and applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line string
    Scalar,
    /// Free-form multi-line text block
    Text,
    /// Ordered list of lines
    List,
    /// Exploitation steps, stamped with the record's technique id
    Steps,
    /// Detection tools
    Tools,
}

/// A top-level record field, in record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TechniqueId,
    Title,
    Category,
    Description,
    Requirements,
    EnumerationSteps,
    ExploitationSteps,
    Validation,
    Detection,
    References,
    LastUpdated,
    Author,
}

impl Field {
    /// All fields in the order they appear in a record.
    pub const ALL: [Field; 12] = [
        Field::TechniqueId,
        Field::Title,
        Field::Category,
        Field::Description,
        Field::Requirements,
        Field::EnumerationSteps,
        Field::ExploitationSteps,
        Field::Validation,
        Field::Detection,
        Field::References,
        Field::LastUpdated,
        Field::Author,
    ];

    /// The JSON key for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::TechniqueId => "technique_id",
            Field::Title => "title",
            Field::Category => "category",
            Field::Description => "description",
            Field::Requirements => "requirements",
            Field::EnumerationSteps => "enumeration_steps",
            Field::ExploitationSteps => "exploitation_steps",
            Field::Validation => "validation",
            Field::Detection => "detection",
            Field::References => "references",
            Field::LastUpdated => "last_updated",
            Field::Author => "author",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::TechniqueId
            | Field::Title
            | Field::Category
            | Field::LastUpdated
            | Field::Author => FieldKind::Scalar,
            Field::Description => FieldKind::Text,
            Field::Requirements
            | Field::EnumerationSteps
            | Field::Validation
            | Field::References => FieldKind::List,
            Field::ExploitationSteps => FieldKind::Steps,
            Field::Detection => FieldKind::Tools,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = TechniqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Field::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == name)
            .ok_or_else(|| TechniqueError::UnknownField(name.to_string()))
    }
}
