// File: hostbot-common/src/models/schema.rs

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::Error;

/// What sort of value a field carries. Only used for presentation and
/// logging decisions; the validator looks at `required` alone.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Secret,
    Identifier,
    FreeText,
    Email,
}

impl FieldKind {
    /// Secret values must never show up in logs or terminal echoes.
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldKind::Secret)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Secret => write!(f, "secret"),
            FieldKind::Identifier => write!(f, "identifier"),
            FieldKind::FreeText => write!(f, "free-text"),
            FieldKind::Email => write!(f, "email"),
        }
    }
}

/// A single field definition. The value itself lives in [`FormState`](crate::models::FormState).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Stable identifier, also the JSON key sent to the intake service.
    pub name: String,
    /// Human readable name used in validation messages.
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
}

impl FormField {
    pub fn new(name: &str, label: &str, required: bool, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required,
            kind,
        }
    }
}

/// The two field sets a deployment can collect.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    #[default]
    Minimal,
    Extended,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Minimal => write!(f, "minimal"),
            SchemaKind::Extended => write!(f, "extended"),
        }
    }
}

impl FromStr for SchemaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "minimal" => Ok(SchemaKind::Minimal),
            "extended" => Ok(SchemaKind::Extended),
            other => Err(Error::UnknownSchema(other.to_string())),
        }
    }
}

/// Ordered list of the fields a form collects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct FormSchema {
    pub kind: SchemaKind,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    /// `{ token }`
    pub fn minimal() -> Self {
        Self {
            kind: SchemaKind::Minimal,
            fields: vec![
                FormField::new("token", "Bot token", true, FieldKind::Secret),
            ],
        }
    }

    /// `{ token, userId, accessAccount, email? }`
    pub fn extended() -> Self {
        Self {
            kind: SchemaKind::Extended,
            fields: vec![
                FormField::new("token", "Bot token", true, FieldKind::Secret),
                FormField::new("userId", "User ID", true, FieldKind::Identifier),
                FormField::new("accessAccount", "Access account", true, FieldKind::FreeText),
                FormField::new("email", "Email", false, FieldKind::Email),
            ],
        }
    }

    pub fn for_kind(kind: SchemaKind) -> Self {
        match kind {
            SchemaKind::Minimal => Self::minimal(),
            SchemaKind::Extended => Self::extended(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
