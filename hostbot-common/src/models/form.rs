// File: hostbot-common/src/models/form.rs

use serde::{Deserialize, Serialize};
use crate::error::Error;
use crate::models::schema::FormSchema;

/// Current value of every field in a schema, in schema order.
///
/// Created with one empty entry per field. Only names that exist in the
/// schema can be written, so the state never drifts from the payload shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    values: Vec<(String, String)>,
}

impl FormState {
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            values: schema.field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), Error> {
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => {
                *slot = value.into();
                Ok(())
            }
            None => Err(Error::UnknownField(name.to_string())),
        }
    }

    /// Builder-style `set`, handy when preparing a state in one expression.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Result<Self, Error> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Clears every value but keeps the field set.
    pub fn reset(&mut self) {
        for (_, v) in self.values.iter_mut() {
            v.clear();
        }
    }

    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|(_, v)| v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_one_empty_value_per_field() {
        let state = FormState::new(&FormSchema::extended());
        let names: Vec<&str> = state.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["token", "userId", "accessAccount", "email"]);
        assert!(state.is_blank());
    }

    #[test]
    fn set_rejects_names_outside_the_schema() {
        let mut state = FormState::new(&FormSchema::minimal());
        let err = state.set("userId", "42").unwrap_err();
        assert!(matches!(err, Error::UnknownField(name) if name == "userId"));
        assert_eq!(state.get("userId"), None);
    }

    #[test]
    fn reset_clears_values_and_keeps_fields() {
        let mut state = FormState::new(&FormSchema::minimal())
            .with("token", "abc123")
            .unwrap();
        assert_eq!(state.get("token"), Some("abc123"));

        state.reset();
        assert_eq!(state.get("token"), Some(""));
        assert!(state.is_blank());
    }
}
