// File: src/services/validator.rs

use hostbot_common::models::{FormSchema, FormState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Names of the required fields that are blank, in schema order.
    Invalid(Vec<String>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// User-facing text for an `Invalid` result, built from the field labels.
    /// `None` when the result is `Valid`.
    pub fn message(&self, schema: &FormSchema) -> Option<String> {
        let missing = match self {
            ValidationResult::Valid => return None,
            ValidationResult::Invalid(missing) => missing,
        };

        let labels: Vec<&str> = missing.iter()
            .map(|name| schema.field(name).map_or(name.as_str(), |f| f.label.as_str()))
            .collect();

        Some(match labels.as_slice() {
            [single] => format!("{} is required", single),
            many => format!("Required fields missing: {}", many.join(", ")),
        })
    }
}

/// Checks that every required field has a non-blank value.
///
/// Optional fields never block, whatever they hold; content checks (email
/// format, token shape) are left to the intake service. A field that is absent
/// from `state` altogether counts as blank.
pub fn validate(schema: &FormSchema, state: &FormState) -> ValidationResult {
    let missing: Vec<String> = schema.fields.iter()
        .filter(|field| field.required)
        .filter(|field| state.get(&field.name).map_or(true, |v| v.trim().is_empty()))
        .map(|field| field.name.clone())
        .collect();

    if missing.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_counts_as_missing() {
        let schema = FormSchema::minimal();
        let state = FormState::new(&schema).with("token", "   \t").unwrap();
        assert_eq!(validate(&schema, &state), ValidationResult::Invalid(vec!["token".into()]));
    }

    #[test]
    fn optional_email_never_blocks() {
        let schema = FormSchema::extended();
        let state = FormState::new(&schema)
            .with("token", "abc").unwrap()
            .with("userId", "1234").unwrap()
            .with("accessAccount", "main").unwrap()
            .with("email", "definitely not an email").unwrap();
        assert!(validate(&schema, &state).is_valid());

        let state = FormState::new(&schema)
            .with("token", "abc").unwrap()
            .with("userId", "1234").unwrap()
            .with("accessAccount", "main").unwrap();
        assert!(validate(&schema, &state).is_valid());
    }

    #[test]
    fn state_from_another_schema_reports_missing_fields() {
        let schema = FormSchema::extended();
        let state = FormState::new(&FormSchema::minimal()).with("token", "abc").unwrap();
        assert_eq!(
            validate(&schema, &state),
            ValidationResult::Invalid(vec!["userId".into(), "accessAccount".into()])
        );
    }

    #[test]
    fn message_uses_labels() {
        let schema = FormSchema::extended();
        let single = ValidationResult::Invalid(vec!["token".into()]);
        assert_eq!(single.message(&schema).as_deref(), Some("Bot token is required"));

        let many = ValidationResult::Invalid(vec!["userId".into(), "accessAccount".into()]);
        assert_eq!(
            many.message(&schema).as_deref(),
            Some("Required fields missing: User ID, Access account")
        );

        assert_eq!(ValidationResult::Valid.message(&schema), None);
    }
}
