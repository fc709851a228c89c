use std::collections::HashSet;

use models::{ErrorNode, ErrorRecord, ErrorTree, FieldDescriptor};

use super::errors::get_error;
use super::field_validators::validate_input;

/// A form whose fields can be validated into an [`ErrorTree`].
pub trait InputValidator {
    fn validate(&self) -> ErrorTree;

    fn first_error(&self) -> ErrorRecord {
        get_error(&self.validate())
    }

    fn is_valid(&self) -> bool {
        !self.first_error().has_error
    }
}

impl InputValidator for [FieldDescriptor] {
    fn validate(&self) -> ErrorTree {
        validate_form(self)
    }
}

/// Validate every field, keyed by field name in the given order.
///
/// Field names are kinds, so a form may repeat one. A repeated name is keyed
/// as `name[index]` with the field's position, keeping every record.
pub fn validate_form(fields: &[FieldDescriptor]) -> ErrorTree {
    let mut seen = HashSet::new();
    fields
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let key = if seen.insert(field.name.as_str()) {
                field.name.clone()
            } else {
                format!("{}[{}]", field.name, index)
            };
            (key, ErrorNode::Leaf(validate_input(field)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_form_validation() {
        let valid = vec![
            FieldDescriptor::new("email", "test@example.com").required(),
            FieldDescriptor::new("password", "secure123").required(),
        ];
        assert!(valid.is_valid());

        let invalid = vec![
            FieldDescriptor::new("email", "test@example.com").required(),
            FieldDescriptor::new("password", "short").required(),
            FieldDescriptor::new("username", "").required(),
        ];
        let first = invalid.first_error();
        assert!(first.has_error);
        assert_eq!(first.message, crate::validation::password::PASSWORD_RULES_MESSAGE);
        assert_eq!(invalid.validate().len(), 3);
    }

    #[test]
    fn test_repeated_field_names_keep_every_record() {
        let fields = vec![
            FieldDescriptor::new("text", "").with_label("First name").required(),
            FieldDescriptor::new("text", "Doe").with_label("Last name").required(),
            FieldDescriptor::new("text", "").with_label("City"),
        ];

        let tree = fields.validate();
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["text", "text[1]", "text[2]"]);
        assert_eq!(fields.first_error(), ErrorRecord::error("First name is required"));
    }
}
