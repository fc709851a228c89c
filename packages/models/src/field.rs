use serde::{Deserialize, Serialize};

/// A single form field handed to the validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Semantic kind of the field, e.g. `email` or `password`.
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Name shown in generic messages: placeholder, then label, then the field name.
    pub fn display_name(&self) -> &str {
        self.placeholder
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.label.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(&self.name)
    }
}
