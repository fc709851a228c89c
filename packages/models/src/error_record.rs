use serde::{Deserialize, Serialize};

/// The `{ hasError, message }` result shape shared by every validation path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub has_error: bool,
    #[serde(default)]
    pub message: String,
}

impl ErrorRecord {
    /// Build a record that only carries `message` when `condition` holds.
    pub fn when(condition: bool, message: impl Into<String>) -> Self {
        Self {
            has_error: condition,
            message: if condition { message.into() } else { String::new() },
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::when(true, message)
    }
}
