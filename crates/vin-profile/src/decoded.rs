//! Raw Decoded Fields

use serde::{Deserialize, Serialize};

/// One variable/value pair from the VIN registry.
///
/// The registry returns these as an ordered list; a variable name may
/// repeat or be missing entirely, and values are frequently empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecodedField {
    /// Variable name, e.g. "Model Year"
    #[serde(rename = "Variable")]
    pub variable: Option<String>,
    /// Raw value as reported by the registry
    #[serde(rename = "Value")]
    pub value: Option<String>,
}

impl DecodedField {
    /// Build a field pair from string slices
    pub fn new(variable: &str, value: &str) -> Self {
        Self {
            variable: Some(variable.to_string()),
            value: Some(value.to_string()),
        }
    }
}

/// Look up a variable in the decoded sequence.
///
/// Scans in order and returns the first value that is non-empty after
/// trimming. Entries whose value is blank are skipped, so a later
/// duplicate of the same variable can still supply the value.
pub fn lookup(fields: &[DecodedField], variable: &str) -> Option<String> {
    fields.iter().find_map(|field| {
        if field.variable.as_deref() != Some(variable) {
            return None;
        }
        let trimmed = field.value.as_deref()?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let fields = vec![
            DecodedField::new("Make", "Toyota"),
            DecodedField::new("Make", "Honda"),
        ];
        assert_eq!(lookup(&fields, "Make"), Some("Toyota".to_string()));
    }

    #[test]
    fn test_blank_entry_is_skipped() {
        let fields = vec![
            DecodedField::new("Make", "   "),
            DecodedField::new("Make", "Toyota"),
        ];
        assert_eq!(lookup(&fields, "Make"), Some("Toyota".to_string()));
    }

    #[test]
    fn test_value_is_trimmed() {
        let fields = vec![DecodedField::new("Model", "  Camry ")];
        assert_eq!(lookup(&fields, "Model"), Some("Camry".to_string()));
    }

    #[test]
    fn test_missing_variable() {
        let fields = vec![DecodedField::new("Make", "Toyota")];
        assert_eq!(lookup(&fields, "Model"), None);

        let absent = DecodedField {
            variable: None,
            value: Some("orphan".to_string()),
        };
        assert_eq!(lookup(&[absent], "Make"), None);
    }
}
