use itertools::Itertools;

use crate::advisor::ValidationResult;

/// The verdict for one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub name: String,
    #[serde(flatten)]
    pub result: ValidationResult,
}

impl Report {
    pub fn new(name: String, result: ValidationResult) -> Self {
        Self { name, result }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.result.is_valid {
            return write!(f, "{}: valid", self.name);
        }
        write!(
            f,
            "{}: invalid\n{}",
            self.name,
            self.result
                .reasons
                .iter()
                .map(|reason| format!("  - {}", reason))
                .join("\n")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_valid() {
        let report = Report::new("robot".to_owned(), ValidationResult::default());
        assert_eq!(report.to_string(), "robot: valid");
    }

    #[test]
    fn test_display_invalid() {
        let report = Report::new(
            "robot".to_owned(),
            ValidationResult {
                is_valid: false,
                reasons: vec!["First.".to_owned(), "Second.".to_owned()],
            },
        );
        assert_eq!(report.to_string(), "robot: invalid\n  - First.\n  - Second.");
    }

    #[test]
    fn test_json_is_flat() {
        let report = Report::new("robot".to_owned(), ValidationResult::default());
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"name":"robot","isValid":true,"reasons":[]}"#
        );
    }
}
