use serde::{Deserialize, Serialize};

/// Severity bracket of a generated report, derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Brackets are half-open: 50 and 70 are inclusive lower bounds.
    pub fn from_score(score: i32) -> Self {
        if score < 50 {
            Severity::Severe
        } else if score < 70 {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }
}

/// Analysis report produced once per assessment submission and embedded
/// verbatim in the response payload and the persisted assessment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestReport {
    pub severity: Severity,
    pub key_findings: Vec<String>,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub score: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_brackets() {
        assert_eq!(Severity::from_score(30), Severity::Severe);
        assert_eq!(Severity::from_score(49), Severity::Severe);
        assert_eq!(Severity::from_score(50), Severity::Moderate);
        assert_eq!(Severity::from_score(69), Severity::Moderate);
        assert_eq!(Severity::from_score(70), Severity::Mild);
        assert_eq!(Severity::from_score(80), Severity::Mild);
    }

    #[test]
    fn test_severity_serializes_as_capitalized_string() {
        assert_eq!(
            serde_json::to_string(&Severity::Moderate).expect("serialization should succeed"),
            "\"Moderate\""
        );
    }

    #[test]
    fn test_report_serialization_keys() {
        let report = TestReport {
            severity: Severity::Mild,
            key_findings: vec!["Scalp oiliness is within a normal range.".to_string()],
            diagnosis: "General hair health analysis.".to_string(),
            recommendations: vec!["A weekly deep conditioning treatment could improve hair moisture.".to_string()],
            score: 72,
        };

        let json = serde_json::to_value(&report).expect("serialization should succeed");
        assert_eq!(json["severity"], "Mild");
        assert_eq!(json["score"], 72);
        assert!(json["key_findings"].is_array());
        assert!(json["recommendations"].is_array());
        assert!(json["diagnosis"].is_string());
    }

    #[test]
    fn test_report_score_defaults_to_zero_when_absent() {
        let json = r#"{
            "severity": "Severe",
            "key_findings": [],
            "diagnosis": "General hair health analysis.",
            "recommendations": []
        }"#;

        let report: TestReport = serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(report.score, 0);
    }
}
