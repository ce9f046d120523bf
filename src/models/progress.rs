use serde::Serialize;
use time::OffsetDateTime;

/// Two-point progress verdict over a user's two most recent assessments.
/// Derived on each query, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressVerdict {
    pub latest_assessment: AssessmentSnapshot,
    pub previous_assessment: AssessmentSnapshot,
    pub progress_status: ProgressStatus,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AssessmentSnapshot {
    pub score: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

/// A tie in scores counts as non-improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgressStatus {
    #[serde(rename = "good")]
    Improved,
    #[serde(rename = "weak")]
    Declined,
}
