use serde::Serialize;
use sqlx::FromRow;
use sqlx::types::Json;
use time::OffsetDateTime;

use super::TestReport;

/// One submitted assessment: the raw questionnaire, the stored scalp photo
/// and the report generated for it. Append-only per owner, ordered by
/// `created_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assessment {
    pub id: i32,
    pub owner_id: i32,
    pub questionnaire: serde_json::Value,
    pub scalp_photo_url: String,
    pub report: Json<TestReport>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct CreateAssessmentResponse {
    pub message: String,
    pub analysis: TestReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;
    use time::macros::datetime;

    #[test]
    fn test_assessment_serializes_report_inline() {
        let assessment = Assessment {
            id: 1,
            owner_id: 7,
            questionnaire: serde_json::json!({"answers": {}}),
            scalp_photo_url: "/scalp_photos/photo.jpg".to_string(),
            report: Json(TestReport {
                severity: Severity::Moderate,
                key_findings: vec!["No significant inflammation or redness was detected.".to_string()],
                diagnosis: "General hair health analysis.".to_string(),
                recommendations: vec![
                    "Stay hydrated by drinking an adequate amount of water throughout the day.".to_string(),
                ],
                score: 55,
            }),
            created_at: datetime!(2024-03-01 09:00:00 UTC),
        };

        let json = serde_json::to_value(&assessment).expect("serialization should succeed");
        assert_eq!(json["report"]["score"], 55);
        assert_eq!(json["report"]["severity"], "Moderate");
        assert_eq!(json["scalp_photo_url"], "/scalp_photos/photo.jpg");
        assert_eq!(json["created_at"], "2024-03-01T09:00:00Z");
    }
}
