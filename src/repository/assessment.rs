use sqlx::PgPool;
use sqlx::types::Json;
use tracing::instrument;

use crate::models::{Assessment, TestReport};

#[derive(Clone)]
pub struct AssessmentRepository {
    pool: PgPool,
}

impl AssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "db.assessment.create", skip(self, questionnaire, report))]
    pub async fn create(
        &self,
        owner_id: i32,
        questionnaire: &serde_json::Value,
        scalp_photo_url: &str,
        report: &TestReport,
    ) -> Result<Assessment, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments (owner_id, questionnaire, scalp_photo_url, report)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, questionnaire, scalp_photo_url, report, created_at
            "#,
        )
        .bind(owner_id)
        .bind(questionnaire)
        .bind(scalp_photo_url)
        .bind(Json(report))
        .fetch_one(&self.pool)
        .await
    }

    /// Full history in submission order (oldest first).
    #[instrument(name = "db.assessment.list_by_owner", skip(self))]
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<Assessment>, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, owner_id, questionnaire, scalp_photo_url, report, created_at
            FROM assessments
            WHERE owner_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }

    /// The two most recent assessments, newest first. Returns fewer rows
    /// when the history is shorter.
    #[instrument(name = "db.assessment.latest_two", skip(self))]
    pub async fn latest_two(&self, owner_id: i32) -> Result<Vec<Assessment>, sqlx::Error> {
        sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, owner_id, questionnaire, scalp_photo_url, report, created_at
            FROM assessments
            WHERE owner_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT 2
            "#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
    }
}
