use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{
        CreateAssessmentResponse, ProfileResponse, ProgressVerdict, QuestionnaireAnswers, User,
    },
    repository::{AssessmentRepository, UserRepository},
    services::{PhotoStore, PhotoUpload, progress, report},
    telemetry::{ASSESSMENTS_CREATED, PHOTOS_UPLOADED, PROGRESS_QUERIES},
};

#[derive(Clone)]
pub struct AssessmentService {
    assessment_repo: AssessmentRepository,
    user_repo: UserRepository,
    photos: PhotoStore,
}

impl AssessmentService {
    pub fn new(
        assessment_repo: AssessmentRepository,
        user_repo: UserRepository,
        photos: PhotoStore,
    ) -> Self {
        Self {
            assessment_repo,
            user_repo,
            photos,
        }
    }

    /// Stores the scalp photo, runs report synthesis over the submitted
    /// answers and persists the assessment. The report is embedded verbatim
    /// in the response as `analysis`.
    #[instrument(name = "assessment.create", skip(self, user, photo, questionnaire), fields(owner_id = user.id))]
    pub async fn create(
        &self,
        user: &User,
        photo: PhotoUpload,
        questionnaire: serde_json::Value,
    ) -> AppResult<CreateAssessmentResponse> {
        let scalp_photo_url = self.photos.store_scalp_photo(&photo).await?;

        let answers = QuestionnaireAnswers::from_submission(&questionnaire);
        let mut rng = fastrand::Rng::new();
        let analysis = report::synthesize(&answers, &mut rng);

        let assessment = self
            .assessment_repo
            .create(user.id, &questionnaire, &scalp_photo_url, &analysis)
            .await?;

        self.user_repo
            .set_last_assessment_date(user.id, assessment.created_at)
            .await?;

        ASSESSMENTS_CREATED.add(1, &[]);

        tracing::info!(
            assessment_id = assessment.id,
            score = analysis.score,
            "Assessment created"
        );

        Ok(CreateAssessmentResponse {
            message: "Assessment created successfully".to_string(),
            analysis,
        })
    }

    /// Two-point progress over the user's history. Rejects before comparison
    /// when fewer than two assessments exist.
    #[instrument(name = "assessment.progress", skip(self))]
    pub async fn progress(&self, user_id: i32) -> AppResult<ProgressVerdict> {
        let recent = self.assessment_repo.latest_two(user_id).await?;

        if recent.len() < progress::MIN_HISTORY_LEN {
            return Err(AppError::NotFound(
                "Not enough data to track progress. Complete at least two assessments.".to_string(),
            ));
        }

        let verdict = progress::compare(&recent[0], &recent[1]);

        PROGRESS_QUERIES.add(1, &[]);

        tracing::info!(
            latest_score = verdict.latest_assessment.score,
            previous_score = verdict.previous_assessment.score,
            "Progress computed"
        );

        Ok(verdict)
    }

    #[instrument(name = "assessment.profile", skip(self, user), fields(user_id = user.id))]
    pub async fn profile(&self, user: &User) -> AppResult<ProfileResponse> {
        let assessments = self.assessment_repo.list_by_owner(user.id).await?;

        let current_hair_health_score = assessments.last().map(|a| a.report.score);

        Ok(ProfileResponse {
            name: user.name.clone(),
            email: user.email.clone(),
            profile_photo_url: user.profile_photo_url.clone(),
            assessments_count: assessments.len(),
            last_assessment_date: user.last_assessment_date,
            assessments,
            current_hair_health_score,
        })
    }

    #[instrument(name = "assessment.set_profile_photo", skip(self, user, photo), fields(user_id = user.id))]
    pub async fn set_profile_photo(&self, user: &User, photo: PhotoUpload) -> AppResult<String> {
        let url = self.photos.store_profile_photo(&photo).await?;

        self.user_repo.set_profile_photo(user.id, &url).await?;

        PHOTOS_UPLOADED.add(1, &[]);

        tracing::info!(url = %url, "Profile photo updated");

        Ok(url)
    }
}
