use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    middleware::AuthUser,
    models::{CreateAssessmentResponse, ProgressVerdict},
    services::PhotoUpload,
};

/// Multipart submission: a `file` part carrying the scalp photo and a
/// `questionnaire` part carrying the answers as a JSON document.
pub async fn create_assessment(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<CreateAssessmentResponse>)> {
    let user = state.auth_service.get_user(user_id).await?;

    let mut photo: Option<PhotoUpload> = None;
    let mut questionnaire: Option<serde_json::Value> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("scalp_photo.jpg").to_string();
                photo = Some(PhotoUpload {
                    file_name,
                    data: field.bytes().await?,
                });
            }
            "questionnaire" => {
                let raw = field.text().await?;
                questionnaire = Some(serde_json::from_str(&raw).map_err(|e| {
                    AppError::Validation(format!("Invalid questionnaire payload: {e}"))
                })?);
            }
            _ => {}
        }
    }

    let photo = photo.ok_or_else(|| AppError::Validation("Missing scalp photo".to_string()))?;
    let questionnaire =
        questionnaire.ok_or_else(|| AppError::Validation("Missing questionnaire".to_string()))?;

    let response = state
        .assessment_service
        .create(&user, photo, questionnaire)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProgressVerdict>> {
    let verdict = state.assessment_service.progress(user_id).await?;

    Ok(Json(verdict))
}
