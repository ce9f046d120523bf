use axum::{
    Json,
    extract::{Multipart, State},
};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::{AppError, AppResult},
    middleware::AuthUser,
    models::ProfileResponse,
    services::PhotoUpload,
};

pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = state.auth_service.get_user(user_id).await?;
    let profile = state.assessment_service.profile(&user).await?;

    Ok(Json(profile))
}

pub async fn upload_profile_photo(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    mut multipart: Multipart,
) -> AppResult<Json<Value>> {
    let user = state.auth_service.get_user(user_id).await?;

    let mut photo: Option<PhotoUpload> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            let file_name = field.file_name().unwrap_or("profile_photo.jpg").to_string();
            photo = Some(PhotoUpload {
                file_name,
                data: field.bytes().await?,
            });
        }
    }

    let photo = photo.ok_or_else(|| AppError::Validation("Missing profile photo".to_string()))?;

    let file_path = state.assessment_service.set_profile_photo(&user, photo).await?;

    Ok(Json(json!({
        "message": "Profile photo uploaded successfully",
        "file_path": file_path,
    })))
}
