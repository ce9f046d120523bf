use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::{
    AppState,
    error::AppResult,
    models::{LoginInput, RegisterInput, UserResponse},
};

pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.auth_service.register(input).await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<UserResponse>> {
    let user = state.auth_service.login(input).await?;

    Ok(Json(UserResponse { user }))
}

/// Tokens are stateless; logout is an acknowledgment for the client.
pub async fn logout() -> Json<Value> {
    Json(json!({ "message": "Logout successful" }))
}
