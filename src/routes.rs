use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, handlers,
    services::{PROFILE_PHOTOS_DIR, SCALP_PHOTOS_DIR},
};

pub fn create_router(state: AppState, photo_root: &Path) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/home", get(handlers::get_home_page))
        .route("/api/help-support", get(handlers::help_support))
        .route("/api/register", post(handlers::register))
        .route("/api/login", post(handlers::login))
        .route("/api/logout", post(handlers::logout))
        .route("/api/profile", get(handlers::get_profile))
        .route("/api/profile/photo", post(handlers::upload_profile_photo))
        .route("/api/assessments", post(handlers::create_assessment))
        .route("/api/progress", get(handlers::get_progress))
        .nest_service(
            "/scalp_photos",
            ServeDir::new(photo_root.join(SCALP_PHOTOS_DIR)),
        )
        .nest_service(
            "/profile_photos",
            ServeDir::new(photo_root.join(PROFILE_PHOTOS_DIR)),
        )
        .with_state(state)
}
