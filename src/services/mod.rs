mod assessment;
mod auth;
mod photos;
pub mod progress;
pub mod report;

pub use assessment::AssessmentService;
pub use auth::AuthService;
pub use photos::{PROFILE_PHOTOS_DIR, PhotoStore, PhotoUpload, SCALP_PHOTOS_DIR};
