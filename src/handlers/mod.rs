mod assessment;
mod auth;
mod health;
mod home;
mod profile;

pub use assessment::{create_assessment, get_progress};
pub use auth::{login, logout, register};
pub use health::health_check;
pub use home::{get_home_page, help_support};
pub use profile::{get_profile, upload_profile_photo};
