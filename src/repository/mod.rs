mod assessment;
mod user;

pub use assessment::AssessmentRepository;
pub use user::UserRepository;
