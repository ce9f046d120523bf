mod assessment;
mod home;
mod progress;
mod questionnaire;
mod report;
mod user;

pub use assessment::{Assessment, CreateAssessmentResponse};
pub use home::{HairCareTip, HomeButton, HomePageResponse, NavItem};
pub use progress::{AssessmentSnapshot, ProgressStatus, ProgressVerdict};
pub use questionnaire::{AnswerValue, QuestionnaireAnswers};
pub use report::{Severity, TestReport};
pub use user::{LoginInput, ProfileResponse, RegisterInput, User, UserResponse, UserWithToken};
