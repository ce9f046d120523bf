use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;

use super::Assessment;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub age_range: String,
    pub gender: String,
    pub primary_hair_concern: String,
    pub family_hair_loss_history: bool,
    pub profile_photo_url: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_assessment_date: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub primary_hair_concern: String,
    #[serde(default)]
    pub family_hair_loss_history: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserWithToken,
}

#[derive(Debug, Serialize)]
pub struct UserWithToken {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub name: String,
    pub token: String,
}

impl UserWithToken {
    pub fn from_user(user: &User, token: String) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            token,
        }
    }
}

/// Profile payload: identity plus the full assessment history and the score
/// of the latest report, when there is one.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    pub profile_photo_url: Option<String>,
    pub assessments_count: usize,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_assessment_date: Option<OffsetDateTime>,
    pub assessments: Vec<Assessment>,
    pub current_hair_health_score: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn create_test_user() -> User {
        User {
            id: 1,
            email: "test@example.com".to_string(),
            username: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            name: "Test User".to_string(),
            age_range: "18-40".to_string(),
            gender: "Male".to_string(),
            primary_hair_concern: "Hair loss".to_string(),
            family_hair_loss_history: true,
            profile_photo_url: None,
            last_assessment_date: None,
            created_at: datetime!(2024-01-15 10:30:00 UTC),
            updated_at: datetime!(2024-01-16 15:45:00 UTC),
        }
    }

    #[test]
    fn test_user_with_token_from_user() {
        let user = create_test_user();
        let token = "jwt_token_here".to_string();

        let user_with_token = UserWithToken::from_user(&user, token.clone());

        assert_eq!(user_with_token.id, user.id);
        assert_eq!(user_with_token.email, user.email);
        assert_eq!(user_with_token.username, user.username);
        assert_eq!(user_with_token.name, user.name);
        assert_eq!(user_with_token.token, token);
    }

    #[test]
    fn test_user_serialization_excludes_password() {
        let user = create_test_user();
        let json = serde_json::to_string(&user).expect("serialization should succeed");

        assert!(json.contains("\"email\":\"test@example.com\""));
        assert!(json.contains("\"family_hair_loss_history\":true"));
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("hashed_password"));
    }

    #[test]
    fn test_register_input_deserialization() {
        let json = r#"{
            "email": "new@example.com",
            "username": "new@example.com",
            "password": "secret123",
            "name": "New User",
            "age_range": "18-40",
            "gender": "Female",
            "primary_hair_concern": "Dandruff",
            "family_hair_loss_history": false
        }"#;
        let input: RegisterInput =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(input.email, "new@example.com");
        assert_eq!(input.password, "secret123");
        assert_eq!(input.primary_hair_concern, "Dandruff");
        assert!(!input.family_hair_loss_history);
    }

    #[test]
    fn test_register_input_profile_fields_default() {
        let json = r#"{"email": "new@example.com", "username": "new", "password": "secret123", "name": "New User"}"#;
        let input: RegisterInput =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(input.age_range, "");
        assert!(!input.family_hair_loss_history);
    }

    #[test]
    fn test_profile_response_serialization() {
        let user = create_test_user();
        let profile = ProfileResponse {
            name: user.name.clone(),
            email: user.email.clone(),
            profile_photo_url: user.profile_photo_url.clone(),
            assessments_count: 0,
            last_assessment_date: None,
            assessments: vec![],
            current_hair_health_score: None,
        };

        let json = serde_json::to_value(&profile).expect("serialization should succeed");
        assert_eq!(json["assessments_count"], 0);
        assert_eq!(json["current_hair_health_score"], serde_json::Value::Null);
        assert_eq!(json["email"], "test@example.com");
    }
}
