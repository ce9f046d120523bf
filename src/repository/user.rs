use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use tracing::instrument;

use crate::models::{RegisterInput, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(name = "db.user.create", skip(self, input, password_hash), fields(email = %input.email))]
    pub async fn create(
        &self,
        input: &RegisterInput,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, password_hash, name, age_range, gender,
                               primary_hair_concern, family_hair_loss_history)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, email, username, password_hash, name, age_range, gender,
                      primary_hair_concern, family_hair_loss_history, profile_photo_url,
                      last_assessment_date, created_at, updated_at
            "#,
        )
        .bind(&input.email)
        .bind(&input.username)
        .bind(password_hash)
        .bind(&input.name)
        .bind(&input.age_range)
        .bind(&input.gender)
        .bind(&input.primary_hair_concern)
        .bind(input.family_hair_loss_history)
        .fetch_one(&self.pool)
        .await
    }

    #[instrument(name = "db.user.find_by_email", skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, name, age_range, gender,
                   primary_hair_concern, family_hair_loss_history, profile_photo_url,
                   last_assessment_date, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }

    #[instrument(name = "db.user.find_by_id", skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, name, age_range, gender,
                   primary_hair_concern, family_hair_loss_history, profile_photo_url,
                   last_assessment_date, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    #[instrument(name = "db.user.exists_by_email", skip(self))]
    pub async fn exists_by_email(&self, email: &str) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1) as exists")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<bool, _>("exists"))
    }

    #[instrument(name = "db.user.set_profile_photo", skip(self))]
    pub async fn set_profile_photo(&self, id: i32, url: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET profile_photo_url = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(url)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    #[instrument(name = "db.user.set_last_assessment_date", skip(self))]
    pub async fn set_last_assessment_date(
        &self,
        id: i32,
        when: OffsetDateTime,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_assessment_date = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(when)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
