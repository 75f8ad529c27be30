use crate::users::repo_types::{NewUser, User};
use sqlx::PgPool;
use thiserror::Error;

/// Failure modes of the registration insert. A duplicate email is a handled
/// user error; anything else is an infrastructure fault.
#[derive(Debug, Error)]
pub enum CreateUserError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl CreateUserError {
    fn from_sqlx(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::DuplicateEmail,
            other => Self::Database(other),
        }
    }
}

impl User {
    /// Insert a new user row inside its own transaction: either the full row
    /// commits or nothing becomes visible. The unique constraint on `email`
    /// is surfaced as [`CreateUserError::DuplicateEmail`] at this boundary.
    pub async fn create(db: &PgPool, new: &NewUser) -> Result<User, CreateUserError> {
        let mut tx = db.begin().await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, roles, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, roles, created_at, updated_at
            "#,
        )
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(&new.roles)
        .bind(new.created_at)
        .bind(new.updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(CreateUserError::from_sqlx)?;
        tx.commit().await?;
        Ok(user)
    }
}
