use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Role granted to every account at registration.
pub const DEFAULT_ROLE: &str = "ROLE_USER";

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, never the plaintext, not exposed in JSON
    pub roles: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime, // equals created_at until the row is modified
}

/// A user row not yet persisted, carrying everything the insert needs.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub roles: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl NewUser {
    /// Build a registration row: default role, both timestamps set to the
    /// same instant. Expects an already-normalized email and a computed hash.
    pub fn new(email: &str, password_hash: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            roles: vec![DEFAULT_ROLE.to_owned()],
            created_at: now,
            updated_at: now,
        }
    }
}
