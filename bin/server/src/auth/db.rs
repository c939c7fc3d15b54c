//! Database repositories for users and sessions.

use chrono::{DateTime, Utc};
use pdf_remediation_core::UserId;
use pdf_remediation_platform_access::{OidcClaims, Session, SessionId, User};
use sqlx::{FromRow, PgPool};
use std::str::FromStr;

/// Row type for user queries.
#[derive(FromRow)]
struct UserRow {
    id: String,
    subject: String,
    issuer: String,
    email: Option<String>,
    display_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, sqlx::Error> {
        let id = parse_user_id(&self.id)?;
        Ok(User::with_all_fields(
            id,
            self.subject,
            self.issuer,
            self.email,
            self.display_name,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// Row type for session queries.
#[derive(FromRow)]
struct SessionRow {
    id: String,
    user_id: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl SessionRow {
    fn try_into_session(self) -> Result<Session, sqlx::Error> {
        let user_id = parse_user_id(&self.user_id)?;
        Ok(Session::with_all_fields(
            SessionId::new(self.id),
            user_id,
            self.created_at,
            self.expires_at,
            self.access_token,
            self.refresh_token,
        ))
    }
}

fn parse_user_id(raw: &str) -> Result<UserId, sqlx::Error> {
    UserId::from_str(raw).map_err(|e| {
        sqlx::Error::Decode(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("invalid user id '{}': {}", raw, e),
        )))
    })
}

/// Repository for user operations.
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Finds a user by their internal ID.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<User>, sqlx::Error> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, subject, issuer, email, display_name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::try_into_user).transpose()
    }

    /// Creates the user on first sign-in, otherwise refreshes their profile.
    ///
    /// Concurrent first sign-ins for the same `(subject, issuer)` converge on
    /// one row.
    pub async fn upsert_from_claims(&self, claims: &OidcClaims) -> Result<User, sqlx::Error> {
        let candidate = user_from_claims(claims);

        let row: UserRow = sqlx::query_as(UPSERT_USER_SQL)
            .bind(candidate.id().to_string())
            .bind(candidate.subject())
            .bind(candidate.issuer())
            .bind(candidate.email())
            .bind(candidate.display_name())
            .bind(candidate.created_at())
            .bind(candidate.updated_at())
            .fetch_one(&self.pool)
            .await?;

        let user = row.try_into_user()?;
        if user.id() == candidate.id() {
            tracing::info!(user_id = %user.id(), "Created user on first sign-in");
        }
        Ok(user)
    }
}

/// Inserts a user or, when `(subject, issuer)` already exists, refreshes the
/// profile columns and keeps the stored ID and creation time.
const UPSERT_USER_SQL: &str = r#"
    INSERT INTO users (id, subject, issuer, email, display_name, created_at, updated_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    ON CONFLICT (subject, issuer) DO UPDATE
    SET email = EXCLUDED.email,
        display_name = EXCLUDED.display_name,
        updated_at = EXCLUDED.updated_at
    RETURNING id, subject, issuer, email, display_name, created_at, updated_at
"#;

/// Builds the row to insert for a first sign-in.
fn user_from_claims(claims: &OidcClaims) -> User {
    let mut user = User::new(claims.subject.clone(), claims.issuer.clone());
    user.apply_claims(claims);
    user
}

/// Repository for session operations.
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, sqlx::Error> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, created_at, expires_at, access_token, refresh_token
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(SessionRow::try_into_session).transpose()
    }

    pub async fn create(&self, session: &Session) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO sessions (id, user_id, created_at, expires_at, access_token, refresh_token)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(session.id().as_str())
        .bind(session.user_id().to_string())
        .bind(session.created_at())
        .bind(session.expires_at())
        .bind(session.access_token())
        .bind(session.refresh_token())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes a session by ID (logout).
    pub async fn delete(&self, id: &SessionId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Deletes expired sessions, returning how many were removed.
    pub async fn delete_expired(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Generates a unique session ID using ULID.
pub fn generate_session_id() -> SessionId {
    SessionId::new(ulid::Ulid::new().to_string())
}
