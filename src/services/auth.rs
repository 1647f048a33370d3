//! Account service — signup, login, and password hashing.
//!
//! DESIGN
//! ======
//! Email-and-password accounts with Argon2 hashes. Banned accounts are
//! refused at login, and the session extractor refuses them on every request
//! after that, so the board core never has to reason about bans.

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("{0}")]
    Validation(String),
    #[error("email already registered")]
    EmailTaken,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("account is banned")]
    Banned,
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Signup request after route-level deserialization.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub username: Option<String>,
    pub password: String,
}

const MIN_PASSWORD_LEN: usize = 8;

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

#[must_use]
pub fn normalize_username(username: &str) -> Option<String> {
    let normalized = username.trim().to_ascii_lowercase();
    if normalized.is_empty()
        || !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(normalized)
}

/// Hash a password with Argon2 and a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::Hash` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Hash(e.to_string()))
}

/// Verify a password against a stored Argon2 hash. An unparseable hash
/// verifies as false rather than erroring.
#[must_use]
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Register a new account. Returns the new user's ID.
///
/// # Errors
///
/// `InvalidEmail`/`Validation` for malformed input, `EmailTaken`/
/// `UsernameTaken` on uniqueness conflicts, or a database error.
pub async fn signup(pool: &PgPool, new_user: &NewUser) -> Result<Uuid, AuthError> {
    let email = normalize_email(&new_user.email).ok_or(AuthError::InvalidEmail)?;

    let name = new_user.name.trim();
    if name.is_empty() {
        return Err(AuthError::Validation("name must not be empty".into()));
    }
    if new_user.password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    let username = match new_user.username.as_deref() {
        Some(raw) => Some(normalize_username(raw).ok_or_else(|| {
            AuthError::Validation("username may contain only letters, digits, '_' and '-'".into())
        })?),
        None => None,
    };

    let password_hash = hash_password(&new_user.password)?;

    let row = sqlx::query(
        r"INSERT INTO users (name, email, username, password_hash)
          VALUES ($1, $2, $3, $4)
          ON CONFLICT DO NOTHING
          RETURNING id",
    )
    .bind(name)
    .bind(&email)
    .bind(&username)
    .bind(&password_hash)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(r) => Ok(r.get("id")),
        // The insert hit a unique constraint; report which one.
        None => {
            let email_exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(&email)
                .fetch_one(pool)
                .await?;
            if email_exists {
                Err(AuthError::EmailTaken)
            } else {
                Err(AuthError::UsernameTaken)
            }
        }
    }
}

/// Verify credentials and return the account ID.
///
/// # Errors
///
/// `InvalidCredentials` for an unknown email or wrong password (the two are
/// deliberately indistinguishable), `Banned` for a banned account, or a
/// database error.
pub async fn login(pool: &PgPool, email: &str, password: &str) -> Result<Uuid, AuthError> {
    let email = normalize_email(email).ok_or(AuthError::InvalidCredentials)?;

    let row = sqlx::query("SELECT id, password_hash, banned FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Err(AuthError::InvalidCredentials);
    };

    let stored_hash: String = row.get("password_hash");
    if !verify_password(password, &stored_hash) {
        return Err(AuthError::InvalidCredentials);
    }
    if row.get::<bool, _>("banned") {
        return Err(AuthError::Banned);
    }

    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
