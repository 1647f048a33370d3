//! User profile and avatar routes.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use sqlx::Row;
use uuid::Uuid;

use super::auth::AuthUser;
use crate::services::storage::StoredBlob;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub username: Option<String>,
    pub image_url: Option<String>,
    pub member_since: Option<String>,
    pub stats: UserStats,
}

#[derive(Serialize)]
pub struct UserStats {
    pub boards_owned: i64,
    pub boards_editing: i64,
}

/// `GET /api/users/:id/profile` — return user info with board counts.
pub async fn user_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserProfile>, StatusCode> {
    let user_row = sqlx::query(
        r"SELECT id, name, username, image_url,
                 to_char(created_at, 'YYYY-MM-DD') AS member_since
          FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(&state.pool)
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
    .ok_or(StatusCode::NOT_FOUND)?;

    let boards_owned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE author_id = $1")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let boards_editing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards WHERE editors @> ARRAY[$1]")
        .bind(user_id)
        .fetch_one(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(UserProfile {
        id: user_row.get("id"),
        name: user_row.get("name"),
        username: user_row.get("username"),
        image_url: user_row.get("image_url"),
        member_since: user_row.get("member_since"),
        stats: UserStats { boards_owned, boards_editing },
    }))
}

/// `POST /api/users/avatar` — upload a profile image through the blob store
/// and record its public URL on the caller's account.
pub async fn upload_avatar(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<StoredBlob>, StatusCode> {
    let field = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .ok_or(StatusCode::BAD_REQUEST)?;

    let filename = field.file_name().unwrap_or("avatar").to_owned();
    let content_type = field.content_type().unwrap_or("application/octet-stream").to_owned();
    let data = field
        .bytes()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
        .to_vec();

    let blob = state
        .storage
        .upload(&filename, &content_type, data)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, caller = %auth.user.id, "avatar upload rejected");
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        })?;

    sqlx::query("UPDATE users SET image_url = $2 WHERE id = $1")
        .bind(auth.user.id)
        .bind(&blob.public_url)
        .execute(&state.pool)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    Ok(Json(blob))
}
