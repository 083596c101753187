use axum::{Extension, Json};

use crate::models::user::{CurrentUser, UserResponse};

/// Returns the caller described by the verified access token. The frontend
/// uses this as its session check.
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<UserResponse> {
    Json(user.into())
}
