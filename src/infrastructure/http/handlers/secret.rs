//! Secret Handler
//!
//! 仅在 `require_access_token` 中间件放行后执行

use axum::{Extension, Json};

use crate::application::AuthenticatedUser;
use crate::infrastructure::http::dto::SecretResponse;

/// GET /secrets
pub async fn get_secret(Extension(user): Extension<AuthenticatedUser>) -> Json<SecretResponse> {
    tracing::debug!(user_id = %user.id, name = %user.name, "Secret requested");

    Json(SecretResponse {
        secret: "Hello secret message",
    })
}
