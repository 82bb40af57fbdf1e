//! HTTP Error Handling
//!
//! 每种错误对应固定的响应体结构，内部错误细节只写日志不返回给客户端

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::ValidationErrors;

use super::dto::SuccessResponse;

/// 创建游戏失败时的提示
pub const GAME_REJECTED_MESSAGE: &str = "Please fill out all boxes to build the game";

/// 注册失败时的提示
pub const USER_REJECTED_MESSAGE: &str = "Could not create user";

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct GameRejectedBody {
    message: &'static str,
    error: ValidationErrors,
}

#[derive(Debug, Serialize)]
struct UserRejectedBody {
    message: &'static str,
    errors: ValidationErrors,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoggedOutBody {
    logged_out: bool,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 400 `{message, error}`
    GameRejected(ValidationErrors),
    /// 400 `{message, errors}`
    UserRejected(ValidationErrors),
    /// 400 `{success: false}`
    DeleteFailed,
    /// 400 `{message}`
    BadRequest(String),
    /// 401 `{loggedOut: true}`
    LoggedOut,
    /// 404 `{message}`
    NotFound(String),
    /// 500 `{message}`
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::GameRejected(errors) => {
                tracing::warn!(error = %errors, "Game rejected");
                let body = GameRejectedBody {
                    message: GAME_REJECTED_MESSAGE,
                    error: errors,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::UserRejected(errors) => {
                tracing::warn!(error = %errors, "User rejected");
                let body = UserRejectedBody {
                    message: USER_REJECTED_MESSAGE,
                    errors,
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::DeleteFailed => {
                (StatusCode::BAD_REQUEST, Json(SuccessResponse { success: false })).into_response()
            }
            ApiError::BadRequest(message) => {
                tracing::warn!(error = %message, "Bad request");
                (StatusCode::BAD_REQUEST, Json(MessageBody { message })).into_response()
            }
            ApiError::LoggedOut => {
                (StatusCode::UNAUTHORIZED, Json(LoggedOutBody { logged_out: true })).into_response()
            }
            ApiError::NotFound(message) => {
                tracing::warn!(error = %message, "Resource not found");
                (StatusCode::NOT_FOUND, Json(MessageBody { message })).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal server error");
                let body = MessageBody {
                    message: "Internal server error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound(resource) => {
                ApiError::NotFound(format!("{} not found", resource))
            }
            ApplicationError::ValidationError(errors) => ApiError::BadRequest(errors.to_string()),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
            ApplicationError::HashingError(msg) => ApiError::Internal(msg),
        }
    }
}
