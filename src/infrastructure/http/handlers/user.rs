//! User HTTP Handlers - 注册与登录

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{ApplicationError, Login, RegisterUser};
use crate::domain::{FieldError, ValidationErrors};
use crate::infrastructure::http::dto::{CredentialsRequest, RegisterResponse, SessionResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// POST /users - 注册
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        ApiError::UserRejected(ValidationErrors::single(FieldError::malformed(
            "body",
            rejection.body_text(),
        )))
    })?;

    let command = RegisterUser {
        name: req.name,
        password: req.password,
    };

    let user = state
        .register_user_handler
        .handle(command)
        .await
        .map_err(|e| match e {
            ApplicationError::ValidationError(errors) => ApiError::UserRejected(errors),
            other => ApiError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::from(user))))
}

/// POST /sessions - 登录
///
/// 失败时返回 200 `{notFound: true}`，不区分用户不存在与密码错误
pub async fn login(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, ApiError> {
    let Ok(Json(req)) = payload else {
        return Ok(Json(SessionResponse::not_found()));
    };

    let query = Login {
        name: req.name,
        password: req.password,
    };

    let session = state.login_handler.handle(query).await?;

    Ok(Json(SessionResponse::from(session)))
}
