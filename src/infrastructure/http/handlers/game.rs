//! Game HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::{
    ApplicationError, CreateGame, DeleteGame, GetRandomGame, ListGames,
};
use crate::domain::game::GameDraft;
use crate::domain::{FieldError, ValidationErrors};
use crate::infrastructure::http::dto::{GameDto, SuccessResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /games - 随机返回一个游戏
pub async fn get_random_game(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GameDto>, ApiError> {
    let game = state.get_random_game_handler.handle(GetRandomGame).await?;
    Ok(Json(GameDto::from(game)))
}

/// GET /gamesarray - 所有游戏
pub async fn list_games(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GameDto>>, ApiError> {
    let games = state.list_games_handler.handle(ListGames).await?;
    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}

/// POST /gamesarray - 创建游戏
pub async fn create_game(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GameDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<GameDto>), ApiError> {
    let Json(draft) = payload.map_err(|rejection| {
        ApiError::GameRejected(ValidationErrors::single(FieldError::malformed(
            "body",
            rejection.body_text(),
        )))
    })?;

    let game = state
        .create_game_handler
        .handle(CreateGame { draft })
        .await
        .map_err(|e| match e {
            ApplicationError::ValidationError(errors) => ApiError::GameRejected(errors),
            other => ApiError::from(other),
        })?;

    Ok((StatusCode::CREATED, Json(GameDto::from(game))))
}

/// DELETE /games/:id
///
/// 不存在的 id 也返回 `{success: true}`；id 非法或存储出错返回 400 `{success: false}`
pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let game_id = Uuid::parse_str(&id).map_err(|e| {
        tracing::error!(id = %id, error = %e, "Failed to delete game: invalid id");
        ApiError::DeleteFailed
    })?;

    state
        .delete_game_handler
        .handle(DeleteGame { game_id })
        .await
        .map_err(|e| {
            tracing::error!(game_id = %game_id, error = %e, "Failed to delete game");
            ApiError::DeleteFailed
        })?;

    Ok(Json(SuccessResponse { success: true }))
}
