//! HTTP Routes
//!
//! API Endpoints:
//! - /             GET     欢迎文本
//! - /games        GET     随机一个游戏
//! - /games/:id    DELETE  删除游戏
//! - /gamesarray   GET     所有游戏
//! - /gamesarray   POST    创建游戏
//! - /users        POST    注册
//! - /sessions     POST    登录
//! - /secrets      GET     需要 access token

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::middleware::require_access_token;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::greeting))
        .merge(game_routes())
        .merge(user_routes())
        .route(
            "/secrets",
            get(handlers::get_secret)
                .route_layer(middleware::from_fn_with_state(state, require_access_token)),
        )
}

/// Game 路由
fn game_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/games", get(handlers::get_random_game))
        .route("/games/:id", delete(handlers::delete_game))
        .route(
            "/gamesarray",
            get(handlers::list_games).post(handlers::create_game),
        )
}

/// User 路由
fn user_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", post(handlers::register_user))
        .route("/sessions", post(handlers::login))
}
