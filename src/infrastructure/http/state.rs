//! Application State
//!
//! 持有所有端口和 Command/Query Handlers，通过 `Arc<AppState>` 显式注入每个路由

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateGameHandler, DeleteGameHandler, RegisterUserHandler,
    // Query handlers
    AuthenticateTokenHandler, GetRandomGameHandler, ListGamesHandler, LoginHandler,
    // Ports
    GameRepositoryPort, PasswordHasherPort, UserRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub game_repo: Arc<dyn GameRepositoryPort>,
    pub user_repo: Arc<dyn UserRepositoryPort>,
    pub password_hasher: Arc<dyn PasswordHasherPort>,

    // ========== Command Handlers ==========
    pub create_game_handler: CreateGameHandler,
    pub delete_game_handler: DeleteGameHandler,
    pub register_user_handler: RegisterUserHandler,

    // ========== Query Handlers ==========
    pub get_random_game_handler: GetRandomGameHandler,
    pub list_games_handler: ListGamesHandler,
    pub login_handler: LoginHandler,
    pub authenticate_token_handler: AuthenticateTokenHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        game_repo: Arc<dyn GameRepositoryPort>,
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
    ) -> Self {
        Self {
            // Ports
            game_repo: game_repo.clone(),
            user_repo: user_repo.clone(),
            password_hasher: password_hasher.clone(),

            // Command handlers
            create_game_handler: CreateGameHandler::new(game_repo.clone()),
            delete_game_handler: DeleteGameHandler::new(game_repo.clone()),
            register_user_handler: RegisterUserHandler::new(
                user_repo.clone(),
                password_hasher.clone(),
            ),

            // Query handlers
            get_random_game_handler: GetRandomGameHandler::new(game_repo.clone()),
            list_games_handler: ListGamesHandler::new(game_repo),
            login_handler: LoginHandler::new(user_repo.clone(), password_hasher),
            authenticate_token_handler: AuthenticateTokenHandler::new(user_repo),
        }
    }
}
