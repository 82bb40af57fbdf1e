//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository、PasswordHasher）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Game commands
    CreateGame,
    DeleteGame,
    // User commands
    RegisterUser,
    // Handlers
    handlers::{CreateGameHandler, DeleteGameHandler, RegisterUserHandler, RegisteredUser},
};

pub use error::ApplicationError;

pub use ports::{
    // Password hasher
    HashError,
    PasswordHasherPort,
    // Repositories
    GameRecord,
    GameRepositoryPort,
    RepositoryError,
    UserRecord,
    UserRepositoryPort,
};

pub use queries::{
    // Game queries
    GetRandomGame,
    ListGames,
    // User queries
    AuthenticateToken,
    Login,
    // Handlers
    handlers::{
        AuthenticateTokenHandler, AuthenticatedUser, GameView, GetRandomGameHandler,
        ListGamesHandler, LoginHandler, SessionView,
    },
};
