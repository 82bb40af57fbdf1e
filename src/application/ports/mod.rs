//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod password_hasher;
mod repositories;

pub use password_hasher::{HashError, PasswordHasherPort};
pub use repositories::{
    GameRecord, GameRepositoryPort, RepositoryError, UserRecord, UserRepositoryPort,
};
