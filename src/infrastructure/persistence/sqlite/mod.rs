//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod game_repo;
mod user_repo;

pub use database::*;
pub use game_repo::*;
pub use user_repo::*;
