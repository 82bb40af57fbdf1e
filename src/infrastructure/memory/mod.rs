//! Memory Layer - In-Memory Persistence
//!
//! Game / User 仓储的内存实现，用于 `database.backend = "memory"` 与测试

mod game_repo;
mod user_repo;

pub use game_repo::InMemoryGameRepository;
pub use user_repo::InMemoryUserRepository;
