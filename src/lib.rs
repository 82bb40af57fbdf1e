//! Riddler - 谜题游戏 REST 后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Game Context: 谜题内容与必填校验
//! - User Context: 注册信息与 access token
//!
//! 应用层 (application/):
//! - Ports: 端口定义（GameRepository, UserRepository, PasswordHasher）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + token 鉴权中间件
//! - Persistence: SQLite 存储
//! - Memory: 内存存储
//! - Adapters: Argon2 密码哈希

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
