//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// 唯一约束冲突，携带冲突字段名
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Game Repository
// ============================================================================

/// 游戏实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub id: Uuid,
    pub directions: String,
    pub question: String,
    pub hint: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Game Repository Port
#[async_trait]
pub trait GameRepositoryPort: Send + Sync {
    /// 保存游戏
    async fn save(&self, game: &GameRecord) -> Result<(), RepositoryError>;

    /// 获取所有游戏（按插入顺序）
    async fn find_all(&self) -> Result<Vec<GameRecord>, RepositoryError>;

    /// 删除游戏，返回是否有记录被删除
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

// ============================================================================
// User Repository
// ============================================================================

/// 用户实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    /// argon2 PHC 格式哈希
    pub password_hash: String,
    pub access_token: String,
    pub created_at: DateTime<Utc>,
}

/// User Repository Port
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// 插入新用户，name 冲突时返回 `RepositoryError::Duplicate("name")`
    async fn insert(&self, user: &UserRecord) -> Result<(), RepositoryError>;

    /// 根据用户名查找
    async fn find_by_name(&self, name: &str) -> Result<Option<UserRecord>, RepositoryError>;

    /// 根据 access token 查找
    async fn find_by_access_token(
        &self,
        token: &str,
    ) -> Result<Option<UserRecord>, RepositoryError>;
}
