//! Password Hasher Port - 密码哈希抽象
//!
//! 单向加盐哈希，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 哈希错误
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Failed to hash password: {0}")]
    HashFailed(String),

    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),

    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

/// Password Hasher Port
#[async_trait]
pub trait PasswordHasherPort: Send + Sync {
    /// 生成加盐哈希
    async fn hash(&self, password: &str) -> Result<String, HashError>;

    /// 校验明文密码与存储的哈希是否匹配
    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError>;
}
