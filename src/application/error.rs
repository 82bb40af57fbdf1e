//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::ValidationErrors;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 字段校验失败
    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 密码哈希错误
    #[error("Hashing error: {0}")]
    HashingError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound(resource_type)
    }

    /// 创建验证错误
    pub fn validation(errors: ValidationErrors) -> Self {
        Self::ValidationError(errors)
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<crate::application::ports::HashError> for ApplicationError {
    fn from(err: crate::application::ports::HashError) -> Self {
        Self::HashingError(err.to_string())
    }
}
