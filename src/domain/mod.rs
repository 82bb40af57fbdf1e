//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Game Context: 谜题游戏内容
//! - User Context: 注册与访问令牌

pub mod game;
pub mod user;

// 共享的字段校验错误
mod validation;

pub use validation::{FieldError, ValidationErrors};
