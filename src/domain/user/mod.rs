//! User Context - 用户限界上下文
//!
//! 职责:
//! - 注册信息校验
//! - Access token 生成

mod value_objects;

pub use value_objects::{AccessToken, Registration, ACCESS_TOKEN_BYTES};
