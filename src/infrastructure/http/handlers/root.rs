//! Root Handler
//!
//! 欢迎文本，同时可用作健康检查

/// 根路径返回的文本
pub const GREETING: &str = "Hello Final project! 😍 ";

/// GET /
pub async fn greeting() -> &'static str {
    GREETING
}
