//! User Commands

/// 注册用户命令
///
/// 字段保持可选，缺失时由领域层报告校验错误
#[derive(Clone)]
pub struct RegisterUser {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for RegisterUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUser")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
