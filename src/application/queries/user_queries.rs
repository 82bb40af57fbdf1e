//! User Queries

/// 用户名密码登录
#[derive(Clone)]
pub struct Login {
    pub name: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for Login {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Login")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// 通过 access token 识别用户
#[derive(Debug, Clone)]
pub struct AuthenticateToken {
    pub token: String,
}
