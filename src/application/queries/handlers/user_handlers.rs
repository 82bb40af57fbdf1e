//! User Query Handlers
//!
//! 登录与 token 鉴权都是只读查询：access token 在注册时生成，之后不再改变

use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{HashError, PasswordHasherPort, UserRepositoryPort};
use crate::application::queries::{AuthenticateToken, Login};

// ============================================================================
// Response DTOs
// ============================================================================

/// 登录成功后返回的会话信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub user_id: Uuid,
    pub access_token: String,
}

/// 通过鉴权的用户身份，挂在请求上下文中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Login Handler
pub struct LoginHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
}

impl LoginHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// 凭据不匹配时返回 `Ok(None)`，不区分用户不存在与密码错误
    pub async fn handle(&self, query: Login) -> Result<Option<SessionView>, ApplicationError> {
        let (Some(name), Some(password)) = (query.name, query.password) else {
            return Ok(None);
        };

        let Some(user) = self.user_repo.find_by_name(&name).await? else {
            tracing::debug!(name = %name, "Login for unknown user");
            return Ok(None);
        };

        let matches = match self
            .password_hasher
            .verify(&password, &user.password_hash)
            .await
        {
            Ok(matches) => matches,
            Err(HashError::InvalidHash(e)) => {
                tracing::warn!(user_id = %user.id, error = %e, "Stored password hash is unreadable");
                false
            }
            Err(e) => return Err(e.into()),
        };

        if !matches {
            tracing::debug!(user_id = %user.id, "Login with wrong password");
            return Ok(None);
        }

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(Some(SessionView {
            user_id: user.id,
            access_token: user.access_token,
        }))
    }
}

/// AuthenticateToken Handler
pub struct AuthenticateTokenHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
}

impl AuthenticateTokenHandler {
    pub fn new(user_repo: Arc<dyn UserRepositoryPort>) -> Self {
        Self { user_repo }
    }

    pub async fn handle(
        &self,
        query: AuthenticateToken,
    ) -> Result<Option<AuthenticatedUser>, ApplicationError> {
        if query.token.is_empty() {
            return Ok(None);
        }

        let user = self.user_repo.find_by_access_token(&query.token).await?;

        Ok(user.map(|u| AuthenticatedUser {
            id: u.id,
            name: u.name,
        }))
    }
}
