//! User Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::RegisterUser;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    PasswordHasherPort, RepositoryError, UserRecord, UserRepositoryPort,
};
use crate::domain::user::{AccessToken, Registration};
use crate::domain::{FieldError, ValidationErrors};

// ============================================================================
// RegisterUser
// ============================================================================

/// 注册用户响应
#[derive(Debug, Clone)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub access_token: String,
}

/// RegisterUser Handler
pub struct RegisterUserHandler {
    user_repo: Arc<dyn UserRepositoryPort>,
    password_hasher: Arc<dyn PasswordHasherPort>,
}

impl RegisterUserHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepositoryPort>,
        password_hasher: Arc<dyn PasswordHasherPort>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
        }
    }

    /// 写入完成后才返回 id 与 token
    pub async fn handle(&self, command: RegisterUser) -> Result<RegisteredUser, ApplicationError> {
        let registration =
            Registration::new(command.name, command.password).map_err(ApplicationError::validation)?;

        let password_hash = self.password_hasher.hash(registration.password()).await?;

        let user = UserRecord {
            id: Uuid::new_v4(),
            name: registration.name().to_string(),
            password_hash,
            access_token: AccessToken::generate().into_string(),
            created_at: Utc::now(),
        };

        // name 唯一性由存储层原子保证
        match self.user_repo.insert(&user).await {
            Ok(()) => {}
            Err(RepositoryError::Duplicate(field)) => {
                tracing::warn!(name = %user.name, "Registration with taken name");
                return Err(ApplicationError::validation(ValidationErrors::single(
                    FieldError::unique(&field),
                )));
            }
            Err(e) => return Err(e.into()),
        }

        tracing::info!(user_id = %user.id, name = %user.name, "User registered");

        Ok(RegisteredUser {
            id: user.id,
            access_token: user.access_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::Argon2PasswordHasher;
    use crate::infrastructure::memory::InMemoryUserRepository;

    fn handler() -> (Arc<InMemoryUserRepository>, RegisterUserHandler) {
        let repo = Arc::new(InMemoryUserRepository::new());
        let hasher = Arc::new(Argon2PasswordHasher::new(1024, 1, 1).unwrap());
        (repo.clone(), RegisterUserHandler::new(repo, hasher))
    }

    fn register(name: &str, password: &str) -> RegisterUser {
        RegisterUser {
            name: Some(name.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let (repo, handler) = handler();

        let registered = handler.handle(register("alice", "p@ss")).await.unwrap();
        assert_eq!(registered.access_token.len(), 256);

        let stored = repo.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(stored.id, registered.id);
        assert_eq!(stored.access_token, registered.access_token);
        assert_ne!(stored.password_hash, "p@ss");
        assert!(stored.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let (repo, handler) = handler();

        let first = handler.handle(register("alice", "one")).await.unwrap();

        match handler.handle(register("alice", "two")).await {
            Err(ApplicationError::ValidationError(errors)) => {
                assert_eq!(errors.get("name").unwrap().kind, "unique");
            }
            other => panic!("unexpected result: {:?}", other.map(|u| u.id)),
        }

        let stored = repo.find_by_name("alice").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
    }

    #[tokio::test]
    async fn test_missing_password_is_rejected() {
        let (_, handler) = handler();

        let command = RegisterUser {
            name: Some("alice".to_string()),
            password: None,
        };

        match handler.handle(command).await {
            Err(ApplicationError::ValidationError(errors)) => {
                assert_eq!(errors.get("password").unwrap().kind, "required");
            }
            other => panic!("unexpected result: {:?}", other.map(|u| u.id)),
        }
    }
}
