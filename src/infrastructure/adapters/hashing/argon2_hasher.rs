//! Argon2 Password Hasher
//!
//! 实现 PasswordHasherPort trait，使用 Argon2id 生成 PHC 格式哈希
//!
//! 哈希与校验都是 CPU 密集操作，放在 `spawn_blocking` 中执行，避免阻塞异步运行时

use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand::Rng;
use tokio::task;

use crate::application::ports::{HashError, PasswordHasherPort};

/// 盐长度（字节），argon2 推荐值
const SALT_BYTES: usize = 16;

/// Argon2 参数配置
#[derive(Debug, Clone)]
pub struct Argon2HasherConfig {
    /// 内存开销（KiB）
    pub memory_cost_kib: u32,
    /// 迭代次数
    pub time_cost: u32,
    /// 并行度
    pub parallelism: u32,
}

/// Argon2id 密码哈希器
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(memory_cost_kib: u32, time_cost: u32, parallelism: u32) -> Result<Self, HashError> {
        let params = Params::new(memory_cost_kib, time_cost, parallelism, None)
            .map_err(|e| HashError::HashFailed(format!("Invalid Argon2 params: {}", e)))?;
        Ok(Self { params })
    }

    pub fn from_config(config: &Argon2HasherConfig) -> Result<Self, HashError> {
        Self::new(config.memory_cost_kib, config.time_cost, config.parallelism)
    }

    fn generate_salt() -> Result<SaltString, HashError> {
        let mut bytes = [0u8; SALT_BYTES];
        rand::rng().fill(&mut bytes[..]);
        SaltString::encode_b64(&bytes).map_err(|e| HashError::HashFailed(e.to_string()))
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

#[async_trait]
impl PasswordHasherPort for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        task::spawn_blocking(move || {
            let salt = Self::generate_salt()?;
            Self::argon2(params)
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashError::HashFailed(e.to_string()))
        })
        .await
        .map_err(|e| HashError::TaskFailed(e.to_string()))?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        let params = self.params.clone();

        task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&password_hash)
                .map_err(|e| HashError::InvalidHash(e.to_string()))?;

            // 哈希串自带参数，校验时以其为准
            match Self::argon2(params).verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(HashError::InvalidHash(e.to_string())),
            }
        })
        .await
        .map_err(|e| HashError::TaskFailed(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> Argon2PasswordHasher {
        Argon2PasswordHasher::new(1024, 1, 1).unwrap()
    }

    #[test]
    fn test_argon2_default_params_are_accepted() {
        let config = Argon2HasherConfig {
            memory_cost_kib: Params::DEFAULT_M_COST,
            time_cost: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        };
        assert_eq!(config.memory_cost_kib, 19456);
        assert!(Argon2PasswordHasher::from_config(&config).is_ok());
    }

    #[test]
    fn test_generated_salt_is_random_and_encodable() {
        let first = Argon2PasswordHasher::generate_salt().unwrap();
        let second = Argon2PasswordHasher::generate_salt().unwrap();

        // 16 字节 B64 编码（无填充）为 22 字符
        assert_eq!(first.as_str().len(), 22);
        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_invalid_params_are_rejected() {
        assert!(Argon2PasswordHasher::new(1024, 0, 1).is_err());
    }

    #[tokio::test]
    async fn test_hash_then_verify() {
        let hasher = fast_hasher();
        let hash = hasher.hash("GinTonic").await.unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("GinTonic", &hash).await.unwrap());
        assert!(!hasher.verify("gintonic", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_same_password_gets_different_salt() {
        let hasher = fast_hasher();
        let first = hasher.hash("secret").await.unwrap();
        let second = hasher.hash("secret").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_unreadable_hash_is_an_error() {
        let hasher = fast_hasher();
        let result = hasher.verify("secret", "not-a-phc-string").await;
        assert!(matches!(result, Err(HashError::InvalidHash(_))));
    }
}
