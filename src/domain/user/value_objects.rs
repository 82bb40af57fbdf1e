//! User Context - Value Objects

use rand::Rng;
use std::fmt::{self, Write};

use crate::domain::validation::ValidationErrors;

/// Access token 随机字节数（十六进制后为 256 字符）
pub const ACCESS_TOKEN_BYTES: usize = 128;

/// 用户访问令牌
///
/// 不变量:
/// - 创建用户时生成，之后不再变化
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// 生成新的随机 token（ThreadRng 为 CSPRNG）
    pub fn generate() -> Self {
        let mut bytes = [0u8; ACCESS_TOKEN_BYTES];
        rand::rng().fill(&mut bytes[..]);

        let hex = bytes
            .iter()
            .fold(String::with_capacity(ACCESS_TOKEN_BYTES * 2), |mut acc, b| {
                let _ = write!(acc, "{b:02x}");
                acc
            });
        Self(hex)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// 注册信息
///
/// 不变量:
/// - name 与 password 均非空
#[derive(Clone)]
pub struct Registration {
    name: String,
    password: String,
}

impl Registration {
    pub fn new(name: Option<String>, password: Option<String>) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.require("name", name);
        let password = errors.require("password", password);

        match (name, password) {
            (Some(name), Some(password)) => Ok(Self { name, password }),
            _ => Err(errors),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// 不输出明文密码
impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_256_lowercase_hex_chars() {
        let token = AccessToken::generate().into_string();
        assert_eq!(token.len(), 256);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_tokens_are_distinct() {
        assert_ne!(AccessToken::generate(), AccessToken::generate());
    }

    #[test]
    fn test_registration_requires_both_fields() {
        let errors = Registration::new(Some("alice".into()), None).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("password").unwrap().kind, "required");

        let errors = Registration::new(None, Some(String::new())).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_registration_debug_hides_password() {
        let registration = Registration::new(Some("alice".into()), Some("p@ss".into())).unwrap();
        let debug = format!("{:?}", registration);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("p@ss"));
    }
}
