//! Data Transfer Objects
//!
//! 请求/响应结构，字段名与客户端约定保持一致（camelCase、`_id`）

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{GameView, RegisteredUser, SessionView};

// ============================================================================
// Game DTOs
// ============================================================================

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameDto {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub directions: String,
    pub question: String,
    pub hint: String,
    pub answer: String,
}

impl From<GameView> for GameDto {
    fn from(game: GameView) -> Self {
        Self {
            id: game.id,
            directions: game.directions,
            question: game.question,
            hint: game.hint,
            answer: game.answer,
        }
    }
}

/// 删除结果
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ============================================================================
// User DTOs
// ============================================================================

/// 注册与登录共用的请求体
#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub id: Uuid,
    pub access_token: String,
}

impl From<RegisteredUser> for RegisterResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            id: user.id,
            access_token: user.access_token,
        }
    }
}

/// 登录响应：失败时同样是 200，只带 `notFound: true`
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SessionResponse {
    #[serde(rename_all = "camelCase")]
    LoggedIn { user_id: Uuid, access_token: String },
    #[serde(rename_all = "camelCase")]
    NotFound { not_found: bool },
}

impl SessionResponse {
    pub fn not_found() -> Self {
        Self::NotFound { not_found: true }
    }
}

impl From<Option<SessionView>> for SessionResponse {
    fn from(session: Option<SessionView>) -> Self {
        match session {
            Some(s) => Self::LoggedIn {
                user_id: s.user_id,
                access_token: s.access_token,
            },
            None => Self::not_found(),
        }
    }
}

// ============================================================================
// Secret DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SecretResponse {
    pub secret: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_game_id_serializes_as_underscore_id() {
        let id = Uuid::new_v4();
        let dto = GameDto {
            id,
            directions: "d".into(),
            question: "q".into(),
            hint: "h".into(),
            answer: "a".into(),
        };

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["_id"], json!(id.to_string()));
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_session_response_shapes() {
        let id = Uuid::new_v4();
        let ok = SessionResponse::from(Some(SessionView {
            user_id: id,
            access_token: "tok".into(),
        }));
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "userId": id.to_string(), "accessToken": "tok" })
        );

        let failed = SessionResponse::from(None);
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "notFound": true })
        );
    }

    #[test]
    fn test_register_response_is_camel_case() {
        let id = Uuid::new_v4();
        let body = RegisterResponse {
            id,
            access_token: "tok".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "id": id.to_string(), "accessToken": "tok" })
        );
    }
}
