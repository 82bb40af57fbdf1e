//! 字段校验错误
//!
//! 以字段名为 key 的校验错误集合，直接序列化为响应中的 `error` / `errors` 字段

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// 单个字段的校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub kind: &'static str,
    pub path: String,
}

impl FieldError {
    /// 必填字段缺失或为空
    pub fn required(path: &str) -> Self {
        Self {
            message: format!("Path `{}` is required.", path),
            kind: "required",
            path: path.to_string(),
        }
    }

    /// 唯一约束冲突
    pub fn unique(path: &str) -> Self {
        Self {
            message: format!("Path `{}` must be unique.", path),
            kind: "unique",
            path: path.to_string(),
        }
    }

    /// 请求体无法解析
    pub fn malformed(path: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: "malformed",
            path: path.to_string(),
        }
    }
}

/// 校验错误集合
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 只含一个字段错误的集合
    pub fn single(error: FieldError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }

    pub fn add(&mut self, error: FieldError) {
        self.0.insert(error.path.clone(), error);
    }

    /// 校验必填字段，缺失或为空时记录错误并返回 None
    pub fn require(&mut self, path: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.add(FieldError::required(path));
                None
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&FieldError> {
        self.0.get(path)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.values().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_missing_and_empty() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.require("hint", Some("look up".into())), Some("look up".into()));
        assert_eq!(errors.require("answer", Some(String::new())), None);
        assert_eq!(errors.require("question", None), None);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("answer").unwrap().kind, "required");
        assert!(errors.get("hint").is_none());
    }

    #[test]
    fn test_serializes_keyed_by_field() {
        let errors = ValidationErrors::single(FieldError::unique("name"));
        let json = serde_json::to_value(&errors).unwrap();

        assert_eq!(json["name"]["kind"], "unique");
        assert_eq!(json["name"]["path"], "name");
        assert_eq!(json["name"]["message"], "Path `name` must be unique.");
    }
}
