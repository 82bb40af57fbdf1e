//! Game Context - Value Objects

use serde::Deserialize;

use crate::domain::validation::ValidationErrors;

/// 未经校验的游戏内容（来自请求体，字段均可缺失）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameDraft {
    pub directions: Option<String>,
    pub question: Option<String>,
    pub hint: Option<String>,
    pub answer: Option<String>,
}

/// 游戏内容
///
/// 不变量:
/// - 四个字段均非空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContent {
    directions: String,
    question: String,
    hint: String,
    answer: String,
}

impl GameContent {
    /// 校验草稿，一次性报告所有缺失字段
    pub fn new(draft: GameDraft) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let directions = errors.require("directions", draft.directions);
        let question = errors.require("question", draft.question);
        let hint = errors.require("hint", draft.hint);
        let answer = errors.require("answer", draft.answer);

        match (directions, question, hint, answer) {
            (Some(directions), Some(question), Some(hint), Some(answer)) => Ok(Self {
                directions,
                question,
                hint,
                answer,
            }),
            _ => Err(errors),
        }
    }

    pub fn directions(&self) -> &str {
        &self.directions
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
