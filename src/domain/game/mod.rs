//! Game Context - 谜题游戏限界上下文
//!
//! 职责:
//! - 游戏内容（directions / question / hint / answer）的必填校验

mod value_objects;

pub use value_objects::{GameContent, GameDraft};
