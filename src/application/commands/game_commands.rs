//! Game Commands

use uuid::Uuid;

use crate::domain::game::GameDraft;

/// 创建游戏命令
#[derive(Debug, Clone)]
pub struct CreateGame {
    pub draft: GameDraft,
}

/// 删除游戏命令
#[derive(Debug, Clone)]
pub struct DeleteGame {
    pub game_id: Uuid,
}
