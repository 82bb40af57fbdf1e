//! Game Queries

/// 随机取一个游戏
#[derive(Debug, Clone)]
pub struct GetRandomGame;

/// 列出所有游戏
#[derive(Debug, Clone)]
pub struct ListGames;
