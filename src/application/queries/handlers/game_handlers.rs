//! Game Query Handlers

use rand::seq::IndexedRandom;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::{GameRecord, GameRepositoryPort};
use crate::application::queries::{GetRandomGame, ListGames};

// ============================================================================
// Response DTOs
// ============================================================================

/// 游戏详情
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub id: Uuid,
    pub directions: String,
    pub question: String,
    pub hint: String,
    pub answer: String,
}

impl From<GameRecord> for GameView {
    fn from(record: GameRecord) -> Self {
        Self {
            id: record.id,
            directions: record.directions,
            question: record.question,
            hint: record.hint,
            answer: record.answer,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetRandomGame Handler
pub struct GetRandomGameHandler {
    game_repo: Arc<dyn GameRepositoryPort>,
}

impl GetRandomGameHandler {
    pub fn new(game_repo: Arc<dyn GameRepositoryPort>) -> Self {
        Self { game_repo }
    }

    /// 均匀随机选取；集合为空时返回 NotFound
    pub async fn handle(&self, _query: GetRandomGame) -> Result<GameView, ApplicationError> {
        let games = self.game_repo.find_all().await?;

        let game = games
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| ApplicationError::not_found("Game"))?;

        tracing::debug!(game_id = %game.id, total = games.len(), "Random game picked");

        Ok(GameView::from(game))
    }
}

/// ListGames Handler
pub struct ListGamesHandler {
    game_repo: Arc<dyn GameRepositoryPort>,
}

impl ListGamesHandler {
    pub fn new(game_repo: Arc<dyn GameRepositoryPort>) -> Self {
        Self { game_repo }
    }

    pub async fn handle(&self, _query: ListGames) -> Result<Vec<GameView>, ApplicationError> {
        let games = self.game_repo.find_all().await?;
        Ok(games.into_iter().map(GameView::from).collect())
    }
}
