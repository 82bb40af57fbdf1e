//! In-Memory Game Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{GameRecord, GameRepositoryPort, RepositoryError};

/// 内存游戏仓储
///
/// 每条记录带插入序号，`find_all` 按序号返回
pub struct InMemoryGameRepository {
    games: DashMap<Uuid, (u64, GameRecord)>,
    next_seq: AtomicU64,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GameRepositoryPort for InMemoryGameRepository {
    async fn save(&self, game: &GameRecord) -> Result<(), RepositoryError> {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        self.games.insert(game.id, (seq, game.clone()));
        tracing::debug!(game_id = %game.id, "Game stored in memory");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<GameRecord>, RepositoryError> {
        let mut entries: Vec<(u64, GameRecord)> =
            self.games.iter().map(|e| e.value().clone()).collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, game)| game).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.games.remove(&id).is_some())
    }
}
