//! Game Command Handlers

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateGame, DeleteGame};
use crate::application::error::ApplicationError;
use crate::application::ports::{GameRecord, GameRepositoryPort};
use crate::application::queries::handlers::GameView;
use crate::domain::game::GameContent;

// ============================================================================
// CreateGame
// ============================================================================

/// CreateGame Handler
pub struct CreateGameHandler {
    game_repo: Arc<dyn GameRepositoryPort>,
}

impl CreateGameHandler {
    pub fn new(game_repo: Arc<dyn GameRepositoryPort>) -> Self {
        Self { game_repo }
    }

    pub async fn handle(&self, command: CreateGame) -> Result<GameView, ApplicationError> {
        let content = GameContent::new(command.draft).map_err(ApplicationError::validation)?;

        let game = GameRecord {
            id: Uuid::new_v4(),
            directions: content.directions().to_string(),
            question: content.question().to_string(),
            hint: content.hint().to_string(),
            answer: content.answer().to_string(),
            created_at: Utc::now(),
        };

        self.game_repo.save(&game).await?;

        tracing::info!(game_id = %game.id, "Game created");

        Ok(GameView::from(game))
    }
}

// ============================================================================
// DeleteGame
// ============================================================================

/// DeleteGame Handler
///
/// 删除不存在的 id 同样视为成功
pub struct DeleteGameHandler {
    game_repo: Arc<dyn GameRepositoryPort>,
}

impl DeleteGameHandler {
    pub fn new(game_repo: Arc<dyn GameRepositoryPort>) -> Self {
        Self { game_repo }
    }

    pub async fn handle(&self, command: DeleteGame) -> Result<(), ApplicationError> {
        let game_id = command.game_id;
        let deleted = self.game_repo.delete(game_id).await?;

        if deleted {
            tracing::info!(game_id = %game_id, "Game deleted");
        } else {
            tracing::debug!(game_id = %game_id, "Delete matched no game");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::GameDraft;
    use crate::infrastructure::memory::InMemoryGameRepository;

    fn draft() -> GameDraft {
        GameDraft {
            directions: Some("Answer in one word".into()),
            question: Some("What gets wetter the more it dries?".into()),
            hint: Some("Bathroom".into()),
            answer: Some("Towel".into()),
        }
    }

    #[tokio::test]
    async fn test_create_game_persists_record() {
        let repo = Arc::new(InMemoryGameRepository::new());
        let handler = CreateGameHandler::new(repo.clone());

        let created = handler.handle(CreateGame { draft: draft() }).await.unwrap();
        assert_eq!(created.answer, "Towel");

        let stored = repo.find_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_game_with_missing_field_stores_nothing() {
        let repo = Arc::new(InMemoryGameRepository::new());
        let handler = CreateGameHandler::new(repo.clone());

        let command = CreateGame {
            draft: GameDraft {
                question: None,
                ..draft()
            },
        };

        match handler.handle(command).await {
            Err(ApplicationError::ValidationError(errors)) => {
                assert!(errors.get("question").is_some());
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = Arc::new(InMemoryGameRepository::new());
        let created = CreateGameHandler::new(repo.clone())
            .handle(CreateGame { draft: draft() })
            .await
            .unwrap();
        let handler = DeleteGameHandler::new(repo.clone());

        handler.handle(DeleteGame { game_id: created.id }).await.unwrap();
        handler.handle(DeleteGame { game_id: created.id }).await.unwrap();
        handler
            .handle(DeleteGame {
                game_id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
