//! SQLite Game Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;
use crate::application::ports::{GameRecord, GameRepositoryPort, RepositoryError};

/// SQLite Game Repository
pub struct SqliteGameRepository {
    pool: DbPool,
}

impl SqliteGameRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct GameRow {
    id: String,
    directions: String,
    question: String,
    hint: String,
    answer: String,
    created_at: String,
}

impl TryFrom<GameRow> for GameRecord {
    type Error = RepositoryError;

    fn try_from(row: GameRow) -> Result<Self, Self::Error> {
        Ok(GameRecord {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            directions: row.directions,
            question: row.question,
            hint: row.hint,
            answer: row.answer,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl GameRepositoryPort for SqliteGameRepository {
    async fn save(&self, game: &GameRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO games (id, directions, question, hint, answer, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(game.id.to_string())
        .bind(&game.directions)
        .bind(&game.question)
        .bind(&game.hint)
        .bind(&game.answer)
        .bind(game.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<GameRecord>, RepositoryError> {
        let rows: Vec<GameRow> = sqlx::query_as(
            "SELECT id, directions, question, hint, answer, created_at FROM games ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(GameRecord::try_from).collect()
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteGameRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteGameRepository::new(pool)
    }

    fn record(answer: &str) -> GameRecord {
        GameRecord {
            id: Uuid::new_v4(),
            directions: "Read carefully".to_string(),
            question: "What has a neck but no head?".to_string(),
            hint: "Kitchen".to_string(),
            answer: answer.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_save_and_find_all_in_order() {
        let repo = repo().await;
        let first = record("A bottle");
        let second = record("A shirt");

        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();

        let games = repo.find_all().await.unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].id, first.id);
        assert_eq!(games[0].answer, "A bottle");
        assert_eq!(games[1].id, second.id);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_matched() {
        let repo = repo().await;
        let game = record("A bottle");
        repo.save(&game).await.unwrap();

        assert!(repo.delete(game.id).await.unwrap());
        assert!(!repo.delete(game.id).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
