use sqlx::{Executor, Postgres};
use uuid::Uuid;

use crate::models::QuizHistoryEntry;

pub async fn create_entry<'e, E>(
    executor: E,
    user_id: Uuid,
    username: &str,
    score: i32,
    total_questions: i32,
) -> Result<QuizHistoryEntry, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO quiz_history (user_id, username, score, total_questions)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, username, score, total_questions, date
        "#,
    )
    .bind(user_id)
    .bind(username)
    .bind(score)
    .bind(total_questions)
    .fetch_one(executor)
    .await
}

/// All entries recorded by one user, oldest first.
pub async fn list_for_user<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<QuizHistoryEntry>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, user_id, username, score, total_questions, date
            FROM quiz_history
            WHERE user_id = $1
            ORDER BY date, id
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}
