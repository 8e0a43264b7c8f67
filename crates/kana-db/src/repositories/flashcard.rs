use sqlx::{Executor, Postgres};

use crate::models::{Flashcard, NewFlashcard};

pub async fn list_flashcards<'e, E>(executor: E) -> Result<Vec<Flashcard>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, "character", romanji, fact, word, created_at
            FROM flashcards
            ORDER BY created_at, id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn create_flashcard<'e, E>(
    executor: E,
    flashcard: &NewFlashcard<'_>,
) -> Result<Flashcard, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO flashcards (id, "character", romanji, fact, word)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, "character", romanji, fact, word, created_at
        "#,
    )
    .bind(flashcard.id)
    .bind(flashcard.character)
    .bind(flashcard.romanji)
    .bind(flashcard.fact)
    .bind(flashcard.word)
    .fetch_one(executor)
    .await
}
