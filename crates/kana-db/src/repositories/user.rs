use sqlx::{Executor, Postgres};

use crate::models::User;

/// Find a user matching either identifier.
///
/// A `None` identifier never matches, so passing a single identifier looks up
/// by that column only.
pub async fn find_by_username_or_email<'e, E>(
    executor: E,
    username: Option<&str>,
    email: Option<&str>,
) -> Result<Option<User>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1 OR email = $2
            ORDER BY created_at
            LIMIT 1
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(executor)
    .await
}

pub async fn create_user<'e, E>(
    executor: E,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO users (username, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, email, password_hash, created_at
        "#,
    )
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .fetch_one(executor)
    .await
}
