use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registered user
///
/// The bcrypt hash is loaded for login verification but never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Kana flashcard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    /// Server-generated identifier
    pub id: Uuid,
    /// The kana itself (e.g. "ア")
    pub character: String,
    /// Latin transcription
    pub romanji: String,
    pub fact: Option<String>,
    /// Example word using the character
    pub word: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Values needed to insert a flashcard
#[derive(Debug, Clone)]
pub struct NewFlashcard<'a> {
    pub id: Uuid,
    pub character: &'a str,
    pub romanji: &'a str,
    pub fact: Option<&'a str>,
    pub word: Option<&'a str>,
}

/// One finished quiz, owned by `user_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct QuizHistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Copy of the username at the time the quiz was recorded
    pub username: String,
    pub score: i32,
    pub total_questions: i32,
    pub date: DateTime<Utc>,
}
