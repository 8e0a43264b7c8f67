use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::WordLookupConfig};

/// Search term sent upstream on every lookup.
pub const LOOKUP_KEYWORD: &str = "katakana";

const UPSTREAM_ERROR: &str = "Error fetching word";

/// What the API returns: a written form and its English meanings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Vec<SearchEntry>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    japanese: Vec<JapaneseForm>,
    senses: Vec<Sense>,
}

#[derive(Debug, Deserialize)]
struct JapaneseForm {
    word: Option<String>,
    reading: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Sense {
    #[serde(default)]
    english_definitions: Vec<String>,
}

/// Query the dictionary service and reshape its first result.
pub async fn fetch_word_of_the_day(config: &WordLookupConfig) -> Result<WordOfTheDay, ApiError> {
    let response = config
        .client
        .get(&config.base_url)
        .query(&[("keyword", LOOKUP_KEYWORD)])
        .send()
        .await
        .map_err(ApiError::upstream(UPSTREAM_ERROR))?
        .error_for_status()
        .map_err(ApiError::upstream(UPSTREAM_ERROR))?;

    let body: SearchResponse = response
        .json()
        .await
        .map_err(ApiError::upstream(UPSTREAM_ERROR))?;

    first_word(body)
}

/// Written form falls back to the reading; definitions of the first sense
/// are joined with ", ".
fn first_word(body: SearchResponse) -> Result<WordOfTheDay, ApiError> {
    let Some(entry) = body.data.into_iter().next() else {
        return Err(ApiError::NotFound("No word found".to_string()));
    };

    let word = entry
        .japanese
        .into_iter()
        .next()
        .and_then(|form| {
            form.word
                .filter(|w| !w.is_empty())
                .or(form.reading.filter(|r| !r.is_empty()))
        })
        .ok_or_else(|| ApiError::upstream(UPSTREAM_ERROR)("first result has no written form"))?;

    let meaning = entry
        .senses
        .into_iter()
        .next()
        .map(|sense| sense.english_definitions.join(", "))
        .ok_or_else(|| ApiError::upstream(UPSTREAM_ERROR)("first result has no senses"))?;

    Ok(WordOfTheDay { word, meaning })
}
