/// Treat a missing field and an empty string the same way.
///
/// # Examples
/// ```
/// use kana_api::validation::non_empty;
///
/// assert_eq!(non_empty(Some("a".to_string())), Some("a".to_string()));
/// assert_eq!(non_empty(Some(String::new())), None);
/// assert_eq!(non_empty(None), None);
/// ```
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
