//! Note rows and search patterns.

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use store::{Note, NoteId, NotesError};
#[cfg(feature = "server")]
use uuid::Uuid;

/// A row of the `notes` table.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl NoteRow {
    pub fn into_note(self) -> Result<Note, NotesError> {
        Ok(Note::new(NoteId::new(self.id.to_string())?, self.title, self.content))
    }
}

/// `ILIKE` pattern matching `query` anywhere, with wildcards in the query
/// taken literally.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_query_in_wildcards() {
        assert_eq!(like_pattern("milk"), "%milk%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("snake_case"), "%snake\\_case%");
        assert_eq!(like_pattern("C:\\dir"), "%C:\\\\dir%");
    }
}
