//! Local, network-free note filtering.

use crate::models::Note;

/// Whether `note` contains `query` in its title or content, ignoring case.
///
/// The empty query matches every note.
pub fn matches_query(note: &Note, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    note.title.to_lowercase().contains(&query) || note.content.to_lowercase().contains(&query)
}

/// Notes matching `query`, in list order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes.iter().filter(|note| matches_query(note, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteId;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note::new(NoteId::new(id).unwrap(), title, content)
    }

    fn ids(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.id.to_string()).collect()
    }

    #[test]
    fn title_match_ignores_case() {
        let notes = vec![note("1", "A", "x"), note("2", "B", "y")];
        assert_eq!(ids(&filter_notes(&notes, "a")), vec!["1"]);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let notes = vec![note("1", "A", "x"), note("2", "B", "y")];
        assert_eq!(filter_notes(&notes, ""), notes.iter().collect::<Vec<_>>());
    }

    #[test]
    fn content_matches_too() {
        let notes = vec![
            note("1", "Groceries", "Milk and EGGS"),
            note("2", "Eggplant recipe", "roast it"),
            note("3", "Work", "standup at 10"),
        ];
        assert_eq!(ids(&filter_notes(&notes, "egg")), vec!["1", "2"]);
        assert!(filter_notes(&notes, "zebra").is_empty());
    }

    #[test]
    fn query_is_a_substring_not_a_token() {
        let notes = vec![note("1", "meeting notes", "")];
        assert!(matches_query(&notes[0], "ting no"));
        assert!(!matches_query(&notes[0], "notes meeting"));
    }
}
