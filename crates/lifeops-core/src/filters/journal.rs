//! Journal list filter.

use serde::{Deserialize, Serialize};

use super::{has_all_tags, matches_search, normalize_search};
use crate::entities::Journal;
use crate::enums::Mood;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalFilter {
    pub mood: Option<Mood>,
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
    /// Tag IDs; an entry must carry all of them.
    pub tags: Vec<String>,
}

impl JournalFilter {
    #[must_use]
    pub fn matches(&self, journal: &Journal) -> bool {
        if self.mood.is_some_and(|m| m != journal.mood) {
            return false;
        }
        if let Some(needle) = normalize_search(self.search.as_deref()) {
            if !matches_search(&needle, &[&journal.title, &journal.content]) {
                return false;
            }
        }
        has_all_tags(&journal.tags, &self.tags)
    }

    /// Keep matching entries, preserving order.
    #[must_use]
    pub fn apply(&self, journals: Vec<Journal>) -> Vec<Journal> {
        journals.into_iter().filter(|j| self.matches(j)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn journal(id: &str, title: &str, content: &str, mood: Mood, tags: &[&str]) -> Journal {
        let now = Utc::now();
        Journal {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            mood,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample() -> Vec<Journal> {
        vec![
            journal("a", "Shipped module 3", "Long day", Mood::Great, &["tag-work"]),
            journal("b", "Rest", "Walked by the river", Mood::Good, &[]),
            journal("c", "Stuck", "Recording went badly", Mood::Bad, &["tag-work", "tag-rec"]),
        ]
    }

    fn ids(journals: &[Journal]) -> Vec<&str> {
        journals.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn default_keeps_everything() {
        assert_eq!(ids(&JournalFilter::default().apply(sample())), vec!["a", "b", "c"]);
    }

    #[test]
    fn mood_filter() {
        let filter = JournalFilter {
            mood: Some(Mood::Good),
            ..JournalFilter::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["b"]);
    }

    #[test]
    fn search_covers_content() {
        let filter = JournalFilter {
            search: Some("RIVER".into()),
            ..JournalFilter::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["b"]);
    }

    #[test]
    fn tags_must_all_match() {
        let filter = JournalFilter {
            tags: vec!["tag-work".into(), "tag-rec".into()],
            ..JournalFilter::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["c"]);
    }
}
