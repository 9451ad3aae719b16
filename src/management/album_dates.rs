use std::collections::HashMap;

/// Album id to release date, shared by every page of every load in a session.
///
/// Entries are write-once: a second insert for the same album keeps the first
/// value. The index is never evicted.
#[derive(Debug, Default, Clone)]
pub struct AlbumDateIndex {
    dates: HashMap<String, String>,
}

impl AlbumDateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a release date unless the album is already known.
    /// Returns `true` if the date was stored.
    pub fn insert(&mut self, album_id: impl Into<String>, release_date: impl Into<String>) -> bool {
        let mut stored = false;
        self.dates.entry(album_id.into()).or_insert_with(|| {
            stored = true;
            release_date.into()
        });
        stored
    }

    pub fn get(&self, album_id: &str) -> Option<&str> {
        self.dates.get(album_id).map(String::as_str)
    }

    pub fn contains(&self, album_id: &str) -> bool {
        self.dates.contains_key(album_id)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_date_wins() {
        let mut index = AlbumDateIndex::new();
        assert!(index.insert("alb1", "2001-02-03"));
        assert!(!index.insert("alb1", "1999-01-01"));
        assert_eq!(index.get("alb1"), Some("2001-02-03"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn unknown_album_is_absent() {
        let index = AlbumDateIndex::new();
        assert!(index.is_empty());
        assert!(!index.contains("missing"));
        assert_eq!(index.get("missing"), None);
    }
}
