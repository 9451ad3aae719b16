use std::collections::HashMap;

use crate::{
    management::AlbumDateIndex,
    types::{AudioFeatures, Enrichment, PlaylistEntry},
};

/// Builds the per-page track id → features lookup, dropping null records.
pub fn feature_lookup(records: Vec<Option<AudioFeatures>>) -> HashMap<String, AudioFeatures> {
    records
        .into_iter()
        .flatten()
        .filter(|f| !f.id.is_empty())
        .map(|f| (f.id.clone(), f))
        .collect()
}

/// Joins one page of entries with its lookups.
///
/// Albums fetched for this page go into `album_dates` first, so every entry
/// of this page and of later pages resolves its date through the index.
/// Every entry with a track id gets either its features or the explicit
/// [`Enrichment::Empty`] marker.
pub fn merge_page(
    entries: &mut [PlaylistEntry],
    features: &HashMap<String, AudioFeatures>,
    fetched_albums: HashMap<String, String>,
    album_dates: &mut AlbumDateIndex,
) {
    for (album_id, release_date) in fetched_albums {
        album_dates.insert(album_id, release_date);
    }

    for entry in entries.iter_mut() {
        if let Some(track_id) = entry.track.id.as_deref() {
            entry.track.enrichment = match features.get(track_id) {
                Some(f) => Enrichment::Features(f.clone()),
                None => Enrichment::Empty,
            };
        }

        entry.release_date = entry
            .track
            .album
            .id
            .as_deref()
            .and_then(|album_id| album_dates.get(album_id))
            .map(str::to_string);
    }
}
