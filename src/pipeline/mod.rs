//! # Playlist Pipeline
//!
//! Load, enrich, reorder and save a playlist.
//!
//! ```text
//! walker ──page──▶ batch (albums ∥ features) ──▶ enrich ──▶ entries
//!                                                             │
//!                                     all pages consumed ─────┤
//!                                                             ▼
//!                                                          reorder
//!                                                             │
//!                         view (filter + sort) ◀──────────────┘
//!                                │
//!                                ▼
//!                              save
//! ```
//!
//! Pages are processed strictly in sequence; within a page the album and
//! feature lookups overlap. The [`Session`] owns everything that outlives a
//! single step.

pub mod batch;
pub mod enrich;
pub mod filter;
pub mod reorder;
pub mod save;
pub mod view;
pub mod walker;

use tracing::warn;

use crate::{
    error::PipelineError,
    management::Session,
    spotify::Catalog,
    types::{Playlist, PlaylistEntry},
};

/// Entries requested per playlist page.
pub const PAGE_SIZE: usize = 50;

/// First page URL of a playlist's entries.
pub fn playlist_tracks_url(api_url: &str, playlist_id: &str) -> String {
    format!(
        "{api_url}/playlists/{playlist_id}/tracks?limit={limit}",
        api_url = api_url.trim_end_matches('/'),
        playlist_id = playlist_id,
        limit = PAGE_SIZE
    )
}

/// Loads `playlist` into `session`: walks every page, enriches the entries,
/// then computes the fair order and the random shuffle keys.
///
/// On failure the session keeps no entries, so a partially walked playlist
/// is never presented as loaded. Returns the number of entries.
pub async fn load_playlist<F>(
    catalog: &dyn Catalog,
    session: &mut Session,
    playlist: Playlist,
    on_page: F,
) -> Result<usize, PipelineError>
where
    F: FnMut(&[PlaylistEntry]),
{
    let start_url = playlist_tracks_url(catalog.api_url(), &playlist.id);
    session.begin(playlist);

    let (entries, album_dates) = session.working_set();
    if let Err(e) = walker::walk(catalog, &start_url, entries, album_dates, on_page).await {
        warn!("{}", e);
        entries.clear();
        return Err(e);
    }

    reorder::reorder(entries);
    view::assign_random_keys(entries);
    Ok(entries.len())
}
