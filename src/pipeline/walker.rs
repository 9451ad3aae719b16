use tracing::{debug, info};

use crate::{
    error::{LookupError, PipelineError},
    management::AlbumDateIndex,
    pipeline::{batch, enrich},
    spotify::Catalog,
    types::PlaylistEntry,
};

/// Walks a playlist page by page, starting at `start_url`.
///
/// For each page the album and feature lookups run concurrently; the next
/// page is only requested after the current one is merged and appended to
/// `entries`. Items without a track are skipped. Returns the number of pages
/// walked.
///
/// # Errors
///
/// Any failing page, album batch or feature batch stops the walk with
/// [`PipelineError::LoadFailed`]. Entries of earlier pages stay in `entries`;
/// the caller decides what to do with them.
pub async fn walk<F>(
    catalog: &dyn Catalog,
    start_url: &str,
    entries: &mut Vec<PlaylistEntry>,
    album_dates: &mut AlbumDateIndex,
    mut on_page: F,
) -> Result<usize, PipelineError>
where
    F: FnMut(&[PlaylistEntry]),
{
    let mut next = Some(start_url.to_string());
    let mut page_no = 0;

    while let Some(url) = next.take() {
        let page = catalog
            .playlist_tracks_page(&url)
            .await
            .map_err(|e| PipelineError::LoadFailed {
                page: page_no,
                cause: LookupError::Page(e),
            })?;

        let mut page_entries: Vec<PlaylistEntry> = Vec::with_capacity(page.items.len());
        for (i, item) in page.items.into_iter().enumerate() {
            let Some(track) = item.track else {
                debug!(page = page_no, item = i, "no track at item, skipping");
                continue;
            };
            page_entries.push(PlaylistEntry {
                which: entries.len() + page_entries.len(),
                is_local: item.is_local,
                release_date: None,
                rnd: 0,
                track,
            });
        }

        let (track_ids, album_ids) = lookup_ids(&page_entries, album_dates);
        let (albums, features) = tokio::try_join!(
            batch::fetch_album_dates(catalog, &album_ids),
            batch::fetch_features(catalog, &track_ids),
        )
        .map_err(|cause| PipelineError::LoadFailed {
            page: page_no,
            cause,
        })?;

        enrich::merge_page(&mut page_entries, &features, albums, album_dates);
        on_page(&page_entries);
        entries.extend(page_entries);

        debug!(page = page_no, total = entries.len(), "page merged");
        next = page.next;
        page_no += 1;
    }

    info!(pages = page_no, entries = entries.len(), "playlist walked");
    Ok(page_no)
}

/// Collects the ids a page needs looked up.
///
/// Local entries are never looked up. An album is only requested once per page
/// and only if its release date is not already known.
fn lookup_ids(
    entries: &[PlaylistEntry],
    album_dates: &AlbumDateIndex,
) -> (Vec<String>, Vec<String>) {
    let mut track_ids = Vec::new();
    let mut album_ids: Vec<String> = Vec::new();

    for entry in entries.iter().filter(|e| !e.is_local) {
        if let Some(id) = &entry.track.id {
            track_ids.push(id.clone());
        }
        if let Some(album_id) = &entry.track.album.id {
            if !album_dates.contains(album_id) && !album_ids.contains(album_id) {
                album_ids.push(album_id.clone());
            }
        }
    }

    (track_ids, album_ids)
}
