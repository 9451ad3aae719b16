//! Batched lookups against the catalog.
//!
//! An id list is split into consecutive chunks of at most `cap` ids; all
//! chunks are requested concurrently and the merged result is returned once
//! every chunk has answered. One failed chunk fails the whole batch.

use std::{collections::HashMap, future::Future};

use futures::future::try_join_all;
use tracing::debug;

use crate::{
    error::{CatalogError, LookupError},
    pipeline::enrich,
    spotify::{Catalog, albums::MAX_ALBUMS_PER_CALL},
    types::AudioFeatures,
};

/// Issues one `fetch` per chunk of `ids` concurrently and concatenates the
/// results in chunk order.
pub async fn fetch_batched<'a, T, F, Fut>(
    ids: &'a [String],
    cap: usize,
    fetch: F,
) -> Result<Vec<T>, CatalogError>
where
    F: Fn(&'a [String]) -> Fut,
    Fut: Future<Output = Result<Vec<T>, CatalogError>>,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let calls = ids.chunks(cap.max(1)).map(fetch);
    let results = try_join_all(calls).await?;
    Ok(results.into_iter().flatten().collect())
}

/// Resolves release dates for `album_ids`, 20 albums per call.
///
/// Albums the catalog does not know are left out of the returned map.
pub async fn fetch_album_dates(
    catalog: &dyn Catalog,
    album_ids: &[String],
) -> Result<HashMap<String, String>, LookupError> {
    debug!(count = album_ids.len(), "album lookup");
    let albums = fetch_batched(album_ids, MAX_ALBUMS_PER_CALL, |chunk| catalog.albums(chunk))
        .await
        .map_err(LookupError::Albums)?;

    Ok(albums
        .into_iter()
        .flatten()
        .map(|album| (album.id, album.release_date))
        .collect())
}

/// Resolves audio features for `track_ids` in a single call.
///
/// The id list is bounded by the playlist page size, so no chunking is applied.
pub async fn fetch_features(
    catalog: &dyn Catalog,
    track_ids: &[String],
) -> Result<HashMap<String, AudioFeatures>, LookupError> {
    if track_ids.is_empty() {
        return Ok(HashMap::new());
    }

    debug!(count = track_ids.len(), "feature lookup");
    let records = catalog
        .audio_features(track_ids)
        .await
        .map_err(LookupError::Features)?;
    Ok(enrich::feature_lookup(records))
}
