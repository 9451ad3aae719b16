use tracing::{debug, info};

use crate::{
    error::PipelineError,
    spotify::{Catalog, playlist::MAX_TRACKS_PER_CALL},
    types::{CreatePlaylistRequest, Playlist},
};

/// Where a save writes to.
#[derive(Debug, Clone)]
pub enum SaveTarget {
    /// Overwrite the contents of an existing playlist.
    Existing(Playlist),
    /// Create a playlist owned by `owner_id` first.
    New {
        owner_id: String,
        name: String,
        public: bool,
    },
}

/// Writes `uris` to a playlist in chunks of at most 100.
///
/// The first chunk replaces the playlist contents, every following chunk is
/// appended. Chunks go out strictly one after another. A failing chunk stops
/// the save; chunks written before it stay written. Returns the number of
/// uris written.
pub async fn save_tracks(
    catalog: &dyn Catalog,
    playlist_id: &str,
    uris: &[String],
) -> Result<usize, PipelineError> {
    if uris.is_empty() {
        return Err(PipelineError::NothingToSave);
    }

    let mut written = 0;
    for (chunk_no, chunk) in uris.chunks(MAX_TRACKS_PER_CALL).enumerate() {
        let result = if chunk_no == 0 {
            catalog.replace_playlist_tracks(playlist_id, chunk).await
        } else {
            catalog.append_playlist_tracks(playlist_id, chunk).await
        };

        result.map_err(|source| PipelineError::SaveFailed {
            chunk: chunk_no,
            written,
            source,
        })?;

        written += chunk.len();
        debug!(playlist_id, chunk = chunk_no, written, "chunk saved");
    }

    info!(playlist_id, written, "playlist saved");
    Ok(written)
}

/// Resolves `target` (creating a playlist if asked) and writes `uris` to it.
///
/// An empty `uris` is refused before any remote call, so a filter that
/// excludes everything can never empty a playlist.
pub async fn save_playlist(
    catalog: &dyn Catalog,
    target: SaveTarget,
    uris: &[String],
) -> Result<Playlist, PipelineError> {
    if uris.is_empty() {
        return Err(PipelineError::NothingToSave);
    }

    let playlist = match target {
        SaveTarget::Existing(playlist) => playlist,
        SaveTarget::New {
            owner_id,
            name,
            public,
        } => {
            let request = CreatePlaylistRequest {
                name,
                description: "Reordered with fairshuffle".to_string(),
                public,
            };
            catalog
                .create_playlist(&owner_id, &request)
                .await
                .map_err(PipelineError::CreateFailed)?
        }
    };

    save_tracks(catalog, &playlist.id, uris).await?;
    Ok(playlist)
}
