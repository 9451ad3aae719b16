use tracing::debug;

use crate::{
    error::CatalogError,
    spotify::SpotifyClient,
    types::{
        AddTrackToPlaylistRequest, CreatePlaylistRequest, Playlist, PlaylistTracksPage,
        SnapshotResponse,
    },
};

/// Spotify accepts at most this many uris per add/replace call.
pub const MAX_TRACKS_PER_CALL: usize = 100;

impl SpotifyClient {
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist, CatalogError> {
        let api_url = format!(
            "{url}/playlists/{playlist_id}",
            url = &self.api_url,
            playlist_id = playlist_id
        );
        self.get_json::<Playlist>(&api_url).await
    }

    /// Fetches a page of playlist entries.
    ///
    /// `url` is absolute: either the first page built by the caller or the
    /// `next` link of the previous page.
    pub async fn get_playlist_tracks_page(
        &self,
        url: &str,
    ) -> Result<PlaylistTracksPage, CatalogError> {
        self.get_json::<PlaylistTracksPage>(url).await
    }

    /// Creates a playlist owned by `user_id`.
    pub async fn create(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, CatalogError> {
        let api_url = format!(
            "{url}/users/{user_id}/playlists",
            url = &self.api_url,
            user_id = user_id
        );

        debug!(url = %api_url, name = %request.name, "POST");
        let response = self
            .execute(self.http.post(&api_url).json(request))
            .await?;
        Ok(response.json::<Playlist>().await?)
    }

    /// Replaces the playlist content with `uris` (`PUT`).
    pub async fn replace_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        let api_url = self.tracks_url(playlist_id);
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        debug!(url = %api_url, count = uris.len(), "PUT");
        let response = self.execute(self.http.put(&api_url).json(&body)).await?;
        Self::log_snapshot(response).await;
        Ok(())
    }

    /// Appends `uris` to the playlist (`POST`).
    pub async fn add_tracks(&self, playlist_id: &str, uris: &[String]) -> Result<(), CatalogError> {
        let api_url = self.tracks_url(playlist_id);
        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        debug!(url = %api_url, count = uris.len(), "POST");
        let response = self.execute(self.http.post(&api_url).json(&body)).await?;
        Self::log_snapshot(response).await;
        Ok(())
    }

    fn tracks_url(&self, playlist_id: &str) -> String {
        format!(
            "{url}/playlists/{playlist_id}/tracks",
            url = &self.api_url,
            playlist_id = playlist_id
        )
    }

    // some 2xx answers carry no body; that is still a success
    async fn log_snapshot(response: reqwest::Response) {
        if let Ok(snapshot) = response.json::<SnapshotResponse>().await {
            debug!(snapshot_id = %snapshot.snapshot_id, "playlist updated");
        }
    }
}
