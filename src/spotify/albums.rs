use crate::{
    error::CatalogError,
    spotify::SpotifyClient,
    types::{AlbumDate, GetSeveralAlbumsResponse},
};

/// Spotify accepts at most this many ids per `/albums` call.
pub const MAX_ALBUMS_PER_CALL: usize = 20;

impl SpotifyClient {
    /// Retrieves release information for up to 20 albums in a single request.
    ///
    /// Unknown or unavailable albums are returned as `None` in their slot, as
    /// the API does. Chunking larger id lists is the caller's job.
    ///
    /// # Example
    ///
    /// ```
    /// let ids = vec!["4aawyAB9vmqN3uQ7FjRGTy".to_string()];
    /// let albums = client.get_several_albums(&ids).await?;
    /// ```
    pub async fn get_several_albums(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AlbumDate>>, CatalogError> {
        let api_url = format!(
            "{url}/albums?ids={album_ids}",
            url = &self.api_url,
            album_ids = ids.join(",")
        );

        let json = self.get_json::<GetSeveralAlbumsResponse>(&api_url).await?;
        Ok(json.albums)
    }
}
