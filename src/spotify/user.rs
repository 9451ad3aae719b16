use crate::{
    error::CatalogError,
    spotify::SpotifyClient,
    types::{GetUserPlaylistsResponse, UserProfile},
};

impl SpotifyClient {
    pub async fn get_current_user(&self) -> Result<UserProfile, CatalogError> {
        let api_url = format!("{url}/me", url = &self.api_url);
        self.get_json::<UserProfile>(&api_url).await
    }

    /// Fetches one page of a user's playlists; `url` is the first page or a `next` link.
    pub async fn get_user_playlists_page(
        &self,
        url: &str,
    ) -> Result<GetUserPlaylistsResponse, CatalogError> {
        self.get_json::<GetUserPlaylistsResponse>(url).await
    }
}
