use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::{
    config,
    error::CatalogError,
    management::CredentialProvider,
    spotify::Catalog,
    types::{
        AlbumDate, AudioFeatures, CreatePlaylistRequest, GetUserPlaylistsResponse, Playlist,
        PlaylistTracksPage, UserProfile,
    },
};

/// reqwest-backed [`Catalog`] talking to the Spotify Web API.
///
/// One `reqwest::Client` is shared by all requests so connections are reused
/// across pages and batches.
pub struct SpotifyClient {
    pub(crate) http: Client,
    pub(crate) api_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl SpotifyClient {
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::with_api_url(config::spotify_apiurl(), credentials)
    }

    pub fn with_api_url(api_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Attaches the bearer credential, sends, and turns non-success statuses into errors.
    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response, CatalogError> {
        let token = self.credentials.bearer().await?;
        let response = request.bearer_auth(token).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());
            warn!(url = %response.url(), ?retry_after, "rate limited");
            return Err(CatalogError::RateLimited { retry_after });
        }

        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        Ok(response)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        debug!(url, "GET");
        let response = self.execute(self.http.get(url)).await?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn current_user(&self) -> Result<UserProfile, CatalogError> {
        self.get_current_user().await
    }

    async fn user_playlists_page(
        &self,
        url: &str,
    ) -> Result<GetUserPlaylistsResponse, CatalogError> {
        self.get_user_playlists_page(url).await
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist, CatalogError> {
        self.get_playlist(playlist_id).await
    }

    async fn playlist_tracks_page(&self, url: &str) -> Result<PlaylistTracksPage, CatalogError> {
        self.get_playlist_tracks_page(url).await
    }

    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, CatalogError> {
        self.get_several_audio_features(ids).await
    }

    async fn albums(&self, ids: &[String]) -> Result<Vec<Option<AlbumDate>>, CatalogError> {
        self.get_several_albums(ids).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, CatalogError> {
        self.create(user_id, request).await
    }

    async fn replace_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        self.replace_tracks(playlist_id, uris).await
    }

    async fn append_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        self.add_tracks(playlist_id, uris).await
    }
}
