//! # Spotify Integration Module
//!
//! The catalog side of fairshuffle. Everything the pipeline needs from the
//! Spotify Web API goes through the [`Catalog`] trait, so the pipeline can be
//! driven by [`SpotifyClient`] in production and by an in-memory fake in tests.
//!
//! ## Architecture
//!
//! ```text
//! CLI
//!  ↓
//! Pipeline (walker, batch fetcher, merger, reorder, save)
//!  ↓
//! Catalog trait
//!  ↓
//! SpotifyClient (reqwest, JSON, bearer credential)
//!  ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - current user profile
//! - `GET /users/{user_id}/playlists` - the user's playlists, paginated via `next`
//! - `GET /playlists/{playlist_id}` - single playlist descriptor
//! - `GET /playlists/{playlist_id}/tracks?limit=50` - playlist entries, paginated via `next`
//! - `GET /audio-features?ids=...` - batch audio features
//! - `GET /albums?ids=...` - batch album lookup (at most 20 ids)
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `PUT /playlists/{playlist_id}/tracks` - replace contents (at most 100 uris)
//! - `POST /playlists/{playlist_id}/tracks` - append (at most 100 uris)
//!
//! ## Error Handling
//!
//! Every call returns [`CatalogError`]. Nothing is retried: rate limiting (429)
//! and server errors are surfaced to the caller, which decides what a failure
//! means for the operation as a whole.
//!
//! ## Authentication
//!
//! Bearer credentials come from a [`CredentialProvider`](crate::management::CredentialProvider);
//! [`auth`] only implements the token refresh used by the cached token manager.

pub mod albums;
pub mod auth;
pub mod client;
pub mod features;
pub mod playlist;
pub mod user;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{
    error::CatalogError,
    types::{
        AlbumDate, AudioFeatures, CreatePlaylistRequest, GetUserPlaylistsResponse, Playlist,
        PlaylistTracksPage, UserProfile,
    },
};

/// Request/response contract of the remote catalog consumed by the pipeline.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Base URL that relative API paths are joined onto.
    fn api_url(&self) -> &str;

    async fn current_user(&self) -> Result<UserProfile, CatalogError>;

    /// Fetches one page of the user's playlists from an absolute URL.
    async fn user_playlists_page(&self, url: &str)
    -> Result<GetUserPlaylistsResponse, CatalogError>;

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist, CatalogError>;

    /// Fetches one page of playlist entries from an absolute URL (first page or `next`).
    async fn playlist_tracks_page(&self, url: &str) -> Result<PlaylistTracksPage, CatalogError>;

    /// Looks up audio features; missing tracks come back as `None`.
    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, CatalogError>;

    /// Looks up albums (at most 20 ids); unknown albums come back as `None`.
    async fn albums(&self, ids: &[String]) -> Result<Vec<Option<AlbumDate>>, CatalogError>;

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, CatalogError>;

    /// Replaces the whole playlist content with `uris` (at most 100).
    async fn replace_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError>;

    /// Appends `uris` (at most 100) to the end of the playlist.
    async fn append_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError>;
}
