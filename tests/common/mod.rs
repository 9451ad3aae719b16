#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use reqwest::StatusCode;

use fairshuffle::{
    error::CatalogError,
    spotify::Catalog,
    types::{
        AlbumDate, AlbumRef, ArtistRef, AudioFeatures, CreatePlaylistRequest,
        GetUserPlaylistsResponse, Owner, Playlist, PlaylistItem, PlaylistTracksPage,
        PlaylistTracksSummary, Track, UserProfile,
    },
};

pub const API_URL: &str = "https://catalog.test/v1";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Page(String),
    Albums(Vec<String>),
    Features(Vec<String>),
    Create(String),
    Replace(String, usize),
    Append(String, usize),
}

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub user: Option<UserProfile>,
    pub user_pages: HashMap<String, GetUserPlaylistsResponse>,
    pub playlists: HashMap<String, Playlist>,
    pub pages: HashMap<String, PlaylistTracksPage>,
    pub features: HashMap<String, AudioFeatures>,
    pub album_dates: HashMap<String, String>,
    pub fail_albums: bool,
    pub fail_features: bool,
    pub fail_create: bool,
    /// Index of the write call (replace or append) that fails.
    pub fail_write: Option<usize>,

    calls: Mutex<Vec<Call>>,
    writes: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn album_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Albums(ids) => Some(ids),
                _ => None,
            })
            .collect()
    }

    pub fn feature_calls(&self) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Features(ids) => Some(ids),
                _ => None,
            })
            .collect()
    }

    /// Highest number of lookups or writes observed in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn in_flight<T>(&self, result: T) -> T {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn write(&self, call: Call) -> Result<(), CatalogError> {
        self.record(call);
        let n = self.writes.fetch_add(1, Ordering::SeqCst);
        let result = if self.fail_write == Some(n) {
            Err(failure("tracks"))
        } else {
            Ok(())
        };
        self.in_flight(result).await
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    fn api_url(&self) -> &str {
        API_URL
    }

    async fn current_user(&self) -> Result<UserProfile, CatalogError> {
        self.user.clone().ok_or_else(|| failure("me"))
    }

    async fn user_playlists_page(
        &self,
        url: &str,
    ) -> Result<GetUserPlaylistsResponse, CatalogError> {
        self.user_pages.get(url).cloned().ok_or_else(|| failure(url))
    }

    async fn playlist(&self, playlist_id: &str) -> Result<Playlist, CatalogError> {
        self.playlists
            .get(playlist_id)
            .cloned()
            .ok_or_else(|| failure(playlist_id))
    }

    async fn playlist_tracks_page(&self, url: &str) -> Result<PlaylistTracksPage, CatalogError> {
        self.record(Call::Page(url.to_string()));
        self.pages.get(url).cloned().ok_or_else(|| failure(url))
    }

    async fn audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, CatalogError> {
        self.record(Call::Features(ids.to_vec()));
        let result = if self.fail_features {
            Err(failure("audio-features"))
        } else {
            Ok(ids.iter().map(|id| self.features.get(id).cloned()).collect())
        };
        self.in_flight(result).await
    }

    async fn albums(&self, ids: &[String]) -> Result<Vec<Option<AlbumDate>>, CatalogError> {
        self.record(Call::Albums(ids.to_vec()));
        let result = if self.fail_albums {
            Err(failure("albums"))
        } else {
            Ok(ids
                .iter()
                .map(|id| {
                    self.album_dates.get(id).map(|date| AlbumDate {
                        id: id.clone(),
                        release_date: date.clone(),
                    })
                })
                .collect())
        };
        self.in_flight(result).await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<Playlist, CatalogError> {
        self.record(Call::Create(request.name.clone()));
        if self.fail_create {
            return Err(failure("playlists"));
        }
        Ok(playlist("created", &request.name, user_id, 0))
    }

    async fn replace_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        self.write(Call::Replace(playlist_id.to_string(), uris.len()))
            .await
    }

    async fn append_playlist_tracks(
        &self,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<(), CatalogError> {
        self.write(Call::Append(playlist_id.to_string(), uris.len()))
            .await
    }
}

pub fn failure(url: &str) -> CatalogError {
    CatalogError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        url: url.to_string(),
    }
}

pub fn playlist(id: &str, name: &str, owner: &str, total: u64) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
        public: Some(false),
        owner: Owner {
            id: owner.to_string(),
            display_name: None,
        },
        uri: format!("spotify:playlist:{id}"),
        tracks: PlaylistTracksSummary { total },
    }
}

pub fn track(id: &str, artist: &str, album: &str) -> Track {
    Track {
        id: Some(id.to_string()),
        name: format!("Song {id}"),
        artists: vec![ArtistRef {
            id: None,
            name: artist.to_string(),
        }],
        album: AlbumRef {
            id: Some(album.to_string()),
            name: format!("Album {album}"),
        },
        popularity: 10,
        preview_url: None,
        duration_ms: 200_000,
        uri: format!("spotify:track:{id}"),
        enrichment: Default::default(),
        fair_order: None,
    }
}

pub fn item(track: Track) -> PlaylistItem {
    PlaylistItem {
        track: Some(track),
        is_local: false,
    }
}

pub fn page(items: Vec<PlaylistItem>, next: Option<&str>) -> PlaylistTracksPage {
    PlaylistTracksPage {
        items,
        next: next.map(str::to_string),
    }
}

pub fn features(id: &str, tempo: f64) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        tempo,
        energy: 0.5,
        ..Default::default()
    }
}

pub fn uris(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("spotify:track:{i}")).collect()
}
