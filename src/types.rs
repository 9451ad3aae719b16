use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbumRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
}

/// Audio feature record as returned by `/audio-features`.
///
/// Values are stored exactly as the catalog reports them; rounding happens
/// when rows are rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
    #[serde(default)]
    pub tempo: f64,
    #[serde(default)]
    pub energy: f64,
    #[serde(default)]
    pub danceability: f64,
    #[serde(default)]
    pub loudness: f64,
    #[serde(default)]
    pub valence: f64,
    #[serde(default)]
    pub duration_ms: f64,
    #[serde(default)]
    pub acousticness: f64,
}

/// Enrichment attached to a track by the merger.
///
/// `Empty` is an explicit marker: lookup found nothing for the track (or the
/// track is local and never looked up). It is never a failure.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Enrichment {
    #[default]
    Empty,
    Features(AudioFeatures),
}

impl Enrichment {
    pub fn features(&self) -> Option<&AudioFeatures> {
        match self {
            Enrichment::Features(f) => Some(f),
            Enrichment::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Enrichment::Empty)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: AlbumRef,
    #[serde(default)]
    pub popularity: u32,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub uri: String,

    #[serde(skip)]
    pub enrichment: Enrichment,
    /// Position assigned by the fairness reorder, `None` until computed.
    #[serde(skip)]
    pub fair_order: Option<usize>,
}

impl Track {
    /// Name of the first-listed artist, the only artist considered for fairness.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }
}

/// One row of the working playlist.
#[derive(Debug, Clone)]
pub struct PlaylistEntry {
    /// Index in the accumulated entry sequence, assigned once on insertion.
    pub which: usize,
    pub is_local: bool,
    pub release_date: Option<String>,
    pub rnd: u32,
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    #[serde(default)]
    pub track: Option<Track>,
    #[serde(default)]
    pub is_local: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeaturesResponse {
    #[serde(alias = "audio_attributes", default)]
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumDate {
    pub id: String,
    pub release_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetSeveralAlbumsResponse {
    pub albums: Vec<Option<AlbumDate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Owner {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTracksSummary {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub public: Option<bool>,
    pub owner: Owner,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub tracks: PlaylistTracksSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserPlaylistsResponse {
    pub items: Vec<Playlist>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotResponse {
    #[serde(default)]
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub tracks: u64,
    pub owner: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub order: String,
    pub title: String,
    pub artist: String,
    pub date: String,
    #[tabled(rename = "BPM")]
    pub bpm: String,
    pub energy: String,
    pub danceability: String,
    pub loudness: String,
    pub valence: String,
    pub duration: String,
    pub acousticness: String,
    pub popularity: String,
    #[tabled(rename = "artist separation")]
    pub separation: String,
    pub rnd: String,
}
