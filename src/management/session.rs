use crate::{
    management::AlbumDateIndex,
    types::{Playlist, PlaylistEntry},
};

/// Working state of one run: the playlist being edited, its entries, and the
/// album date index.
///
/// Entries are discarded whenever a different playlist is started; the album
/// date index is kept for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<Playlist>,
    entries: Vec<PlaylistEntry>,
    album_dates: AlbumDateIndex,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `playlist` the working playlist and drops entries of the previous one.
    pub fn begin(&mut self, playlist: Playlist) {
        self.entries.clear();
        self.current = Some(playlist);
    }

    pub fn current(&self) -> Option<&Playlist> {
        self.current.as_ref()
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn album_dates(&self) -> &AlbumDateIndex {
        &self.album_dates
    }

    /// Mutable access to entries and the album index at the same time, as the
    /// walker needs both.
    pub fn working_set(&mut self) -> (&mut Vec<PlaylistEntry>, &mut AlbumDateIndex) {
        (&mut self.entries, &mut self.album_dates)
    }
}
