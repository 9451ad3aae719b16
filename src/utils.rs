use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{Owner, Playlist};

/// Formats whole seconds as `m:ss`.
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Owner column of the playlist listing: blank for the current user.
pub fn format_owner(owner: &Owner, current_user_id: &str) -> String {
    if owner.id == current_user_id {
        String::new()
    } else {
        owner.id.clone()
    }
}

/// Playlists without tracks are not worth listing.
pub fn is_listable(playlist: &Playlist) -> bool {
    playlist.tracks.total > 0
}

/// Name of the playlist a reordered copy is saved under.
pub fn reordered_playlist_name(original: &str, sort_name: &str) -> String {
    format!("{} ordered by {}", original, sort_name)
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Extracts a playlist id from a bare id, a `spotify:playlist:` URI or an
/// `open.spotify.com/playlist/` link.
pub fn parse_playlist_id(input: &str) -> String {
    let input = input.trim();
    if let Some(id) = input.strip_prefix("spotify:playlist:") {
        return id.to_string();
    }
    if let Some((_, rest)) = input.split_once("/playlist/") {
        return rest
            .split(['?', '/', '#'])
            .next()
            .unwrap_or_default()
            .to_string();
    }
    input.to_string()
}
