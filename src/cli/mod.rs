//! # CLI Module
//!
//! User-facing commands of fairshuffle. Each command builds a
//! [`SpotifyClient`], drives the [`pipeline`](crate::pipeline) and renders the
//! result as a table.
//!
//! ## Commands
//!
//! - [`list_playlists`] - Lists the current user's playlists that have tracks
//! - [`show`] - Loads a playlist, reorders it and prints the sorted, filtered view
//! - [`save`] - Loads, reorders and writes the view back, to a new playlist or
//!   over the original
//!
//! ## Usage Patterns
//!
//! ```bash
//! fairshuffle playlists
//! fairshuffle show 37i9dQZF1DXcBWIGoYBM5M
//! fairshuffle show 37i9dQZF1DXcBWIGoYBM5M --sort bpm --min-bpm 120 --max-bpm 130
//! fairshuffle save 37i9dQZF1DXcBWIGoYBM5M                 # new "… ordered by artist separation"
//! fairshuffle save 37i9dQZF1DXcBWIGoYBM5M --overwrite
//! ```
//!
//! ## Error Handling
//!
//! Commands print pipeline errors with the `error!` macro and exit with
//! status 1. Nothing is retried.

mod playlists;
mod save;
mod show;

pub use playlists::fetch_listable_playlists;
pub use playlists::list_playlists;
pub use save::save;
pub use show::show;

use crate::{error, management, spotify::SpotifyClient};

async fn connect() -> SpotifyClient {
    match management::load_credentials().await {
        Ok(credentials) => SpotifyClient::new(credentials),
        Err(e) => {
            error!(
                "No Spotify credentials. Set SPOTIFY_ACCESS_TOKEN or provide a cached token.\n Error: {}",
                e
            );
        }
    }
}
