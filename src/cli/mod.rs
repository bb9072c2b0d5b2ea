//! # CLI Module
//!
//! This module provides the command-line interface layer for spotlike. It
//! implements all user-facing commands and coordinates between the Spotify
//! client, the playlist rotation and the user's terminal.
//!
//! ## Command Categories
//!
//! - [`add`] - Likes the current track and files it into the rotation playlists
//! - [`current`] - Shows the track that is currently playing
//! - [`playlists`] - Lists the month and year playlists managed by the rotation
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Playlist Rotation)
//!     ↓
//! MusicLibrary (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! ## Output
//!
//! The `add` command prints exactly one status line, which is what the
//! invoking environment (a shortcut, a cron job, a hotkey daemon) shows to
//! the user. Progress of the rotation itself is only visible through
//! `RUST_LOG=info`.

mod add;
mod current;
mod playlists;

pub use add::{Outcome, add, file_current_track};
pub use current::{current, now_playing};
pub use playlists::playlists;

use crate::{Res, config, spotify::SpotifyClient};

async fn connect() -> Res<SpotifyClient> {
    let credentials = config::credentials()?;
    SpotifyClient::connect(&credentials).await
}
