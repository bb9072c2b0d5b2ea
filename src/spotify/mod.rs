//! # Spotify Integration Module
//!
//! This module is the HTTP client for the Spotify Web API. It refreshes the
//! access token once per run, issues every request with bearer authentication
//! and decodes responses into the plain records in [`crate::types`].
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (add, current, playlists)
//!          ↓
//! Playlist Rotation (management)
//!          ↓
//! MusicLibrary trait
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh token grant)
//!     ├── Player (currently playing)
//!     ├── Saved Tracks (liked songs)
//!     └── Playlist Operations (list, create, delete, read, add)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Refresh grant with basic client authentication
//! - `GET /me/player` - Playback state, 204 when nothing is active
//! - `GET /me/tracks/contains` / `PUT /me/tracks` - Liked songs
//! - `GET /me` - Current user id, needed to create playlists
//! - `GET /me/playlists` - User playlists, paginated via `next`
//! - `POST /users/{user_id}/playlists` - Create playlists
//! - `DELETE /playlists/{id}/followers` - Remove a playlist from the library
//! - `GET /playlists/{id}/tracks` / `POST /playlists/{id}/tracks` - Playlist items
//!
//! ## Error Handling
//!
//! Any unexpected HTTP status becomes [`SpotlikeError::Api`] carrying the
//! status code and response body. The client performs no retries; every call
//! is a single round trip awaited in order.

pub mod auth;
pub mod player;
pub mod playlist;
pub mod tracks;

use async_trait::async_trait;
use reqwest::{Client, Response};

use crate::{
    Res, config,
    errors::SpotlikeError,
    library::MusicLibrary,
    types::{Credentials, Playlist, Token, Track},
};

#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: Token,
    playback_tolerance_secs: u64,
}

impl SpotifyClient {
    /// Refreshes an access token and builds a client from the configured settings.
    ///
    /// The token obtained here is used for every later call of the run; it is
    /// never refreshed again nor written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`SpotlikeError::Auth`] when the token endpoint rejects the
    /// credentials and [`SpotlikeError::Http`] on network failures.
    pub async fn connect(credentials: &Credentials) -> Res<Self> {
        let http = Client::new();
        let token =
            auth::refresh_access_token(&http, &config::spotify_apitoken_url(), credentials).await?;

        Ok(Self::with_token(
            http,
            config::spotify_apiurl(),
            token,
            config::playback_tolerance_secs(),
        ))
    }

    pub fn with_token(
        http: Client,
        api_url: String,
        token: Token,
        playback_tolerance_secs: u64,
    ) -> Self {
        Self {
            http,
            api_url,
            token,
            playback_tolerance_secs,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn access_token(&self) -> &str {
        &self.token.access_token
    }
}

/// Passes successful responses through and turns everything else into
/// [`SpotlikeError::Api`].
pub(crate) async fn ensure_success(response: Response) -> Res<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    log::debug!("request failed with {}: {}", status, body);
    Err(SpotlikeError::Api {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl MusicLibrary for SpotifyClient {
    async fn current_track(&self) -> Res<Option<Track>> {
        self.fetch_current_track().await
    }

    async fn is_track_liked(&self, track_id: &str) -> Res<bool> {
        self.fetch_track_liked(track_id).await
    }

    async fn save_track(&self, track_id: &str) -> Res<()> {
        self.put_saved_track(track_id).await
    }

    async fn playlists(&self) -> Res<Vec<Playlist>> {
        self.fetch_playlists().await
    }

    async fn create_playlist(&self, name: &str) -> Res<Playlist> {
        self.post_playlist(name).await
    }

    async fn delete_playlist(&self, playlist: &Playlist) -> Res<()> {
        self.unfollow_playlist(playlist).await
    }

    async fn playlist_tracks(&self, playlist: &Playlist) -> Res<Vec<Track>> {
        self.fetch_playlist_tracks(playlist).await
    }

    async fn append_tracks(&self, playlist: &Playlist, tracks: &[Track]) -> Res<()> {
        self.post_playlist_tracks(playlist, tracks).await
    }
}
