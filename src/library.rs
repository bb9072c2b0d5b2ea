//! The music library seen by the rotation policy and the CLI flow.
//!
//! Remote state (liked tracks, playlists) is reached only through
//! [`MusicLibrary`]. [`crate::spotify::SpotifyClient`] implements it against
//! the Web API; tests implement it in memory.

use async_trait::async_trait;

use crate::{
    Res,
    errors::SpotlikeError,
    types::{Playlist, Track},
};

#[async_trait]
pub trait MusicLibrary: Send + Sync {
    /// Returns the track that is playing right now, or `None` when nothing is.
    async fn current_track(&self) -> Res<Option<Track>>;

    async fn is_track_liked(&self, track_id: &str) -> Res<bool>;

    /// Saves the track to the user's liked songs unconditionally.
    async fn save_track(&self, track_id: &str) -> Res<()>;

    /// Lists every playlist in the user's library.
    async fn playlists(&self) -> Res<Vec<Playlist>>;

    async fn create_playlist(&self, name: &str) -> Res<Playlist>;

    async fn delete_playlist(&self, playlist: &Playlist) -> Res<()>;

    async fn playlist_tracks(&self, playlist: &Playlist) -> Res<Vec<Track>>;

    /// Appends tracks to a playlist without any duplicate check.
    async fn append_tracks(&self, playlist: &Playlist, tracks: &[Track]) -> Res<()>;

    /// Likes the track unless it already is. Returns whether a write happened.
    async fn like_track(&self, track: &Track) -> Res<bool> {
        if self.is_track_liked(&track.id).await? {
            return Ok(false);
        }
        self.save_track(&track.id).await?;
        Ok(true)
    }

    async fn find_playlist_by_name(&self, name: &str) -> Res<Option<Playlist>> {
        Ok(self.playlists().await?.into_iter().find(|p| p.name == name))
    }

    async fn contains_track(&self, playlist: &Playlist, track: &Track) -> Res<bool> {
        Ok(self
            .playlist_tracks(playlist)
            .await?
            .iter()
            .any(|t| t.uri == track.uri))
    }

    /// Adds tracks to a playlist.
    ///
    /// A single track that is already present fails with
    /// [`SpotlikeError::Duplicate`] and nothing is written.
    async fn add_tracks(&self, playlist: &Playlist, tracks: &[Track]) -> Res<()> {
        if let [track] = tracks {
            if self.contains_track(playlist, track).await? {
                return Err(SpotlikeError::Duplicate(format!(
                    "{} by {}",
                    track.name, track.artist
                )));
            }
        }
        if tracks.is_empty() {
            return Ok(());
        }
        self.append_tracks(playlist, tracks).await
    }
}
