use chrono::Utc;
use reqwest::StatusCode;

use super::{SpotifyClient, ensure_success};
use crate::{
    Res,
    types::{PlaybackState, Track},
};

impl SpotifyClient {
    /// Retrieves the track that is currently playing for the user.
    ///
    /// Reads the playback state from `GET /me/player` and applies
    /// [`track_from_playback`] with the configured staleness tolerance.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Track))` - A track is playing, or was paused very recently
    /// - `Ok(None)` - No active device, an ad or episode is playing, or playback is stale
    /// - `Err(SpotlikeError)` - The API call failed
    pub async fn fetch_current_track(&self) -> Res<Option<Track>> {
        let url = self.url("/me/player");
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token())
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let playback = ensure_success(response)
            .await?
            .json::<PlaybackState>()
            .await?;

        Ok(track_from_playback(
            playback,
            Utc::now().timestamp_millis(),
            self.playback_tolerance_secs,
        ))
    }
}

/// Decides whether a playback state counts as a currently playing track.
///
/// A paused player still counts for `tolerance_secs` after its last state
/// change, so a track that was paused right before invoking the tool is
/// still picked up. Ads and local files carry no usable track.
pub fn track_from_playback(
    playback: PlaybackState,
    now_ms: i64,
    tolerance_secs: u64,
) -> Option<Track> {
    let elapsed_ms = now_ms.saturating_sub(playback.timestamp);
    if !playback.is_playing && elapsed_ms > tolerance_secs as i64 * 1000 {
        return None;
    }

    playback.item?.into_track()
}
