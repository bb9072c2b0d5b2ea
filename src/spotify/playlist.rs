use super::{SpotifyClient, ensure_success};
use crate::{
    Res,
    types::{
        AddTrackToPlaylistRequest, ApiPlaylist, CreatePlaylistRequest, CurrentUser,
        GetPlaylistTracksResponse, GetUserPlaylistsResponse, Playlist, Track,
    },
};

/// Spotify accepts at most this many URIs per add request.
const ADD_TRACKS_CHUNK: usize = 100;

impl SpotifyClient {
    /// Lists all playlists in the user's library, following `next` links.
    pub async fn fetch_playlists(&self) -> Res<Vec<Playlist>> {
        let mut playlists = Vec::new();
        let mut next = Some(self.url("/me/playlists?limit=50"));

        while let Some(url) = next {
            log::debug!("GET {}", url);
            let response = self
                .http
                .get(&url)
                .bearer_auth(self.access_token())
                .send()
                .await?;

            let page = ensure_success(response)
                .await?
                .json::<GetUserPlaylistsResponse>()
                .await?;

            playlists.extend(page.items.into_iter().map(Playlist::from));
            next = page.next;
        }

        Ok(playlists)
    }

    pub async fn fetch_current_user(&self) -> Res<CurrentUser> {
        let url = self.url("/me");
        log::debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.access_token())
            .send()
            .await?;

        Ok(ensure_success(response)
            .await?
            .json::<CurrentUser>()
            .await?)
    }

    /// Creates a private playlist owned by the current user.
    pub async fn post_playlist(&self, name: &str) -> Res<Playlist> {
        let user = self.fetch_current_user().await?;
        let url = self.url(&format!("/users/{}/playlists", user.id));
        log::debug!("POST {} name={}", url, name);

        let response = self
            .http
            .post(&url)
            .bearer_auth(self.access_token())
            .json(&CreatePlaylistRequest {
                name: name.to_string(),
                description: format!("Tracks liked in {}", name),
                public: false,
            })
            .send()
            .await?;

        let created = ensure_success(response)
            .await?
            .json::<ApiPlaylist>()
            .await?;

        Ok(created.into())
    }

    /// Spotify has no hard delete; unfollowing removes the playlist from the library.
    pub async fn unfollow_playlist(&self, playlist: &Playlist) -> Res<()> {
        let url = self.url(&format!("/playlists/{}/followers", playlist.id));
        log::debug!("DELETE {}", url);
        let response = self
            .http
            .delete(&url)
            .bearer_auth(self.access_token())
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }

    pub async fn fetch_playlist_tracks(&self, playlist: &Playlist) -> Res<Vec<Track>> {
        let mut tracks = Vec::new();
        let mut next = Some(self.url(&format!("/playlists/{}/tracks?limit=100", playlist.id)));

        while let Some(url) = next {
            log::debug!("GET {}", url);
            let response = self
                .http
                .get(&url)
                .bearer_auth(self.access_token())
                .send()
                .await?;

            let page = ensure_success(response)
                .await?
                .json::<GetPlaylistTracksResponse>()
                .await?;

            // removed and local tracks come back without a usable track object
            tracks.extend(
                page.items
                    .into_iter()
                    .filter_map(|item| item.track.and_then(|t| t.into_track())),
            );
            next = page.next;
        }

        Ok(tracks)
    }

    pub async fn post_playlist_tracks(&self, playlist: &Playlist, tracks: &[Track]) -> Res<()> {
        let url = self.url(&format!("/playlists/{}/tracks", playlist.id));

        for chunk in tracks.chunks(ADD_TRACKS_CHUNK) {
            log::debug!("POST {} ({} tracks)", url, chunk.len());
            let response = self
                .http
                .post(&url)
                .bearer_auth(self.access_token())
                .json(&AddTrackToPlaylistRequest {
                    uris: chunk.iter().map(|t| t.uri.clone()).collect(),
                })
                .send()
                .await?;

            ensure_success(response).await?;
        }

        Ok(())
    }
}
