use super::{SpotifyClient, ensure_success};
use crate::{Res, types::SaveTracksRequest};

impl SpotifyClient {
    pub async fn fetch_track_liked(&self, track_id: &str) -> Res<bool> {
        let url = self.url("/me/tracks/contains");
        log::debug!("GET {} ids={}", url, track_id);
        let response = self
            .http
            .get(&url)
            .query(&[("ids", track_id)])
            .bearer_auth(self.access_token())
            .send()
            .await?;

        let liked = ensure_success(response).await?.json::<Vec<bool>>().await?;

        Ok(liked.first().copied().unwrap_or(false))
    }

    pub async fn put_saved_track(&self, track_id: &str) -> Res<()> {
        let url = self.url("/me/tracks");
        log::debug!("PUT {} ids={}", url, track_id);
        let response = self
            .http
            .put(&url)
            .bearer_auth(self.access_token())
            .json(&SaveTracksRequest {
                ids: vec![track_id.to_string()],
            })
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
