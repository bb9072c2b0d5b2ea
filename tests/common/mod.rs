#![allow(dead_code)]

pub mod stub;

use std::{collections::HashSet, sync::Mutex};

use async_trait::async_trait;
use spotlike::{
    Res,
    errors::SpotlikeError,
    library::MusicLibrary,
    types::{Playlist, Track},
};

#[derive(Default)]
pub struct State {
    pub playing: Option<Track>,
    pub liked: HashSet<String>,
    pub playlists: Vec<(Playlist, Vec<Track>)>,
    pub next_id: usize,
    pub writes: Vec<String>,
    pub fail_delete: bool,
    pub fail_listing: bool,
    pub fail_liked: bool,
    pub broken_playlist: Option<String>,
}

/// In-memory stand-in for the Spotify library that records every write.
#[derive(Default)]
pub struct FakeLibrary {
    pub state: Mutex<State>,
}

pub fn track(id: &str, name: &str, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
        uri: format!("spotify:track:{}", id),
    }
}

impl FakeLibrary {
    pub fn playing(track: Track) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().playing = Some(track);
        fake
    }

    pub fn with_playlist(self, name: &str, tracks: Vec<Track>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_id += 1;
            let playlist = Playlist {
                id: format!("pl{}", state.next_id),
                name: name.to_string(),
            };
            state.playlists.push((playlist, tracks));
        }
        self
    }

    pub fn with_liked(self, track_id: &str) -> Self {
        self.state.lock().unwrap().liked.insert(track_id.to_string());
        self
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .state
            .lock()
            .unwrap()
            .playlists
            .iter()
            .map(|(p, _)| p.name.clone())
            .collect();
        names.sort();
        names
    }

    pub fn track_ids(&self, name: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .playlists
            .iter()
            .find(|(p, _)| p.name == name)
            .map(|(_, tracks)| tracks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    pub fn writes(&self) -> Vec<String> {
        self.state.lock().unwrap().writes.clone()
    }

    pub fn playlist(&self, name: &str) -> Playlist {
        self.state
            .lock()
            .unwrap()
            .playlists
            .iter()
            .find(|(p, _)| p.name == name)
            .map(|(p, _)| p.clone())
            .expect("playlist exists")
    }
}

fn not_found(id: &str) -> SpotlikeError {
    SpotlikeError::Api {
        status: 404,
        body: format!("playlist {} not found", id),
    }
}

#[async_trait]
impl MusicLibrary for FakeLibrary {
    async fn current_track(&self) -> Res<Option<Track>> {
        Ok(self.state.lock().unwrap().playing.clone())
    }

    async fn is_track_liked(&self, track_id: &str) -> Res<bool> {
        let state = self.state.lock().unwrap();
        if state.fail_liked {
            return Err(SpotlikeError::Api {
                status: 502,
                body: "bad gateway".to_string(),
            });
        }
        Ok(state.liked.contains(track_id))
    }

    async fn save_track(&self, track_id: &str) -> Res<()> {
        let mut state = self.state.lock().unwrap();
        state.liked.insert(track_id.to_string());
        state.writes.push(format!("like {}", track_id));
        Ok(())
    }

    async fn playlists(&self) -> Res<Vec<Playlist>> {
        let state = self.state.lock().unwrap();
        if state.fail_listing {
            return Err(SpotlikeError::Api {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(state.playlists.iter().map(|(p, _)| p.clone()).collect())
    }

    async fn create_playlist(&self, name: &str) -> Res<Playlist> {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let playlist = Playlist {
            id: format!("pl{}", state.next_id),
            name: name.to_string(),
        };
        state.playlists.push((playlist.clone(), Vec::new()));
        state.writes.push(format!("create {}", name));
        Ok(playlist)
    }

    async fn delete_playlist(&self, playlist: &Playlist) -> Res<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_delete {
            return Err(SpotlikeError::Api {
                status: 403,
                body: "forbidden".to_string(),
            });
        }
        state.playlists.retain(|(p, _)| p.id != playlist.id);
        state.writes.push(format!("delete {}", playlist.name));
        Ok(())
    }

    async fn playlist_tracks(&self, playlist: &Playlist) -> Res<Vec<Track>> {
        let state = self.state.lock().unwrap();
        if state.broken_playlist.as_deref() == Some(playlist.name.as_str()) {
            return Err(SpotlikeError::Api {
                status: 500,
                body: format!("cannot read {}", playlist.name),
            });
        }
        state
            .playlists
            .iter()
            .find(|(p, _)| p.id == playlist.id)
            .map(|(_, tracks)| tracks.clone())
            .ok_or_else(|| not_found(&playlist.id))
    }

    async fn append_tracks(&self, playlist: &Playlist, tracks: &[Track]) -> Res<()> {
        let mut state = self.state.lock().unwrap();
        let (_, existing) = state
            .playlists
            .iter_mut()
            .find(|(p, _)| p.id == playlist.id)
            .ok_or_else(|| not_found(&playlist.id))?;
        existing.extend_from_slice(tracks);
        state
            .writes
            .push(format!("append {} {}", playlist.name, tracks.len()));
        Ok(())
    }
}
