use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;

use crate::{
    Res,
    errors::SpotlikeError,
    library::MusicLibrary,
    types::{Playlist, Track},
    utils,
};

/// How liked tracks are bucketed into playlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RotationPolicy {
    /// One playlist per calendar month, created on the first track of the month.
    Month,

    /// A month playlist plus a year archive. Stale month playlists are merged
    /// into their year archive and removed once a new month starts.
    #[default]
    #[value(name = "month-year")]
    MonthAndYear,
}

/// Result of filing one track into the rotation targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filing {
    pub added_to: Vec<String>,
    pub already_in: Vec<String>,
}

impl Filing {
    pub fn is_duplicate(&self) -> bool {
        self.added_to.is_empty()
    }
}

pub struct PlaylistRotation<'a, L: MusicLibrary> {
    library: &'a L,
    policy: RotationPolicy,
    today: NaiveDate,
}

impl<'a, L: MusicLibrary> PlaylistRotation<'a, L> {
    pub fn new(library: &'a L, policy: RotationPolicy, today: NaiveDate) -> Self {
        Self {
            library,
            policy,
            today,
        }
    }

    /// Resolves the playlists a track played today belongs in.
    ///
    /// Missing playlists are created. Under [`RotationPolicy::MonthAndYear`],
    /// a missing month playlist first sweeps every other month playlist
    /// into its year archive and removes it. A month earlier in the calendar
    /// than today belongs to this year; a later one to the previous year.
    pub async fn targets(&self) -> Res<Vec<Playlist>> {
        let playlists = self.library.playlists().await?;
        let month_name = utils::month_name(self.today);

        match self.policy {
            RotationPolicy::Month => {
                let month = self.find_or_create(&playlists, month_name).await?;
                Ok(vec![month])
            }
            RotationPolicy::MonthAndYear => {
                let year = self
                    .find_or_create(&playlists, &utils::year_name(self.today))
                    .await?;

                let month = match find(&playlists, month_name) {
                    Some(month) => month,
                    None => {
                        // the month playlist is the migration marker, so it
                        // only appears once the sweep went through
                        self.sweep(&playlists, &year).await?;
                        let month = self.library.create_playlist(month_name).await?;
                        log::info!("created playlist {}", month_name);
                        month
                    }
                };

                Ok(vec![month, year])
            }
        }
    }

    /// Adds the track to every target that does not hold it yet.
    pub async fn file_track(&self, track: &Track) -> Res<Filing> {
        let mut filing = Filing::default();

        for playlist in self.targets().await? {
            match self
                .library
                .add_tracks(&playlist, std::slice::from_ref(track))
                .await
            {
                Ok(()) => filing.added_to.push(playlist.name),
                Err(SpotlikeError::Duplicate(_)) => filing.already_in.push(playlist.name),
                Err(e) => return Err(e),
            }
        }

        Ok(filing)
    }

    /// Copies every track of `from` that `into` does not contain yet.
    ///
    /// Returns the number of tracks written.
    pub async fn merge(&self, from: &Playlist, into: &Playlist) -> Res<usize> {
        let existing = self.library.playlist_tracks(into).await?;
        let mut seen: HashSet<String> = existing.into_iter().map(|t| t.uri).collect();

        let missing: Vec<Track> = self
            .library
            .playlist_tracks(from)
            .await?
            .into_iter()
            .filter(|t| seen.insert(t.uri.clone()))
            .collect();

        if !missing.is_empty() {
            self.library.append_tracks(into, &missing).await?;
        }

        log::info!(
            "merged {} tracks from {} into {}",
            missing.len(),
            from.name,
            into.name
        );
        Ok(missing.len())
    }

    async fn sweep(&self, playlists: &[Playlist], current_year: &Playlist) -> Res<()> {
        let current_month = self.today.month();
        let mut archives = vec![current_year.clone()];

        for stale in playlists.iter() {
            let Some(month) = utils::month_number(&stale.name) else {
                continue;
            };
            if month == current_month {
                continue;
            }

            let year = if month < current_month {
                self.today.year()
            } else {
                self.today.year() - 1
            };
            let archive_name = year.to_string();

            let archive = match archives.iter().find(|a| a.name == archive_name) {
                Some(archive) => archive.clone(),
                None => {
                    let archive = self.find_or_create(playlists, &archive_name).await?;
                    archives.push(archive.clone());
                    archive
                }
            };

            self.merge(stale, &archive).await?;

            // deletion is best-effort, the tracks are already archived
            if let Err(e) = self.library.delete_playlist(stale).await {
                log::warn!("cannot delete playlist {}: {}", stale.name, e);
            }
        }

        Ok(())
    }

    async fn find_or_create(&self, playlists: &[Playlist], name: &str) -> Res<Playlist> {
        if let Some(playlist) = find(playlists, name) {
            return Ok(playlist);
        }

        let playlist = self.library.create_playlist(name).await?;
        log::info!("created playlist {}", name);
        Ok(playlist)
    }
}

fn find(playlists: &[Playlist], name: &str) -> Option<Playlist> {
    playlists.iter().find(|p| p.name == name).cloned()
}
