use std::{fmt, path::PathBuf};

use chrono::{NaiveDate, Utc};

use super::connect;
use crate::{
    Res,
    errors::SpotlikeError,
    failure, info,
    library::MusicLibrary,
    management::{PlaylistRotation, RotationPolicy},
    success,
    types::Track,
    utils,
};

/// What a single run ended with. Its `Display` form is the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotPlaying,
    Added { track: Track, playlists: Vec<String> },
    AlreadyPresent { track: Track },
    /// The run failed after authenticating; reported, but not fatal.
    Failed(String),
    /// No access token could be obtained; the run is aborted.
    Aborted(String),
}

impl Outcome {
    /// Exit status reported to the invoking host.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Aborted(_) => 1,
            _ => 0,
        }
    }
}

impl From<SpotlikeError> for Outcome {
    fn from(e: SpotlikeError) -> Self {
        if e.is_fatal() {
            Outcome::Aborted(e.to_string())
        } else {
            Outcome::Failed(e.to_string())
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotPlaying => write!(f, "there isn't a track playing"),
            Outcome::Added { track, playlists } => write!(
                f,
                "added {} to your playlist ({})",
                utils::describe_track(track),
                playlists.join(", ")
            ),
            Outcome::AlreadyPresent { track } => write!(
                f,
                "{} is already in your playlist",
                utils::describe_track(track)
            ),
            Outcome::Failed(e) | Outcome::Aborted(e) => write!(f, "there was an error: {}", e),
        }
    }
}

/// Likes the current track and files it into the rotation playlists.
///
/// Runs every step in order: read playback, like (skipped when the track is
/// already liked), resolve the rotation targets, add the track where it is
/// missing. Nothing is cached between runs, so running twice for the same
/// track and date ends in [`Outcome::AlreadyPresent`].
pub async fn file_current_track<L: MusicLibrary>(
    library: &L,
    policy: RotationPolicy,
    today: NaiveDate,
) -> Res<Outcome> {
    let Some(track) = library.current_track().await? else {
        return Ok(Outcome::NotPlaying);
    };

    if library.like_track(&track).await? {
        log::info!("liked {}", utils::describe_track(&track));
    }

    let filing = PlaylistRotation::new(library, policy, today)
        .file_track(&track)
        .await?;

    if filing.is_duplicate() {
        Ok(Outcome::AlreadyPresent { track })
    } else {
        Ok(Outcome::Added {
            track,
            playlists: filing.added_to,
        })
    }
}

pub async fn add(date: Option<NaiveDate>, policy: RotationPolicy, output_file: Option<PathBuf>) {
    let today = date.unwrap_or_else(|| Utc::now().date_naive());

    let outcome = match connect().await {
        Ok(client) => file_current_track(&client, policy, today)
            .await
            .unwrap_or_else(Outcome::from),
        // without a token nothing else can run
        Err(e) => Outcome::Aborted(e.to_string()),
    };

    report(&outcome, output_file).await;
}

async fn report(outcome: &Outcome, output_file: Option<PathBuf>) {
    if let Some(path) = output_file {
        if let Err(e) = async_fs::write(&path, format!("{}\n", outcome)).await {
            log::warn!("cannot write status to {}: {}", path.display(), e);
        }
    }

    match outcome {
        Outcome::Added { .. } => success!("{}", outcome),
        Outcome::NotPlaying | Outcome::AlreadyPresent { .. } => info!("{}", outcome),
        Outcome::Failed(_) | Outcome::Aborted(_) => failure!("{}", outcome),
    }

    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
}
