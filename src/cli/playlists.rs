use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use super::connect;
use crate::{
    error, info,
    library::MusicLibrary,
    types::{Playlist, PlaylistTableRow},
    utils,
};

pub async fn playlists() {
    let client = match connect().await {
        Ok(client) => client,
        Err(e) => error!("there was an error: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching rotation playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let rows = match load_rows(&client).await {
        Ok(rows) => rows,
        Err(e) => {
            pb.finish_and_clear();
            error!("there was an error: {}", e);
        }
    };
    pb.finish_and_clear();

    if rows.is_empty() {
        info!("No month or year playlists yet");
        return;
    }

    println!("{}", Table::new(rows));
}

async fn load_rows<L: MusicLibrary>(library: &L) -> crate::Res<Vec<PlaylistTableRow>> {
    let mut managed: Vec<Playlist> = library
        .playlists()
        .await?
        .into_iter()
        .filter(|p| utils::is_rotation_name(&p.name))
        .collect();

    // years first, then months in calendar order
    managed.sort_by_key(|p| (utils::month_number(&p.name), p.name.clone()));

    let mut rows = Vec::with_capacity(managed.len());
    for playlist in managed {
        let tracks = library.playlist_tracks(&playlist).await?.len();
        rows.push(PlaylistTableRow {
            name: playlist.name,
            tracks,
            id: playlist.id,
        });
    }

    Ok(rows)
}
