use super::connect;
use crate::{Res, error, info, library::MusicLibrary, success, utils};

pub async fn current() {
    let client = match connect().await {
        Ok(client) => client,
        Err(e) => error!("there was an error: {}", e),
    };

    match now_playing(&client).await {
        Ok(Some(line)) => success!("{}", line),
        Ok(None) => info!("there isn't a track playing"),
        Err(e) => error!("there was an error: {}", e),
    }
}

/// Describes the playing track, marking it when it is already liked.
///
/// A failed liked lookup only drops the marker.
pub async fn now_playing<L: MusicLibrary>(library: &L) -> Res<Option<String>> {
    let Some(track) = library.current_track().await? else {
        return Ok(None);
    };

    let liked = match library.is_track_liked(&track.id).await {
        Ok(liked) => liked,
        Err(e) => {
            log::warn!("cannot tell whether {} is liked: {}", track.id, e);
            false
        }
    };

    Ok(Some(format!(
        "now playing {}{}",
        utils::describe_track(&track),
        if liked { " (liked)" } else { "" }
    )))
}
