use spotlike::{spotify::player::track_from_playback, types::PlaybackState};

const NOW_MS: i64 = 1_700_000_000_000;

fn playback(is_playing: bool, age_ms: i64) -> PlaybackState {
    serde_json::from_value(serde_json::json!({
        "is_playing": is_playing,
        "timestamp": NOW_MS - age_ms,
        "item": {
            "id": "4uLU6hMCjMI75M1A2tKUQC",
            "name": "Never Gonna Give You Up",
            "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
            "artists": [{ "name": "Rick Astley" }, { "name": "Someone Else" }]
        }
    }))
    .unwrap()
}

#[test]
fn test_playing_track_is_decoded() {
    let track = track_from_playback(playback(true, 600_000), NOW_MS, 10)
        .expect("track is playing");

    assert_eq!(track.id, "4uLU6hMCjMI75M1A2tKUQC");
    assert_eq!(track.name, "Never Gonna Give You Up");
    assert_eq!(track.artist, "Rick Astley");
    assert_eq!(track.uri, "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_recently_paused_track_still_counts() {
    let track = track_from_playback(playback(false, 5_000), NOW_MS, 10);
    assert!(track.is_some());
}

#[test]
fn test_stale_paused_track_is_ignored() {
    let track = track_from_playback(playback(false, 10_001), NOW_MS, 10);
    assert!(track.is_none());

    let track = track_from_playback(playback(false, 10_001), NOW_MS, 30);
    assert!(track.is_some());
}

#[test]
fn test_missing_item_is_ignored() {
    let state: PlaybackState = serde_json::from_value(serde_json::json!({
        "is_playing": true,
        "timestamp": NOW_MS,
        "currently_playing_type": "ad",
        "item": null
    }))
    .unwrap();

    assert!(track_from_playback(state, NOW_MS, 10).is_none());
}

#[test]
fn test_local_file_without_id_is_ignored() {
    let state: PlaybackState = serde_json::from_value(serde_json::json!({
        "is_playing": true,
        "timestamp": NOW_MS,
        "item": {
            "id": null,
            "name": "bootleg.mp3",
            "uri": "spotify:local:::bootleg:180",
            "artists": []
        }
    }))
    .unwrap();

    assert!(track_from_playback(state, NOW_MS, 10).is_none());
}
