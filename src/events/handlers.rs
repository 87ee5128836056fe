use anyhow::Result;
use tracing::{error, info};

use crate::{
    App, Notice, api,
    model::{SearchFilters, Track},
    player::PlayerState,
    tasks::AppTask,
};

pub(super) fn handle_new_search(app: &mut App, filters: SearchFilters) -> Result<()> {
    info!(query = %filters.query, "search requested");
    app.results_view.begin_search(filters.max_results);
    app.task_tx.send(AppTask::Search(filters))?;

    Ok(())
}

pub(super) fn handle_search_results_ready(app: &mut App, tracks: Vec<Track>) {
    app.results_view.set_tracks(tracks);
}

pub(super) fn handle_search_failed(app: &mut App, message: String) {
    app.results_view.set_failed(message.clone());
    app.notice = Some(Notice::error(message));
}

pub(super) fn handle_select_track(app: &mut App, track: Track) -> Result<()> {
    // Position and duration reset before the new source is attached; the
    // volume carries over and is re-applied to the fresh source.
    app.transport.reset_for_track();

    let url = api::stream_url(&app.config.api_base_url, &track.video_id);
    app.audio_player.load(&url)?;
    app.audio_player.set_volume(app.transport.volume)?;

    app.is_playing = true;
    app.current_track = Some(track);

    Ok(())
}

pub(super) fn handle_download_track(app: &mut App, track: Track) -> Result<()> {
    app.notice = Some(Notice::info(format!("Downloading \"{}\"...", track.title)));
    app.task_tx.send(AppTask::Download(track))?;

    Ok(())
}

pub(super) fn handle_download_finished(app: &mut App, filename: String) {
    app.notice = Some(Notice::info(format!("Download complete: {}", filename)));
}

pub(super) fn handle_download_failed(app: &mut App, message: String) {
    app.notice = Some(Notice::error(message));
}

pub(super) fn handle_player_state_changed(app: &mut App, state: PlayerState) {
    app.player_state = state;
}

pub(super) fn handle_duration_changed(app: &mut App, duration: u64) {
    app.transport.duration = duration;
}

pub(super) fn handle_time_changed(app: &mut App, seconds: f64) {
    app.transport.elapsed = seconds as u64;
}

pub(super) fn handle_track_finished(app: &mut App) -> Result<()> {
    app.transport.elapsed = app.transport.duration;

    // End of track acts as an implicit play/pause toggle request. It does not
    // advance to another track.
    app.is_playing = !app.is_playing;
    app.audio_player.set_paused(!app.is_playing)?;

    Ok(())
}

pub(super) fn handle_playback_failed(app: &mut App, message: String) -> Result<()> {
    error!(%message, "playback failed");
    app.notice = Some(Notice::error(message));

    // Keep the UI honest: a playing indicator must never outlive the engine.
    app.is_playing = false;
    app.audio_player.set_paused(true)?;

    Ok(())
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.notice = Some(Notice::error(message));
}

pub(super) fn handle_fatal_error(app: &mut App, message: String) {
    error!(%message, "fatal error");
    app.notice = Some(Notice::error(message));
}

pub(super) fn handle_tick(app: &mut App) {
    if let Some(notice) = &mut app.notice {
        notice.ttl = notice.ttl.saturating_sub(1);
        if notice.ttl == 0 {
            app.notice = None;
        }
    }
}
