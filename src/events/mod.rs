// Copyright (C) 2026  Tunescout contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application logic, event handling, and task dispatching.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. It organizes how various inputs (keyboard, playback engine,
//! task worker results) are translated into internal state changes.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers tasks on background workers (HTTP, audio player).
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
use handlers::*;

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, Focus,
    components::{ResultsAction, SearchAction},
    model::{SearchFilters, Track},
    player::PlayerState,
    render::draw,
};

const VOLUME_DELTA: i64 = 5;

const FINE_SEEK_PERCENT: i64 = 5;
const SEEK_PERCENT: i64 = 20;

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    NewSearch(SearchFilters),
    SearchResultsReady(Vec<Track>),
    SearchFailed(String),

    SelectTrack(Track),
    DownloadTrack(Track),
    DownloadFinished(String),
    DownloadFailed(String),

    PlayerStateChanged(PlayerState),
    DurationChanged(u64),
    TimeChanged(f64),
    TrackFinished,
    PlaybackFailed(String),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::NewSearch(filters) => handle_new_search(app, filters)?,
            AppEvent::SearchResultsReady(tracks) => handle_search_results_ready(app, tracks),
            AppEvent::SearchFailed(message) => handle_search_failed(app, message),

            AppEvent::SelectTrack(track) => handle_select_track(app, track)?,
            AppEvent::DownloadTrack(track) => handle_download_track(app, track)?,
            AppEvent::DownloadFinished(filename) => handle_download_finished(app, filename),
            AppEvent::DownloadFailed(message) => handle_download_failed(app, message),

            AppEvent::PlayerStateChanged(state) => handle_player_state_changed(app, state),
            AppEvent::DurationChanged(duration) => handle_duration_changed(app, duration),
            AppEvent::TimeChanged(seconds) => handle_time_changed(app, seconds),
            AppEvent::TrackFinished => handle_track_finished(app)?,
            AppEvent::PlaybackFailed(message) => handle_playback_failed(app, message)?,

            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => handle_fatal_error(app, message),

            AppEvent::Tick | _ => handle_tick(app),
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions and playback commands.
///
/// Input is routed by focus: the search form consumes printable keys while it
/// is focused, so transport shortcuts only apply while the results view has
/// focus. `Tab` switches focus either way.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Tab | KeyCode::Esc) {
        app.focus = match app.focus {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Search,
        };
        return Ok(());
    }

    match app.focus {
        Focus::Search => {
            let event = Event::Key(key);
            if let Some(action) = app.search_view.process_event(&event) {
                match action {
                    SearchAction::Submit(filters) => {
                        app.focus = Focus::Results;
                        app.event_tx.send(AppEvent::NewSearch(filters))?;
                    }
                    SearchAction::FiltersChanged => {
                        // Changing a filter re-issues the search, but only
                        // once a search has been triggered and the query is
                        // still non-empty.
                        if app.results_view.has_searched() {
                            if let Some(filters) = app.search_view.filters() {
                                app.event_tx.send(AppEvent::NewSearch(filters))?;
                            }
                        }
                    }
                }
            }
        }
        Focus::Results => {
            if let Some(action) = app.results_view.process_event(&Event::Key(key)) {
                match action {
                    ResultsAction::Select(track) => {
                        app.event_tx.send(AppEvent::SelectTrack(track))?
                    }
                    ResultsAction::Download(track) => {
                        app.event_tx.send(AppEvent::DownloadTrack(track))?
                    }
                }
                return Ok(());
            }

            process_global_key_event(app, key)?;
        }
    }

    Ok(())
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        KeyCode::Char('/') => app.focus = Focus::Search,

        // Playback controls
        KeyCode::Char(' ') => toggle_play_pause(app)?,
        KeyCode::Char(',') => seek_by_percent(app, -FINE_SEEK_PERCENT)?,
        KeyCode::Char('.') => seek_by_percent(app, FINE_SEEK_PERCENT)?,
        KeyCode::Char('<') => seek_by_percent(app, -SEEK_PERCENT)?,
        KeyCode::Char('>') => seek_by_percent(app, SEEK_PERCENT)?,
        KeyCode::Char('-') => adjust_volume(app, -VOLUME_DELTA)?,
        KeyCode::Char('=') => adjust_volume(app, VOLUME_DELTA)?,

        // Mode toggles, indicator-only
        KeyCode::Char('x') => app.transport.toggle_shuffle(),
        KeyCode::Char('r') => app.transport.cycle_repeat(),

        // Download the track in the player bar
        KeyCode::Char('D') => {
            if let Some(track) = app.current_track.clone() {
                app.event_tx.send(AppEvent::DownloadTrack(track))?;
            }
        }

        _ => {}
    }

    Ok(())
}

/// Flips the desired-playing flag and tells the engine to match it.
fn toggle_play_pause(app: &mut App) -> Result<()> {
    if app.current_track.is_none() {
        return Ok(());
    }

    app.is_playing = !app.is_playing;
    app.audio_player.set_paused(!app.is_playing)?;

    Ok(())
}

/// Seeks relative to the current position by a percentage of the duration.
///
/// The new position is applied to the transport immediately (optimistic, not
/// confirmed by an engine event) and then to the engine.
fn seek_by_percent(app: &mut App, delta: i64) -> Result<()> {
    if app.current_track.is_none() || app.transport.duration == 0 {
        return Ok(());
    }

    let current = (app.transport.elapsed * 100 / app.transport.duration) as i64;
    let percent = (current + delta).clamp(0, 100) as u64;

    let target = app.transport.seek_target(percent);
    app.transport.elapsed = target;
    app.audio_player.seek_to(target)?;

    Ok(())
}

/// Adjusts the volume percentage, applied optimistically to the transport and
/// then to the engine. Volume persists across track changes.
fn adjust_volume(app: &mut App, delta: i64) -> Result<()> {
    let volume = (app.transport.volume as i64 + delta).clamp(0, 100) as u32;
    app.transport.volume = volume;
    app.audio_player.set_volume(volume)?;

    Ok(())
}
