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

//! Audio playback control and state management.
//!
//! This module provides the high-level [`AudioPlayer`] interface used by the
//! UI to control streaming playback, plus the [`Transport`] struct that owns
//! the per-track position, volume and mode toggles. It manages a background
//! worker thread that interfaces with the underlying audio library (MPV),
//! ensuring that heavy audio operations do not block the main application
//! thread.

mod commands;

use std::sync::mpsc;

use anyhow::Result;

use crate::{events::AppEvent, player::commands::AudioPlayerCommand};

/// Initial volume applied before the user touches the volume controls.
pub(crate) const DEFAULT_VOLUME: u32 = 70;

/// Represents the current playback status of the audio engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Idle,
    Playing,
    Paused,
}

/// Repeat mode indicator, cycled off → all → one → off.
///
/// Indicator only: track advancement is not wired, matching the behavior of
/// the track-finished handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum RepeatMode {
    #[default]
    Off,
    All,
    One,
}

impl RepeatMode {
    pub(crate) fn cycle(self) -> Self {
        match self {
            Self::Off => Self::All,
            Self::All => Self::One,
            Self::One => Self::Off,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::All => "all",
            Self::One => "one",
        }
    }
}

/// Transport state for the active track: elapsed time, duration, volume and
/// the shuffle/repeat toggles.
///
/// Elapsed time and duration are reset whenever the current track changes;
/// volume, shuffle and repeat survive track changes.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Transport {
    pub(crate) elapsed: u64,
    pub(crate) duration: u64,
    pub(crate) volume: u32,
    pub(crate) shuffle: bool,
    pub(crate) repeat: RepeatMode,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            elapsed: 0,
            duration: 0,
            volume: DEFAULT_VOLUME,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }
}

impl Transport {
    /// Resets the per-track state ahead of attaching a new source.
    pub(crate) fn reset_for_track(&mut self) {
        self.elapsed = 0;
        self.duration = 0;
    }

    /// Converts a percentage-of-duration seek input to an absolute position
    /// in seconds.
    pub(crate) fn seek_target(&self, percent: u64) -> u64 {
        self.duration * percent.min(100) / 100
    }

    /// The elapsed position as a fraction of the duration, for progress
    /// gauges.
    pub(crate) fn position(&self) -> f64 {
        if self.duration > 0 {
            (self.elapsed as f64 / self.duration as f64).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub(crate) fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    pub(crate) fn cycle_repeat(&mut self) {
        self.repeat = self.repeat.cycle();
    }
}

/// A handle to the audio playback engine.
///
/// This struct acts as a command proxy; it does not perform audio processing
/// itself but instead sends instructions to a background worker thread.
pub(crate) struct AudioPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<AudioPlayerCommand>,
}

impl AudioPlayer {
    /// Spawns the audio worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send application-level events (like progress
    ///   updates or errors) back to the main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<AudioPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Ok(Self { command_tx })
    }

    // Maps internal audio backend flags to a simplified [`PlayerState`].
    fn player_state(is_paused: bool, is_idle: bool) -> PlayerState {
        if is_idle {
            PlayerState::Idle
        } else if is_paused {
            PlayerState::Paused
        } else {
            PlayerState::Playing
        }
    }

    /// Instructs the worker to attach and play a streaming source URL.
    pub(crate) fn load(&self, url: &str) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::Load(url.to_string()))?;
        Ok(())
    }

    /// Pauses or resumes playback of the attached source.
    pub(crate) fn set_paused(&self, paused: bool) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::SetPause(paused))?;
        Ok(())
    }

    /// Seeks to an absolute position in seconds.
    pub(crate) fn seek_to(&self, seconds: u64) -> Result<()> {
        self.command_tx.send(AudioPlayerCommand::SeekTo(seconds))?;
        Ok(())
    }

    /// Sets the playback volume as a percentage.
    pub(crate) fn set_volume(&self, volume: u32) -> Result<()> {
        self.command_tx
            .send(AudioPlayerCommand::SetVolume(volume))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_cycles_back_to_off_after_three_toggles() {
        let mut transport = Transport::default();

        transport.cycle_repeat();
        assert_eq!(transport.repeat, RepeatMode::All);
        transport.cycle_repeat();
        assert_eq!(transport.repeat, RepeatMode::One);
        transport.cycle_repeat();
        assert_eq!(transport.repeat, RepeatMode::Off);
    }

    #[test]
    fn seek_target_converts_percentage_to_seconds() {
        let transport = Transport {
            duration: 200,
            ..Transport::default()
        };

        assert_eq!(transport.seek_target(50), 100);
        assert_eq!(transport.seek_target(0), 0);
        assert_eq!(transport.seek_target(100), 200);
        // Inputs past the end clamp to the duration.
        assert_eq!(transport.seek_target(150), 200);
    }

    #[test]
    fn seek_target_is_zero_without_a_duration() {
        let transport = Transport::default();
        assert_eq!(transport.seek_target(50), 0);
    }

    #[test]
    fn track_change_resets_position_but_keeps_volume() {
        let mut transport = Transport {
            elapsed: 93,
            duration: 180,
            volume: 40,
            shuffle: true,
            repeat: RepeatMode::All,
        };

        transport.reset_for_track();

        assert_eq!(transport.elapsed, 0);
        assert_eq!(transport.duration, 0);
        assert_eq!(transport.volume, 40);
        assert!(transport.shuffle);
        assert_eq!(transport.repeat, RepeatMode::All);
    }

    #[test]
    fn position_fraction_handles_zero_duration() {
        let mut transport = Transport::default();
        assert_eq!(transport.position(), 0.0);

        transport.duration = 200;
        transport.elapsed = 50;
        assert_eq!(transport.position(), 0.25);
    }

    #[test]
    fn backend_flags_map_to_player_state() {
        assert_eq!(AudioPlayer::player_state(false, true), PlayerState::Idle);
        assert_eq!(AudioPlayer::player_state(true, false), PlayerState::Paused);
        assert_eq!(AudioPlayer::player_state(false, false), PlayerState::Playing);
    }
}
