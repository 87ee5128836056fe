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

//! Render the music player bar.
//!
//! This module renders the visual representation of the current track,
//! playback state, mode indicators, volume and progress gauges.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    player::{PlayerState, RepeatMode},
    render::icons::{ICON_PAUSE, ICON_PLAY, ICON_REPEAT, ICON_REPEAT_ONE, ICON_SHUFFLE, ICON_STOP},
    util,
};

/// Renders the player bar including track info, mode indicators and gauges.
pub(crate) fn draw_player(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner_area);

    let info_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(30)])
        .split(chunks[0]);

    if let Some(track) = &app.current_track {
        let icon = match app.player_state {
            PlayerState::Playing => ICON_PLAY,
            PlayerState::Paused => ICON_PAUSE,
            PlayerState::Idle => ICON_STOP,
        };

        let track_line = Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().add_modifier(Modifier::BOLD))
                .fg(Color::White),
            Span::styled(&track.title, Style::default().add_modifier(Modifier::BOLD))
                .fg(app.theme.accent_colour),
            Span::raw(" by "),
            Span::styled(&track.artist, Style::default().add_modifier(Modifier::BOLD))
                .fg(app.theme.accent_colour),
        ]);
        f.render_widget(Paragraph::new(track_line), info_chunks[0]);

        let duration = app.transport.duration;
        let elapsed = app.transport.elapsed;
        let remaining = duration.saturating_sub(elapsed);

        let time_line = Line::from(vec![
            Span::styled(
                util::format::format_time(elapsed),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(app.theme.accent_colour),
            Span::styled(" / ", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::styled(
                util::format::format_time(duration),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(app.theme.accent_colour),
            Span::styled(" (-", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
            Span::styled(
                util::format::format_time(remaining),
                Style::default().add_modifier(Modifier::BOLD),
            )
            .fg(app.theme.accent_colour),
            Span::styled(")", Style::default().add_modifier(Modifier::BOLD)).fg(Color::White),
        ]);

        let time_p = Paragraph::new(time_line).alignment(Alignment::Right);

        f.render_widget(time_p, info_chunks[1]);
    } else {
        let hint = Paragraph::new(" Nothing playing - select a track from the results")
            .style(Style::default().fg(app.theme.hint_colour));
        f.render_widget(hint, info_chunks[0]);
    }

    let control_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(26)])
        .split(chunks[2]);

    draw_mode_indicators(f, control_chunks[0], app);

    let volume = app.transport.volume;
    let vol_ratio = (volume as f64 / 100.0).clamp(0.0, 1.0);

    let volume_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(control_chunks[1]);

    let volume_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(vol_ratio)
        .label("")
        .use_unicode(true);
    f.render_widget(volume_gauge, volume_layout[0]);

    let volume_label = Paragraph::new(format!(" {}%", volume))
        .alignment(Alignment::Right)
        .fg(Color::White);
    f.render_widget(volume_label, volume_layout[1]);

    let position = app.transport.position();

    let position_gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .bg(app.theme.gauge_track_colour),
        )
        .ratio(position)
        .label("")
        .use_unicode(true);

    f.render_widget(position_gauge, chunks[4]);
}

/// Shuffle and repeat indicators. Both are visual only: shuffle reorders
/// nothing and repeat loops nothing.
fn draw_mode_indicators(f: &mut Frame, area: Rect, app: &App) {
    let shuffle_colour = if app.transport.shuffle {
        app.theme.accent_colour
    } else {
        app.theme.hint_colour
    };

    let (repeat_icon, repeat_colour) = match app.transport.repeat {
        RepeatMode::Off => (ICON_REPEAT, app.theme.hint_colour),
        RepeatMode::All => (ICON_REPEAT, app.theme.accent_colour),
        RepeatMode::One => (ICON_REPEAT_ONE, app.theme.accent_colour),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {} ", ICON_SHUFFLE), Style::default().fg(shuffle_colour)),
        Span::styled(format!(" {} ", repeat_icon), Style::default().fg(repeat_colour)),
        Span::styled(
            format!("repeat {}", app.transport.repeat.label()),
            Style::default().fg(repeat_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
