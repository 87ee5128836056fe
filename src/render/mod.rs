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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change to provide a reactive user interface.

mod icons;
mod player;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus, NoticeKind, render::player::draw_player};

/// Renders the user interface to the terminal frame.
///
/// The page is a fixed vertical composition: the search form on top, the
/// results in the middle, the player bar docked at the bottom, and a one-line
/// footer for transient notices.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(7),
            Constraint::Length(1),
        ])
        .split(area);

    app.search_view
        .draw(f, outer[0], &app.theme, app.focus == Focus::Search);

    app.results_view.draw(f, outer[1], &app.theme);

    draw_player(f, outer[2], app);

    draw_notice(f, outer[3], app);
}

/// Renders the transient footer notice, if one is active.
fn draw_notice(f: &mut Frame, area: Rect, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let colour = match notice.kind {
        NoticeKind::Info => app.theme.notice_info_colour,
        NoticeKind::Error => app.theme.notice_error_colour,
    };

    f.render_widget(
        Paragraph::new(notice.text.as_str()).style(Style::default().fg(colour)),
        area,
    );
}
