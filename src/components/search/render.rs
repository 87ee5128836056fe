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

//! UI rendering logic for the search form.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{components::SearchView, theme::Theme};

impl SearchView {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner_area);

        let input = Paragraph::new(self.input.value())
            .style(Style::default().fg(theme.input_colour));
        f.render_widget(input, chunks[0]);

        if focused {
            let cursor_x = chunks[0].x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, chunks[0].y));
        }

        let filter_line = Line::from(vec![
            Span::styled("^d ", Style::default().fg(theme.hint_colour)),
            Span::styled(
                self.duration.label(),
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("^e ", Style::default().fg(theme.hint_colour)),
            Span::styled(
                self.upload_date.label(),
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("^r ", Style::default().fg(theme.hint_colour)),
            Span::styled(
                self.order.label(),
                Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
            ),
        ]);

        f.render_widget(Paragraph::new(filter_line).fg(theme.hint_colour), chunks[1]);
    }
}
