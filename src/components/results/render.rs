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

//! UI rendering logic for the results view.
//!
//! Renders one of the lifecycle states: nothing, a fixed grid of skeleton
//! placeholders while loading, a failure or no-results message, or the track
//! list as a grid of cards or a table, with the inert load-more hint when the
//! returned count reached the requested cap.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{
    components::results::{ResultsState, ResultsView, ViewMode},
    theme::Theme,
};

const GRID_COLUMNS: usize = 4;
const CARD_HEIGHT: u16 = 5;
const SKELETON_CARDS: usize = 8;

impl ResultsView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        match self.state.clone() {
            ResultsState::Idle => {}
            ResultsState::Loading => self.draw_skeleton(f, area, theme),
            ResultsState::Failed(message) => self.draw_no_results(f, area, theme, &message),
            ResultsState::Loaded if self.tracks.is_empty() => {
                self.draw_no_results(f, area, theme, "Try adjusting your search terms or filters.");
            }
            ResultsState::Loaded => self.draw_results(f, area, theme),
        }
    }

    /// Placeholder cards shown while a search is in flight.
    fn draw_skeleton(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let style = Style::default().fg(theme.skeleton_colour);

        for cell in grid_cells(area, SKELETON_CARDS) {
            let block = Block::default().borders(Borders::ALL).border_style(style);
            let inner = block.inner(cell);
            f.render_widget(block, cell);

            f.render_widget(Paragraph::new("\u{2026}").style(style), inner);
        }
    }

    fn draw_no_results(&self, f: &mut Frame, area: Rect, theme: &Theme, detail: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new("No Results Found")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.card_title_colour));
        f.render_widget(title, chunks[1]);

        let detail = Paragraph::new(detail.to_string())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hint_colour));
        f.render_widget(detail, chunks[2]);
    }

    fn draw_results(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.draw_header(f, chunks[0], theme);

        match self.view_mode {
            ViewMode::Grid => self.draw_grid(f, chunks[1], theme),
            ViewMode::List => self.draw_list(f, chunks[1], theme),
        }

        if self.more_available() {
            // Inert hint, no pagination is wired behind it.
            let more = Paragraph::new("Load More Results")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.hint_colour));
            f.render_widget(more, chunks[2]);
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let mode = match self.view_mode {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        };

        let header = Line::from(vec![
            Span::styled(
                "Search Results ",
                Style::default().add_modifier(Modifier::BOLD).fg(theme.card_title_colour),
            ),
            Span::styled(
                format!("({} results)", self.tracks.len()),
                Style::default().fg(theme.hint_colour),
            ),
            Span::raw("  "),
            Span::styled(format!("[{}]", mode), Style::default().fg(theme.accent_colour)),
        ]);

        f.render_widget(Paragraph::new(header), area);
    }

    /// Track cards laid out in a fixed-column grid.
    fn draw_grid(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.table_state.selected();

        for (index, cell) in grid_cells(area, self.tracks.len()).into_iter().enumerate() {
            let Some(track) = self.tracks.get(index) else {
                break;
            };

            let is_selected = selected == Some(index);
            let border_colour = if is_selected {
                theme.accent_colour
            } else {
                theme.border_colour
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_colour));
            let inner = block.inner(cell);
            f.render_widget(block, cell);

            let lines = vec![
                Line::from(Span::styled(
                    track.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD).fg(theme.card_title_colour),
                )),
                Line::from(Span::styled(
                    track.artist.clone(),
                    Style::default().fg(theme.card_artist_colour),
                )),
                Line::from(vec![
                    Span::styled(track.duration.clone(), Style::default().fg(theme.card_meta_colour)),
                    Span::raw("  "),
                    Span::styled(track.view_count.clone(), Style::default().fg(theme.card_meta_colour)),
                ]),
            ];

            f.render_widget(Paragraph::new(lines), inner);
        }
    }

    /// Track rows in a single table, one track per line.
    fn draw_list(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.tracks.iter().map(|track| {
            Row::new(vec![
                Cell::from(
                    Line::from(track.duration.as_str())
                        .style(Style::default().fg(theme.card_meta_colour))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(track.artist.as_str())
                        .style(Style::default().fg(theme.card_artist_colour)),
                ),
                Cell::from(
                    Line::from(track.title.as_str())
                        .style(Style::default().fg(theme.card_title_colour)),
                ),
                Cell::from(
                    Line::from(track.view_count.as_str())
                        .style(Style::default().fg(theme.card_meta_colour)),
                ),
                Cell::from(
                    Line::from(track.published_at.as_str())
                        .style(Style::default().fg(theme.card_meta_colour)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(7),
                Constraint::Percentage(20),
                Constraint::Percentage(45),
                Constraint::Length(12),
                Constraint::Length(14),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Time").alignment(Alignment::Right)),
                Cell::from("Artist"),
                Cell::from("Title"),
                Cell::from("Views"),
                Cell::from("Published"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.selection_colour)
                .fg(theme.card_title_colour),
        )
        .block(Block::default());

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}

/// Splits an area into up to `count` card-sized cells, row by row.
fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    let rows_needed = count.div_ceil(GRID_COLUMNS) as u16;
    let visible_rows = (area.height / CARD_HEIGHT).min(rows_needed);

    let mut cells = Vec::new();

    let row_constraints: Vec<Constraint> =
        (0..visible_rows).map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for row in rows.iter() {
        let column_constraints: Vec<Constraint> = (0..GRID_COLUMNS)
            .map(|_| Constraint::Ratio(1, GRID_COLUMNS as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(column_constraints)
            .split(*row);

        for column in columns.iter() {
            if cells.len() < count {
                cells.push(*column);
            }
        }
    }

    cells
}
