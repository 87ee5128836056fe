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

//! Input handling and event processing for the results view.
//!
//! This module maps raw terminal keyboard events to list navigation, the
//! view-mode toggle, and the per-track select and download actions.

use crossterm::event::{Event, KeyCode};

use crate::components::{ResultsAction, ResultsView};

impl ResultsView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<ResultsAction> {
        // Internal events
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
                KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
                KeyCode::Char('g') => self.goto_first(),
                KeyCode::Char('G') => self.goto_last(),

                KeyCode::Char('v') => self.toggle_view_mode(),

                _ => {}
            },

            _ => {}
        }

        // External events that result in an action
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Enter => self.selected_track().cloned().map(ResultsAction::Select),
                KeyCode::Char('d') => self.selected_track().cloned().map(ResultsAction::Download),

                _ => None,
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::{components::results::ViewMode, model::Track};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view_with_tracks(count: usize) -> ResultsView {
        let mut view = ResultsView::new();
        view.begin_search(20);
        view.set_tracks(
            (0..count)
                .map(|n| Track {
                    id: n.to_string(),
                    title: format!("Track {}", n),
                    artist: "Artist".to_string(),
                    duration: "3:00".to_string(),
                    thumbnail: String::new(),
                    video_id: format!("v{}", n),
                    view_count: "1K views".to_string(),
                    published_at: "1 year ago".to_string(),
                })
                .collect(),
        );
        view
    }

    #[test]
    fn enter_selects_the_highlighted_track() {
        let mut view = view_with_tracks(3);
        view.process_event(&key(KeyCode::Char('j')));

        match view.process_event(&key(KeyCode::Enter)) {
            Some(ResultsAction::Select(track)) => assert_eq!(track.video_id, "v1"),
            other => panic!("expected select, got {:?}", other),
        }
    }

    #[test]
    fn download_targets_the_highlighted_track() {
        let mut view = view_with_tracks(2);

        match view.process_event(&key(KeyCode::Char('d'))) {
            Some(ResultsAction::Download(track)) => assert_eq!(track.video_id, "v0"),
            other => panic!("expected download, got {:?}", other),
        }
    }

    #[test]
    fn actions_require_a_selection() {
        let mut view = ResultsView::new();
        assert_eq!(view.process_event(&key(KeyCode::Enter)), None);
        assert_eq!(view.process_event(&key(KeyCode::Char('d'))), None);
    }

    #[test]
    fn view_mode_toggles_between_grid_and_list() {
        let mut view = view_with_tracks(1);
        assert_eq!(view.view_mode, ViewMode::Grid);

        view.process_event(&key(KeyCode::Char('v')));
        assert_eq!(view.view_mode, ViewMode::List);

        view.process_event(&key(KeyCode::Char('v')));
        assert_eq!(view.view_mode, ViewMode::Grid);
    }
}
