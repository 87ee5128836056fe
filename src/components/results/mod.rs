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

//! Search results view and track selection management.
//!
//! This module owns the result list lifecycle. States in priority order:
//! not-yet-searched (nothing rendered), loading (skeleton placeholders),
//! failed (the error message), empty, and populated with a grid-or-list
//! layout toggle.
//!
//! Failed requests are never retried automatically. A load-more hint is shown
//! when the returned count reaches the requested cap; it is inert since no
//! pagination is wired.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::Track;

/// Lifecycle of the result list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ResultsState {
    /// No search has been triggered yet.
    Idle,
    /// A search is in flight.
    Loading,
    /// The last search was rejected or never produced a usable response.
    Failed(String),
    /// The last search returned (possibly zero) tracks.
    Loaded,
}

/// Layout for the populated state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ViewMode {
    Grid,
    List,
}

impl ViewMode {
    fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// User intent reported by the results view.
#[derive(Debug, PartialEq)]
pub(crate) enum ResultsAction {
    Select(Track),
    Download(Track),
}

pub(crate) struct ResultsView {
    pub(crate) state: ResultsState,
    pub(crate) tracks: Vec<Track>,
    pub(crate) view_mode: ViewMode,
    pub(crate) table_state: TableState,
    /// The cap requested by the search that produced the current list.
    requested: u32,
}

impl ResultsView {
    pub(crate) fn new() -> Self {
        Self {
            state: ResultsState::Idle,
            tracks: vec![],
            view_mode: ViewMode::Grid,
            table_state: TableState::new(),
            requested: 0,
        }
    }

    /// Enters the loading state ahead of a new search.
    pub(crate) fn begin_search(&mut self, requested: u32) {
        self.state = ResultsState::Loading;
        self.tracks.clear();
        self.table_state = TableState::new();
        self.requested = requested;
    }

    pub(crate) fn set_tracks(&mut self, tracks: Vec<Track>) {
        self.state = ResultsState::Loaded;
        self.tracks = tracks;
        self.table_state
            .select((!self.tracks.is_empty()).then_some(0));
    }

    pub(crate) fn set_failed(&mut self, message: String) {
        self.state = ResultsState::Failed(message);
        self.tracks.clear();
        self.table_state = TableState::new();
    }

    /// Whether a search has ever been triggered; filter changes only re-issue
    /// a search after this is true.
    pub(crate) fn has_searched(&self) -> bool {
        self.state != ResultsState::Idle
    }

    /// Whether the inert load-more hint should be shown: the backend returned
    /// at least as many tracks as were requested.
    pub(crate) fn more_available(&self) -> bool {
        self.state == ResultsState::Loaded
            && !self.tracks.is_empty()
            && self.tracks.len() as u32 >= self.requested
    }

    pub(crate) fn selected_track(&self) -> Option<&Track> {
        self.table_state
            .selected()
            .and_then(|i| self.tracks.get(i))
    }

    pub(crate) fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(self.tracks.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(n: usize) -> Track {
        Track {
            id: n.to_string(),
            title: format!("Track {}", n),
            artist: "Artist".to_string(),
            duration: "3:00".to_string(),
            thumbnail: String::new(),
            video_id: format!("v{}", n),
            view_count: "1K views".to_string(),
            published_at: "1 year ago".to_string(),
        }
    }

    fn loaded_view(count: usize, requested: u32) -> ResultsView {
        let mut view = ResultsView::new();
        view.begin_search(requested);
        view.set_tracks((0..count).map(track).collect());
        view
    }

    #[test]
    fn begin_search_clears_previous_results() {
        let mut view = loaded_view(3, 20);

        view.begin_search(20);

        assert_eq!(view.state, ResultsState::Loading);
        assert!(view.tracks.is_empty());
        assert_eq!(view.table_state.selected(), None);
    }

    #[test]
    fn loading_results_selects_the_first_track() {
        let view = loaded_view(3, 20);
        assert_eq!(view.selected_track().unwrap().video_id, "v0");
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut view = loaded_view(3, 20);

        view.goto_previous();
        assert_eq!(view.table_state.selected(), Some(2));
        view.goto_next();
        assert_eq!(view.table_state.selected(), Some(0));

        view.goto_last();
        assert_eq!(view.table_state.selected(), Some(2));
        view.goto_first();
        assert_eq!(view.table_state.selected(), Some(0));
    }

    #[test]
    fn navigation_is_inert_without_results() {
        let mut view = ResultsView::new();
        view.goto_next();
        view.goto_previous();
        assert_eq!(view.table_state.selected(), None);
    }

    #[test]
    fn more_hint_only_when_cap_reached() {
        assert!(loaded_view(20, 20).more_available());
        assert!(!loaded_view(7, 20).more_available());
        assert!(!loaded_view(0, 20).more_available());

        let mut failed = ResultsView::new();
        failed.begin_search(20);
        failed.set_failed("boom".to_string());
        assert!(!failed.more_available());
    }

    #[test]
    fn has_searched_tracks_the_trigger() {
        let mut view = ResultsView::new();
        assert!(!view.has_searched());

        view.begin_search(20);
        assert!(view.has_searched());
    }

    #[test]
    fn failure_replaces_any_previous_results() {
        let mut view = loaded_view(5, 20);
        view.set_failed("quota exceeded".to_string());

        assert_eq!(view.state, ResultsState::Failed("quota exceeded".to_string()));
        assert!(view.tracks.is_empty());
        assert_eq!(view.selected_track(), None);
    }
}
