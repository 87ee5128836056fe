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

//! Input handling for the search form.
//!
//! This module maps raw terminal keyboard events to query editing, filter
//! cycling, and submission.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchView};

impl SearchView {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => self.filters().map(SearchAction::Submit),

            (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                self.duration = self.duration.cycle();
                Some(SearchAction::FiltersChanged)
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.upload_date = self.upload_date.cycle();
                Some(SearchAction::FiltersChanged)
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.order = self.order.cycle();
                Some(SearchAction::FiltersChanged)
            }

            _ => {
                // Delegate everything else to the managed input component.
                self.input.handle_event(event);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::model::{DurationFilter, SortOrder, UploadDate};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn type_text(view: &mut SearchView, text: &str) {
        for c in text.chars() {
            view.process_event(&key(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn enter_with_typed_query_submits_one_filter_record() {
        let mut view = SearchView::new();
        type_text(&mut view, "aphex twin");

        let action = view.process_event(&key(KeyCode::Enter, KeyModifiers::NONE));

        match action {
            Some(SearchAction::Submit(filters)) => {
                assert_eq!(filters.query, "aphex twin");
                assert_eq!(filters.max_results, 20);
            }
            other => panic!("expected submit, got {:?}", other),
        }
    }

    #[test]
    fn enter_with_empty_query_submits_nothing() {
        let mut view = SearchView::new();
        assert_eq!(view.process_event(&key(KeyCode::Enter, KeyModifiers::NONE)), None);

        type_text(&mut view, "   ");
        assert_eq!(view.process_event(&key(KeyCode::Enter, KeyModifiers::NONE)), None);
    }

    #[test]
    fn control_keys_cycle_the_filter_enumerations() {
        let mut view = SearchView::new();

        let action = view.process_event(&key(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(action, Some(SearchAction::FiltersChanged));
        assert_eq!(view.duration, DurationFilter::Short);

        view.process_event(&key(KeyCode::Char('e'), KeyModifiers::CONTROL));
        assert_eq!(view.upload_date, UploadDate::Hour);

        view.process_event(&key(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(view.order, SortOrder::Date);
    }
}
