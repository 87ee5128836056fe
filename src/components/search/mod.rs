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

//! Search form state and filter record construction.
//!
//! This module holds the query input and the three filter enumerations, and
//! produces a complete filter record on submission. Submission requires a
//! non-empty trimmed query; there is no debouncing and no further validation.

mod event;
mod render;

use tui_input::Input;

use crate::model::{DEFAULT_MAX_RESULTS, DurationFilter, SearchFilters, SortOrder, UploadDate};

/// User intent reported by the search form.
#[derive(Debug, PartialEq)]
pub(crate) enum SearchAction {
    /// Enter was pressed with a non-empty trimmed query.
    Submit(SearchFilters),
    /// One of the filter enumerations was cycled.
    FiltersChanged,
}

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) duration: DurationFilter,
    pub(crate) upload_date: UploadDate,
    pub(crate) order: SortOrder,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            duration: DurationFilter::default(),
            upload_date: UploadDate::default(),
            order: SortOrder::default(),
        }
    }

    /// The current form state as a filter record, or `None` while the trimmed
    /// query is empty.
    pub(crate) fn filters(&self) -> Option<SearchFilters> {
        let query = self.input.value().trim();
        if query.is_empty() {
            return None;
        }

        Some(SearchFilters::new(
            query.to_string(),
            self.duration,
            self.upload_date,
            self.order,
            DEFAULT_MAX_RESULTS,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_MAX_RESULTS;

    fn view_with_query(query: &str) -> SearchView {
        let mut view = SearchView::new();
        view.input = Input::new(query.to_string());
        view
    }

    #[test]
    fn filters_carry_form_state_and_default_cap() {
        let mut view = view_with_query("daft punk");
        view.duration = DurationFilter::Short;
        view.order = SortOrder::ViewCount;

        let filters = view.filters().unwrap();

        assert_eq!(filters.query, "daft punk");
        assert_eq!(filters.duration, DurationFilter::Short);
        assert_eq!(filters.upload_date, UploadDate::Any);
        assert_eq!(filters.order, SortOrder::ViewCount);
        assert_eq!(filters.max_results, DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn query_is_trimmed_before_submission() {
        let view = view_with_query("  hello world  ");
        assert_eq!(view.filters().unwrap().query, "hello world");
    }

    #[test]
    fn empty_or_whitespace_query_yields_no_filters() {
        assert_eq!(view_with_query("").filters(), None);
        assert_eq!(view_with_query("   ").filters(), None);
    }
}
