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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application: tracks as
//! returned by the backend search API, the filter record submitted to it,
//! and the account schema shared with the backend.
//!
//! All wire-facing types use camelCase field names to match the backend
//! contract.

use serde::{Deserialize, Serialize};

/// Default result cap submitted by the search form.
pub(crate) const DEFAULT_MAX_RESULTS: u32 = 20;

/// Upper bound the backend accepts for the result cap.
pub(crate) const MAX_RESULTS_LIMIT: u32 = 50;

/// A playable unit of audio metadata sourced from the backend catalog.
///
/// Tracks are immutable once fetched; every field arrives verbatim from the
/// search response, including the human-readable duration and view-count
/// strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) duration: String,
    pub(crate) thumbnail: String,
    pub(crate) video_id: String,
    pub(crate) view_count: String,
    pub(crate) published_at: String,
}

/// The validated query parameters submitted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchFilters {
    pub(crate) query: String,
    pub(crate) duration: DurationFilter,
    pub(crate) upload_date: UploadDate,
    pub(crate) order: SortOrder,
    pub(crate) max_results: u32,
}

impl SearchFilters {
    /// Builds a filter record, clamping the result cap to the range the
    /// backend accepts.
    pub(crate) fn new(
        query: String,
        duration: DurationFilter,
        upload_date: UploadDate,
        order: SortOrder,
        max_results: u32,
    ) -> Self {
        Self {
            query,
            duration,
            upload_date,
            order,
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum DurationFilter {
    #[default]
    Any,
    Short,
    Medium,
    Long,
}

impl DurationFilter {
    pub(crate) fn cycle(self) -> Self {
        match self {
            Self::Any => Self::Short,
            Self::Short => Self::Medium,
            Self::Medium => Self::Long,
            Self::Long => Self::Any,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Any => "Any Duration",
            Self::Short => "Under 4 minutes",
            Self::Medium => "4-20 minutes",
            Self::Long => "Over 20 minutes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum UploadDate {
    #[default]
    Any,
    Hour,
    Today,
    Week,
    Month,
    Year,
}

impl UploadDate {
    pub(crate) fn cycle(self) -> Self {
        match self {
            Self::Any => Self::Hour,
            Self::Hour => Self::Today,
            Self::Today => Self::Week,
            Self::Week => Self::Month,
            Self::Month => Self::Year,
            Self::Year => Self::Any,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Any => "Upload Date",
            Self::Hour => "Last hour",
            Self::Today => "Today",
            Self::Week => "This week",
            Self::Month => "This month",
            Self::Year => "This year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum SortOrder {
    #[default]
    Relevance,
    Date,
    ViewCount,
    Rating,
}

impl SortOrder {
    pub(crate) fn cycle(self) -> Self {
        match self {
            Self::Relevance => Self::Date,
            Self::Date => Self::ViewCount,
            Self::ViewCount => Self::Rating,
            Self::Rating => Self::Relevance,
        }
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::Date => "Upload date",
            Self::ViewCount => "View count",
            Self::Rating => "Rating",
        }
    }
}

/// Account record shared with the backend.
///
/// Schema scaffolding for a future login feature; nothing in the client reads
/// or writes it yet.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i32,
    pub(crate) username: String,
    pub(crate) password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters(max_results: u32) -> SearchFilters {
        SearchFilters::new(
            "lo-fi beats".to_string(),
            DurationFilter::Any,
            UploadDate::Week,
            SortOrder::ViewCount,
            max_results,
        )
    }

    #[test]
    fn filters_serialize_with_backend_field_names() {
        let json = serde_json::to_value(filters(DEFAULT_MAX_RESULTS)).unwrap();

        assert_eq!(json["query"], "lo-fi beats");
        assert_eq!(json["duration"], "any");
        assert_eq!(json["uploadDate"], "week");
        assert_eq!(json["order"], "viewCount");
        assert_eq!(json["maxResults"], 20);
    }

    #[test]
    fn max_results_is_clamped_to_backend_bounds() {
        assert_eq!(filters(0).max_results, 1);
        assert_eq!(filters(35).max_results, 35);
        assert_eq!(filters(200).max_results, 50);
    }

    #[test]
    fn track_deserializes_from_camel_case_wire_format() {
        let json = r#"{
            "id": "abc123",
            "title": "Midnight City",
            "artist": "M83",
            "duration": "4:03",
            "thumbnail": "https://img.example/abc123.jpg",
            "videoId": "dX3k_QDnzHE",
            "viewCount": "512M views",
            "publishedAt": "12 years ago"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();

        assert_eq!(track.video_id, "dX3k_QDnzHE");
        assert_eq!(track.view_count, "512M views");
        assert_eq!(track.published_at, "12 years ago");
    }

    #[test]
    fn duration_filter_cycles_through_all_buckets() {
        let mut filter = DurationFilter::Any;
        for _ in 0..4 {
            filter = filter.cycle();
        }
        assert_eq!(filter, DurationFilter::Any);
    }

    #[test]
    fn sort_order_cycles_through_all_orders() {
        let mut order = SortOrder::Relevance;
        for _ in 0..4 {
            order = order.cycle();
        }
        assert_eq!(order, SortOrder::Relevance);
    }
}
