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

//! Backend search API client.
//!
//! This module wraps the three HTTP endpoints the backend exposes: track
//! search, audio streaming, and audio download. The search and download
//! operations are blocking and run on the task worker thread; the stream
//! endpoint is never fetched directly, its URL is handed to the playback
//! engine as a source.
//!
//! A non-success response surfaces the backend-provided `message` field when
//! present, with a generic fallback otherwise. The client never returns
//! partial data.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::{SearchFilters, Track};

const USER_AGENT: &str = concat!("tunescout/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SEARCH_FALLBACK: &str = "Failed to search for tracks";
const DOWNLOAD_FALLBACK: &str = "Download failed";

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Backend(String),

    /// The request never produced a usable response (connection, timeout,
    /// malformed body).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}

/// A handle to the backend search service.
pub(crate) struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the given backend base URL.
    pub(crate) fn new(base_url: &str) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Submits a filter record to the search endpoint and returns the
    /// matching tracks.
    pub(crate) fn search(&self, filters: &SearchFilters) -> Result<Vec<Track>, ApiError> {
        debug!(query = %filters.query, max_results = filters.max_results, "searching");

        let response = self
            .http
            .post(format!("{}/api/search", self.base_url))
            .json(filters)
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            warn!(%status, "search rejected by backend");
            return Err(ApiError::Backend(error_message(&body, SEARCH_FALLBACK)));
        }

        let parsed: SearchResponse = response.json()?;
        Ok(parsed.tracks)
    }

    /// Fetches the audio payload for a track as raw bytes.
    pub(crate) fn download(&self, video_id: &str, title: &str) -> Result<Vec<u8>, ApiError> {
        debug!(video_id, "downloading");

        let response = self
            .http
            .get(format!("{}/api/download/{}", self.base_url, video_id))
            .query(&[("title", title)])
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            warn!(%status, video_id, "download rejected by backend");
            return Err(ApiError::Backend(error_message(&body, DOWNLOAD_FALLBACK)));
        }

        Ok(response.bytes()?.to_vec())
    }
}

/// The streaming source URL for a track, suitable for handing straight to the
/// playback engine.
pub(crate) fn stream_url(base_url: &str, video_id: &str) -> String {
    format!("{}/api/stream/{}", base_url.trim_end_matches('/'), video_id)
}

/// Extracts the backend's `message` field from an error body, falling back to
/// a generic description when the body is not the expected JSON shape.
fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_message() {
        let body = r#"{"message": "quota exceeded"}"#;
        assert_eq!(error_message(body, SEARCH_FALLBACK), "quota exceeded");
    }

    #[test]
    fn error_message_falls_back_on_malformed_body() {
        assert_eq!(error_message("<html>502</html>", SEARCH_FALLBACK), SEARCH_FALLBACK);
        assert_eq!(error_message("", DOWNLOAD_FALLBACK), DOWNLOAD_FALLBACK);
        assert_eq!(error_message(r#"{"error": "nope"}"#, SEARCH_FALLBACK), SEARCH_FALLBACK);
    }

    #[test]
    fn search_response_parses_track_list() {
        let body = r#"{"tracks": [{
            "id": "1",
            "title": "Song",
            "artist": "Artist",
            "duration": "3:21",
            "thumbnail": "https://img.example/1.jpg",
            "videoId": "v1",
            "viewCount": "1K views",
            "publishedAt": "1 year ago"
        }]}"#;

        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.tracks.len(), 1);
        assert_eq!(parsed.tracks[0].video_id, "v1");
    }

    #[test]
    fn stream_url_is_keyed_by_video_id() {
        assert_eq!(
            stream_url("http://localhost:5000", "dX3k"),
            "http://localhost:5000/api/stream/dX3k"
        );
        // A trailing slash on the configured base must not double up.
        assert_eq!(
            stream_url("http://localhost:5000/", "dX3k"),
            "http://localhost:5000/api/stream/dX3k"
        );
    }
}
