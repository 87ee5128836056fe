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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking HTTP
//! requests from the main UI thread. It provides a dedicated worker loop that
//! translates [`AppTask`] requests into backend API calls and broadcasts the
//! results back to the application via [`AppEvent`]s.
//!
//! Tasks are processed serially on one worker thread, so responses arrive in
//! submission order. In-flight requests are not cancelled when superseded.

use anyhow::Result;
use std::{
    fs,
    path::Path,
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    api::ApiClient,
    config::AppConfig,
    events::AppEvent,
    model::{SearchFilters, Track},
    util,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Search(SearchFilters),
    Download(Track),
}

/// Spawns a background thread to process application tasks.
///
/// This worker thread initializes its own API client and enters a blocking
/// loop, listening for incoming [`AppTask`]s.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let api = ApiClient::new(&config.api_base_url).expect("Failed to initialise API client");

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                api: &api,
            };

            if let Err(e) = handle_task(task, &mut ctx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    config: &'a AppConfig,
    event_tx: &'a Sender<AppEvent>,
    api: &'a ApiClient,
}

/// Orchestrates the execution of a single task.
///
/// This function implements the logic for each task and sends the result back
/// through the application event channel.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::Search(filters) => search(ctx, filters),
        AppTask::Download(track) => download(ctx, track),
    }
}

fn search(ctx: &mut TaskContext, filters: SearchFilters) -> Result<()> {
    if filters.query.trim().is_empty() {
        return Ok(());
    }

    match ctx.api.search(&filters) {
        Ok(tracks) => {
            info!(query = %filters.query, count = tracks.len(), "search finished");
            ctx.event_tx.send(AppEvent::SearchResultsReady(tracks))?;
        }
        Err(e) => {
            warn!(query = %filters.query, "search failed: {}", e);
            ctx.event_tx.send(AppEvent::SearchFailed(e.to_string()))?;
        }
    }

    Ok(())
}

/// Fetches a track's audio payload and materializes it as a local file.
///
/// Nothing is written unless the fetch succeeded, and any filesystem failure
/// is reported the same way as a backend failure. Playback state is never
/// touched.
fn download(ctx: &mut TaskContext, track: Track) -> Result<()> {
    let bytes = match ctx.api.download(&track.video_id, &track.title) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(video_id = %track.video_id, "download failed: {}", e);
            ctx.event_tx.send(AppEvent::DownloadFailed(e.to_string()))?;
            return Ok(());
        }
    };

    let filename = util::format::sanitize_filename(&track.title);
    let dir = Path::new(&ctx.config.download_dir);

    let written = fs::create_dir_all(dir)
        .and_then(|()| fs::write(dir.join(&filename), &bytes));

    match written {
        Ok(()) => {
            info!(%filename, size = bytes.len(), "download saved");
            ctx.event_tx.send(AppEvent::DownloadFinished(filename))?;
        }
        Err(e) => {
            warn!(%filename, "failed to save download: {}", e);
            ctx.event_tx
                .send(AppEvent::DownloadFailed(format!("Unable to save {}: {}", filename, e)))?;
        }
    }

    Ok(())
}
