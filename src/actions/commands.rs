// Copyright (C) 2026  Caprica Software Limited
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

//! Asynchronous application command processing.
//!
//! This module implements the command pattern used to offload blocking I/O
//! from the main UI thread: the remote catalog lookup and the SQLite-backed
//! shortlist storage. It provides a dedicated worker loop that translates
//! [`AppCommand`] requests into lookup/storage operations and broadcasts the
//! results back to the application via [`AppEvent`]s.

use anyhow::Result;
use rusqlite::Connection;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{
    actions::events::AppEvent,
    config::AppConfig,
    model::MovieRecord,
    omdb::OmdbClient,
    store,
};

const STORE_FILE: &str = "nominations.db";

#[derive(Debug)]
pub(crate) enum AppCommand {
    /// Look up `query` against the remote catalog. `seq` ties the eventual
    /// completion back to the search session that issued it.
    Search { query: String, seq: u64 },

    /// Read the persisted shortlist and seed the application with it.
    LoadNominations,

    /// Persist the given shortlist snapshot. `confirm` distinguishes an
    /// explicit user save (banner confirmation) from the silent flush on
    /// teardown.
    SaveNominations {
        movies: Vec<MovieRecord>,
        confirm: bool,
    },
}

/// Spawns a background thread to process application commands.
///
/// The worker owns the storage connection and the catalog client, and enters
/// a blocking loop listening for incoming [`AppCommand`]s. It drains every
/// queued command before exiting, and exits when the command channel closes.
/// The caller keeps the returned handle and joins it after closing the
/// channel during teardown, so a flush queued on exit is guaranteed to reach
/// the store before the process ends.
pub(crate) fn spawn_command_worker(
    config: &AppConfig,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    spawn_command_worker_at(config, STORE_FILE, command_rx, event_tx)
}

fn spawn_command_worker_at(
    config: &AppConfig,
    store_file: &str,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()> {
    let config = config.clone();
    let store_file = store_file.to_string();

    thread::spawn(move || {
        let conn = store::open_store(&store_file).expect("Failed to initialise storage");
        let client = OmdbClient::new(&config).expect("Failed to initialise catalog client");

        while let Ok(request) = command_rx.recv() {
            if let Err(e) = handle_command(&conn, &client, request, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    })
}

/// Executes a single command and sends the result back through the
/// application event channel.
fn handle_command(
    conn: &Connection,
    client: &OmdbClient,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    match command {
        AppCommand::Search { query, seq } => {
            // A transport failure is indistinguishable from a miss as far as
            // the user is concerned, both land on the no-results path.
            let event = match client.search_titles(&query) {
                Ok(raw) if !raw.is_empty() => AppEvent::SearchResultsReady {
                    seq,
                    query,
                    movies: raw.into_iter().map(MovieRecord::from_raw).collect(),
                },
                Ok(_) | Err(_) => AppEvent::SearchNoResults { seq },
            };
            event_tx.send(event)?;
        }

        AppCommand::LoadNominations => {
            let movies = store::load_nominations(conn);
            event_tx.send(AppEvent::NominationsLoaded(movies))?;
        }

        AppCommand::SaveNominations { movies, confirm } => {
            store::save_nominations(conn, &movies)?;
            if confirm {
                event_tx.send(AppEvent::NominationsSaved)?;
            }
        }
    }

    Ok(())
}
