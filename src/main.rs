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

//! # Movie Nominations TUI.
//!
//! A terminal-based shortlist picker: search a remote movie catalog and
//! curate a capped list of five nominations that persists across sessions.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, UI rendering, and
//!   every mutation of the shortlist and search state.
//! * A **Background Worker** handles the blocking catalog lookups and the
//!   SQLite-backed shortlist storage via asynchronous command processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels. On startup the worker seeds the shortlist from storage; on exit
//! the event loop hands it a final snapshot, and after the terminal is
//! restored the main thread closes the command channel and joins the worker
//! so that flush reaches the store before the process ends.

mod actions;
mod components;
mod config;
mod model;
mod omdb;
mod render;
mod store;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::AppCommand,
        events::{AppEvent, Focus, process_events},
    },
    components::{NominationsView, SearchView},
    config::AppConfig,
    model::{nominations::NominationSet, notify::Notifier, search::SearchSession},
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub nominations: NominationSet,
    pub search: SearchSession,
    pub notifier: Notifier,

    pub search_view: SearchView,
    pub nominations_view: NominationsView,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::SearchInput,
            event_tx,
            event_rx,
            command_tx,
            nominations: NominationSet::new(),
            search: SearchSession::new(),
            notifier: Notifier::new(),
            search_view: SearchView::new(),
            nominations_view: NominationsView::new(),
        }
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(config, command_tx);

    // Spawn the background worker that owns the storage connection and the
    // catalog client.
    let command_event_tx = app.event_tx.clone();
    let worker = actions::commands::spawn_command_worker(&app.config, command_rx, command_event_tx);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    // Dropping the application state closes the command channel; joining the
    // worker lets it drain the flush queued on exit before the process ends.
    drop(app);
    worker.join().ok();

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    util::term::set_terminal_bg(&theme::Theme::to_hex(app.theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup or panic handling.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg();
    terminal.show_cursor().ok();
}

/// Starts the application's input threads and enters the main event loop.
///
/// This function spawns two long-running background threads:
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes, which also drives the
///   notification banner's auto-dismissal.
///
/// After spawning them, it hands control to [`process_events`] to manage the
/// UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to seed the shortlist from the persisted snapshot
    app.command_tx
        .send(AppCommand::LoadNominations)
        .context("Failed to request saved nominations")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
