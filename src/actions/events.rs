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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (catalog lookup, storage), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers commands to the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.
//!
//! All shortlist and search mutations happen here, on this single thread;
//! the worker only ever reports results back as events.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    model::{
        MovieRecord,
        nominations::ToggleOutcome,
        notify::NoticeKind,
    },
    render::draw,
};

const MSG_ALL_SELECTED: &str = "You've selected all your nominations!";
const MSG_SAVED: &str = "Nominations saved!";
const MSG_RESET: &str = "Nominations have been reset";
const MSG_NO_RESULTS: &str = "No movies related to that title were found!";

#[derive(Debug, PartialEq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
    Nominations,
}

impl Focus {
    fn next(&self) -> Self {
        match self {
            Focus::SearchInput => Focus::Results,
            Focus::Results => Focus::Nominations,
            Focus::Nominations => Focus::SearchInput,
        }
    }
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    NominationsLoaded(Vec<MovieRecord>),
    NominationsSaved,

    SearchResultsReady {
        seq: u64,
        query: String,
        movies: Vec<MovieRecord>,
    },
    SearchNoResults {
        seq: u64,
    },

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in
/// the terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed. On exit it hands the worker one final shortlist snapshot as a
/// best-effort flush; teardown does not wait for a confirmation.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::NominationsLoaded(movies) => {
                app.nominations.seed(movies);
                app.nominations_view.table.clamp(app.nominations.len());
            }

            AppEvent::NominationsSaved => app.notifier.show(MSG_SAVED, NoticeKind::Success),

            AppEvent::SearchResultsReady { seq, query, movies } => {
                if app.search.complete(seq, query, movies) {
                    app.search_view.results.table_state.select(Some(0));
                }
            }

            AppEvent::SearchNoResults { seq } => {
                if app.search.complete_empty(seq) {
                    app.search_view.results.clamp(0);
                    app.notifier.show(MSG_NO_RESULTS, NoticeKind::Info);
                }
            }

            AppEvent::Tick => app.notifier.tick(),

            AppEvent::Error(message) => app.notifier.show(message, NoticeKind::Info),

            AppEvent::ExitApplication => {
                // Best-effort flush of the shortlist; teardown does not wait
                // for the worker to finish the write.
                let _ = app.command_tx.send(AppCommand::SaveNominations {
                    movies: app.nominations.snapshot(),
                    confirm: false,
                });
                break;
            }
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Routing depends on the current focus: the search input consumes almost
/// everything as text editing, while the two tables share list navigation
/// and the toggle/save/reset/clear intents.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Focus cycling and exit shortcuts apply everywhere.
    match (key.code, key.modifiers) {
        (KeyCode::Tab, _) => {
            app.focus = app.focus.next();
            return Ok(());
        }
        (KeyCode::Char('c'), modifiers) if modifiers == KeyModifiers::CONTROL => {
            app.event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::SearchInput => process_input_key_event(app, key),
        Focus::Results | Focus::Nominations => process_list_key_event(app, key),
    }
}

fn process_input_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => execute_search(app)?,

        KeyCode::Esc | KeyCode::Down => app.focus = Focus::Results,

        // Delegate all other key events to the managed input component.
        _ => app.search_view.handle_input_event(&Event::Key(key)),
    }

    Ok(())
}

fn process_list_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('/') | KeyCode::Char('i') => app.focus = Focus::SearchInput,

        // Navigation: Down / j, Up / k
        KeyCode::Char('j') | KeyCode::Down => match app.focus {
            Focus::Results => app
                .search_view
                .results
                .goto_next(app.search.results().len()),
            _ => app.nominations_view.table.goto_next(app.nominations.len()),
        },
        KeyCode::Char('k') | KeyCode::Up => match app.focus {
            Focus::Results => app
                .search_view
                .results
                .goto_previous(app.search.results().len()),
            _ => app
                .nominations_view
                .table
                .goto_previous(app.nominations.len()),
        },

        // Panel navigation
        KeyCode::Char('h') | KeyCode::Left => app.focus = Focus::Results,
        KeyCode::Char('l') | KeyCode::Right => app.focus = Focus::Nominations,

        // Shortlist management
        KeyCode::Enter | KeyCode::Char(' ') => toggle_current(app),
        KeyCode::Char('s') => save_nominations(app)?,
        KeyCode::Char('r') => reset_nominations(app),

        KeyCode::Char('c') => clear_search(app),

        _ => {}
    }

    Ok(())
}

/// Issues a lookup for the pending query, or clears the session when the
/// query is blank (no lookup is made in that case).
fn execute_search(app: &mut App) -> Result<()> {
    let query = app.search_view.query().trim().to_string();

    match app.search.begin_search(&query) {
        Some(seq) => app.command_tx.send(AppCommand::Search { query, seq })?,
        None => app.search_view.results.clamp(0),
    }

    Ok(())
}

/// Empties the results and active query without touching the pending query
/// text, matching a user-initiated "clear" rather than a failed search.
fn clear_search(app: &mut App) {
    app.search.clear();
    app.search_view.results.clamp(0);
}

/// Toggles the movie under the cursor of the focused table in and out of the
/// shortlist.
fn toggle_current(app: &mut App) {
    let movie = match app.focus {
        Focus::Results => app
            .search_view
            .results
            .selected()
            .and_then(|i| app.search.results().get(i))
            .cloned(),
        _ => app
            .nominations_view
            .table
            .selected()
            .and_then(|i| app.nominations.movies().get(i))
            .cloned(),
    };

    let Some(movie) = movie else {
        return;
    };

    match app.nominations.toggle(movie) {
        ToggleOutcome::Added => {
            // Announce the transition into full exactly once, when it happens.
            if app.nominations.is_full() {
                app.notifier.show(MSG_ALL_SELECTED, NoticeKind::Success);
            }
        }
        ToggleOutcome::Removed => {}
        ToggleOutcome::Rejected => app.notifier.show(MSG_ALL_SELECTED, NoticeKind::Info),
    }

    app.nominations_view.table.clamp(app.nominations.len());
}

/// Hands the worker an ordered snapshot of the shortlist to persist; the
/// confirmation banner is raised when the worker reports back.
fn save_nominations(app: &mut App) -> Result<()> {
    app.command_tx.send(AppCommand::SaveNominations {
        movies: app.nominations.snapshot(),
        confirm: true,
    })?;

    Ok(())
}

fn reset_nominations(app: &mut App) {
    app.nominations.reset();
    app.nominations_view.table.clamp(0);
    app.notifier.show(MSG_RESET, NoticeKind::Info);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::{self, Receiver};

    use tui_input::Input;

    use crate::{config::AppConfig, model::MovieKind};

    fn test_app() -> (App, Receiver<AppCommand>) {
        let (command_tx, command_rx) = mpsc::channel();
        (App::new(AppConfig::default(), command_tx), command_rx)
    }

    fn movie(id: &str) -> MovieRecord {
        MovieRecord {
            id: id.to_string(),
            title: id.to_string(),
            year: "2000".to_string(),
            kind: MovieKind::Movie,
            poster_url: None,
        }
    }

    fn seed_results(app: &mut App, count: usize) {
        let seq = app.search.begin_search("query").unwrap();
        let movies = (0..count).map(|i| movie(&format!("tt{i}"))).collect();
        assert!(app.search.complete(seq, "query".to_string(), movies));
    }

    #[test]
    fn filling_the_shortlist_raises_the_completion_banner() {
        let (mut app, _command_rx) = test_app();
        seed_results(&mut app, 6);
        app.focus = Focus::Results;

        for i in 0..4 {
            app.search_view.results.table_state.select(Some(i));
            toggle_current(&mut app);
            assert!(app.notifier.current().is_none());
        }

        app.search_view.results.table_state.select(Some(4));
        toggle_current(&mut app);
        assert!(app.nominations.is_full());
        assert_eq!(
            app.notifier.current(),
            Some((MSG_ALL_SELECTED, NoticeKind::Success))
        );
    }

    #[test]
    fn a_rejected_toggle_leaves_the_shortlist_alone_and_notifies() {
        let (mut app, _command_rx) = test_app();
        seed_results(&mut app, 6);
        app.focus = Focus::Results;

        for i in 0..5 {
            app.search_view.results.table_state.select(Some(i));
            toggle_current(&mut app);
        }

        app.search_view.results.table_state.select(Some(5));
        toggle_current(&mut app);

        assert_eq!(app.nominations.len(), 5);
        assert!(!app.nominations.is_selected("tt5"));
        assert_eq!(
            app.notifier.current(),
            Some((MSG_ALL_SELECTED, NoticeKind::Info))
        );
    }

    #[test]
    fn toggling_from_the_nominations_panel_removes() {
        let (mut app, _command_rx) = test_app();
        seed_results(&mut app, 2);
        app.focus = Focus::Results;
        app.search_view.results.table_state.select(Some(0));
        toggle_current(&mut app);
        assert_eq!(app.nominations.len(), 1);

        app.focus = Focus::Nominations;
        app.nominations_view.table.table_state.select(Some(0));
        toggle_current(&mut app);
        assert!(app.nominations.is_empty());
    }

    #[test]
    fn an_empty_query_never_reaches_the_worker() {
        let (mut app, command_rx) = test_app();
        app.search_view.input = Input::new("   ".to_string());

        execute_search(&mut app).unwrap();

        assert!(command_rx.try_recv().is_err());
        assert!(app.search.results().is_empty());
        assert_eq!(app.search.active_query(), None);
    }

    #[test]
    fn a_real_query_is_dispatched_with_its_sequence_tag() {
        let (mut app, command_rx) = test_app();
        app.search_view.input = Input::new("star wars".to_string());

        execute_search(&mut app).unwrap();

        match command_rx.try_recv().unwrap() {
            AppCommand::Search { query, seq } => {
                assert_eq!(query, "star wars");
                assert_eq!(seq, 1);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn saving_hands_the_worker_an_ordered_snapshot() {
        let (mut app, command_rx) = test_app();
        app.nominations.toggle(movie("tt2"));
        app.nominations.toggle(movie("tt1"));

        save_nominations(&mut app).unwrap();

        match command_rx.try_recv().unwrap() {
            AppCommand::SaveNominations { movies, confirm } => {
                assert!(confirm);
                let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
                assert_eq!(ids, vec!["tt2", "tt1"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn reset_clears_and_notifies() {
        let (mut app, _command_rx) = test_app();
        app.nominations.toggle(movie("tt1"));

        reset_nominations(&mut app);

        assert!(app.nominations.is_empty());
        assert_eq!(app.notifier.current(), Some((MSG_RESET, NoticeKind::Info)));
    }

    #[test]
    fn focus_cycles_through_all_panels() {
        assert_eq!(Focus::SearchInput.next(), Focus::Results);
        assert_eq!(Focus::Results.next(), Focus::Nominations);
        assert_eq!(Focus::Nominations.next(), Focus::SearchInput);
    }
}
