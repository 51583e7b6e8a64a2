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

//! Search panel: query input and result list state.
//!
//! This module holds the view-side state for the search panel: the managed
//! text input component carrying the pending query, and the cursor over the
//! result table. The result records themselves live in the search session
//! model.

mod render;

use crossterm::event::Event;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::components::MovieTableState;

pub(crate) struct SearchView {
    pub(crate) input: Input,
    pub(crate) results: MovieTableState,
}

impl SearchView {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            results: MovieTableState::new(),
        }
    }

    /// The pending query as the user typed it; editing it does not trigger
    /// a lookup.
    pub(crate) fn query(&self) -> &str {
        self.input.value()
    }

    /// Delegates a key event to the managed input component.
    pub(crate) fn handle_input_event(&mut self, event: &Event) {
        self.input.handle_event(event);
    }
}
