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

//! Interactive movie table widget and cursor state.
//!
//! This module provides a reusable table for displaying movie records with a
//! navigable cursor. The records themselves stay owned by the domain models;
//! the component keeps only the view state and is handed the current slice
//! at draw and navigation time, so the two lists it backs (search results
//! and nominations) can never drift from the state they display.

mod render;

use ratatui::widgets::TableState;

pub(crate) struct MovieTableState {
    pub(crate) table_state: TableState,
}

impl MovieTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    /// Re-aligns the cursor after the backing list changed length.
    pub(crate) fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.table_state.select(None);
        } else {
            match self.table_state.selected() {
                Some(i) if i >= len => self.table_state.select(Some(len - 1)),
                Some(_) => {}
                None => self.table_state.select(Some(0)),
            }
        }
    }
}
