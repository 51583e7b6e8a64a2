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

//! Nominations panel: shortlist view state.
//!
//! The shortlist records live in the nomination set model; this view keeps
//! only the table cursor.

mod render;

use crate::components::MovieTableState;

pub(crate) struct NominationsView {
    pub(crate) table: MovieTableState,
}

impl NominationsView {
    pub(crate) fn new() -> Self {
        Self {
            table: MovieTableState::new(),
        }
    }
}
