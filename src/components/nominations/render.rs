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

//! UI rendering logic for the nominations panel.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    actions::events::Focus,
    components::NominationsView,
    model::nominations::{MAX_NOMINATIONS, NominationSet},
    theme::Theme,
};

impl NominationsView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        nominations: &NominationSet,
        theme: &Theme,
        focus: &Focus,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let mut header_text = if nominations.is_empty() {
            "Your nominations are empty!".to_string()
        } else {
            format!(
                "Your nominations | {} of {}",
                nominations.len(),
                MAX_NOMINATIONS
            )
        };

        if nominations.is_full() {
            let _ = write!(header_text, " | complete");
        }

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        self.table.draw(
            f,
            chunks[1],
            nominations.movies(),
            nominations,
            theme,
            matches!(focus, Focus::Nominations),
        );
    }
}
