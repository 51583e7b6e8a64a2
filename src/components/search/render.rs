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

//! UI rendering logic for the search panel.
//!
//! Renders the query input box with its cursor, and below it the result
//! table headed by the query the results belong to.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    actions::events::Focus,
    components::SearchView,
    model::{nominations::NominationSet, search::SearchSession},
    theme::Theme,
};

impl SearchView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        session: &SearchSession,
        nominations: &NominationSet,
        theme: &Theme,
        focus: &Focus,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.draw_input(f, chunks[0], theme, focus);
        self.draw_results(f, chunks[1], session, nominations, theme, focus);
    }

    fn draw_input(&self, f: &mut Frame, area: Rect, theme: &Theme, focus: &Focus) {
        let focused = matches!(focus, Focus::SearchInput);

        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .title("Movie title");

        let inner = input_block.inner(area);
        f.render_widget(Paragraph::new(self.input.value()).block(input_block), area);

        if focused {
            let cursor_x = inner.x + self.input.cursor() as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }

    fn draw_results(
        &mut self,
        f: &mut Frame,
        area: Rect,
        session: &SearchSession,
        nominations: &NominationSet,
        theme: &Theme,
        focus: &Focus,
    ) {
        let header_text = match session.active_query() {
            Some(query) => format!("Search results for \"{}\"", query),
            None => "Search results will appear here".to_string(),
        };

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .padding(Padding::horizontal(1));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        f.render_widget(Paragraph::new(header_text).block(header_block), chunks[0]);

        self.results.draw(
            f,
            chunks[1],
            session.results(),
            nominations,
            theme,
            matches!(focus, Focus::Results),
        );
    }
}
