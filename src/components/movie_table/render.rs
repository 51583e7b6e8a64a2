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

//! UI rendering logic for the movie table.
//!
//! This module handles the visual representation of movie records, including
//! column layout, the nominated-row indicator, and theme application using
//! the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::MovieTableState,
    model::{MovieRecord, nominations::NominationSet},
    theme::Theme,
};

impl MovieTableState {
    /// Draws `movies` as a table, marking rows already on the shortlist.
    ///
    /// The cursor highlight is only shown when `focused`, so the unfocused
    /// panel does not appear interactive.
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        movies: &[MovieRecord],
        nominations: &NominationSet,
        theme: &Theme,
        focused: bool,
    ) {
        let rows = movies.iter().map(|movie| {
            let nominated = nominations.is_selected(&movie.id);
            let nomination_indicator = if nominated {
                Line::from("+").style(Style::default().fg(Color::Black).bg(theme.accent_colour))
            } else {
                Line::from("")
            };

            let title_style = if nominated {
                Style::default().fg(theme.accent_colour)
            } else {
                Style::default().fg(theme.table_title_fg)
            };

            Row::new(vec![
                Cell::from(nomination_indicator),
                Cell::from(
                    Line::from(movie.year.as_str())
                        .style(Style::default().fg(theme.table_year_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(
                    Line::from(movie.kind.label()).style(Style::default().fg(theme.table_kind_fg)),
                ),
                Cell::from(Line::from(movie.title.as_str()).style(title_style)),
            ])
        });

        let mut table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(8),
                Constraint::Percentage(100),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(""),
                Cell::from(Line::from("Year").alignment(Alignment::Right)),
                Cell::from("Type"),
                Cell::from("Title"),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .block(Block::default());

        if focused {
            table = table.row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White));
        }

        let state = &mut self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
