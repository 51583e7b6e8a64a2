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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! The primary entry point is the [`draw`] function, called after every
//! processed event to provide a reactive user interface.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::{App, model::notify::NoticeKind, theme::Theme};

/// Renders the user interface to the terminal frame.
///
/// The screen splits into a transient notification banner, the search panel
/// (query input plus results) beside the nominations panel, and a footer
/// line of key hints.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: banner, main, footer
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_banner(f, outer[0], app);

    // Main layout: search column, nominations column
    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .horizontal_margin(1)
        .split(outer[1]);

    app.search_view
        .draw(f, main[0], &app.search, &app.nominations, &app.theme, &app.focus);
    app.nominations_view
        .draw(f, main[1], &app.nominations, &app.theme, &app.focus);

    draw_footer(f, outer[2], &app.theme);
}

fn draw_banner(f: &mut Frame, area: Rect, app: &App) {
    let Some((text, kind)) = app.notifier.current() else {
        return;
    };

    let banner_colour = match kind {
        NoticeKind::Info => app.theme.accent_colour,
        NoticeKind::Success => app.theme.success_colour,
    };

    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(banner_colour));

    f.render_widget(banner, area);
}

fn draw_footer(f: &mut Frame, area: Rect, theme: &Theme) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let hints =
        "enter search | tab focus | space toggle | c clear | s save | r reset | q quit";

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.border_colour)),
        container[0],
    );
}
