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

//! UI rendering logic for the book table.
//!
//! This module handles the visual representation of a result page, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{
    components::BookTable,
    render::Render,
    theme::Theme,
    util::format::{author_line, editions_label, year_label},
};

const NO_COVER: &str = "No cover";

impl Render for BookTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl BookTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let books = self.books;
        let (covers_endpoint, cover_size) = (self.covers_endpoint, self.cover_size);

        let rows = books.iter().map(|book| {
            let cover = book
                .cover_url(covers_endpoint, cover_size)
                .map_or_else(
                    || Line::from(NO_COVER).style(Style::default().fg(theme.muted_colour)),
                    |url| Line::from(url).style(Style::default().fg(theme.table_cover_fg)),
                );

            Row::new(vec![
                Cell::from(Line::from(book.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
                Cell::from(Line::from(author_line(&book.authors)).style(Style::default().fg(theme.table_author_fg))),
                Cell::from(Line::from(year_label(book.first_publish_year)).style(Style::default().fg(theme.table_year_fg)).alignment(Alignment::Right)),
                Cell::from(Line::from(editions_label(book.edition_count)).style(Style::default().fg(theme.table_editions_fg)).alignment(Alignment::Right)),
                Cell::from(cover),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Length(9),
                Constraint::Length(14),
                Constraint::Fill(1),
            ],
        )
        .column_spacing(2)
        .header(
            Row::new(vec![
                Cell::from("Title"),
                Cell::from("Authors"),
                Cell::from(Line::from("First pub").alignment(Alignment::Right)),
                Cell::from(Line::from("Editions").alignment(Alignment::Right)),
                Cell::from("Cover"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .block(Block::default());

        let state = &mut *self.table_state;
        f.render_stateful_widget(table, area, state);
    }
}
