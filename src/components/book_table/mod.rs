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

//! Interactive book table widget and state management.
//!
//! This module provides the table listing the current result page. It
//! separates persistent state (`BookTableState`) from the transient widget
//! view (`BookTable`) that borrows the books being shown.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    config::AppConfig,
    model::{BookRecord, CoverSize},
};

/// What to open in the browser for the selected book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenTarget {
    Work,
    Cover,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum BookTableAction {
    Open(OpenTarget),
}

pub(crate) struct BookTableState {
    pub(crate) table_state: TableState,
}

impl BookTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    pub(crate) fn as_widget<'a>(
        &'a mut self,
        books: &'a [BookRecord],
        config: &'a AppConfig,
    ) -> BookTable<'a> {
        BookTable {
            books,
            table_state: &mut self.table_state,
            covers_endpoint: &config.covers_endpoint,
            cover_size: config.cover_size,
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Selects the first row of a freshly loaded page, or nothing if the page
    /// is empty.
    pub(crate) fn reset_selection(&mut self, count: usize) {
        self.table_state = TableState::new().with_selected((count > 0).then_some(0));
    }
}

pub(crate) struct BookTable<'a> {
    books: &'a [BookRecord],
    table_state: &'a mut TableState,
    covers_endpoint: &'a str,
    cover_size: CoverSize,
}

impl<'a> BookTable<'a> {
    fn goto_next(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.books.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.books.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.books.is_empty() {
            self.table_state.select(Some(self.books.len() - 1));
        }
    }
}
