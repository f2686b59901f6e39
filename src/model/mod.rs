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

//! Domain models and core data structures.
//!
//! This module defines the display-ready shape of a catalog entry and the
//! result set returned for a single (search term, page) request.

pub(crate) mod search;

use serde::{Deserialize, Serialize};

/// A normalised catalog entry, ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct BookRecord {
    pub(crate) key: Option<String>,
    pub(crate) title: String,
    pub(crate) authors: Vec<String>,
    pub(crate) first_publish_year: Option<i32>,
    pub(crate) cover_id: Option<i64>,
    pub(crate) edition_count: u32,
}

impl BookRecord {
    /// Builds the cover image URL for this record, if it has a cover.
    ///
    /// # Arguments
    ///
    /// * `base` - The cover image endpoint, e.g.
    ///   `https://covers.openlibrary.org/b/id`.
    /// * `size` - Which of the hosted variants to request.
    pub(crate) fn cover_url(&self, base: &str, size: CoverSize) -> Option<String> {
        self.cover_id.map(|id| {
            format!("{}/{}-{}.jpg", base.trim_end_matches('/'), id, size.suffix())
        })
    }

    /// Builds the catalog page URL for this record, if it has a key.
    pub(crate) fn work_url(&self, site: &str) -> Option<String> {
        self.key
            .as_deref()
            .map(|key| format!("{}{}", site.trim_end_matches('/'), key))
    }
}

/// The books found for one page of a search, plus the total match count
/// reported by the catalog across all pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct SearchResults {
    pub(crate) books: Vec<BookRecord>,
    pub(crate) num_found: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum CoverSize {
    S,
    #[default]
    M,
    L,
}

impl CoverSize {
    fn suffix(self) -> &'static str {
        match self {
            CoverSize::S => "S",
            CoverSize::M => "M",
            CoverSize::L => "L",
        }
    }
}
