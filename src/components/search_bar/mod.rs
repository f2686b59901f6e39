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

//! Search input for the draft query.
//!
//! The draft is edited on every keystroke but only reaches the network once
//! it is submitted with `Enter`.

mod event;
mod render;

use tui_input::Input;

pub(crate) struct SearchBar<'a> {
    draft: &'a mut Input,
}

impl<'a> SearchBar<'a> {
    pub(crate) fn new(draft: &'a mut Input) -> Self {
        Self { draft }
    }
}
