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

//! Event routing for the search input.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::SearchBar,
    events::{AppEvent, AppEventProcessor, Focus},
};

impl AppEventProcessor for SearchBar<'_> {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Enter => {
                    event_tx.send(AppEvent::Submit)?;
                    event_tx.send(AppEvent::SetFocus(Focus::Results))?;
                }

                KeyCode::Esc | KeyCode::Tab => event_tx.send(AppEvent::SetFocus(Focus::Results))?,

                // Delegate all other key events to the managed input component.
                _ => {
                    self.draft.handle_event(&event);
                }
            }
        }

        Ok(())
    }
}
