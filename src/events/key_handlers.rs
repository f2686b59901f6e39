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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::{BookTableAction, SearchBar},
    events::{AppEvent, AppEventProcessor, Focus},
};

/// Maps keyboard input to application actions.
///
/// This function acts as the primary input router for the TUI, translating
/// low-level [`KeyEvent`]s into high-level actions. It handles:
///
/// * **Application Control**: Exiting the program from anywhere with
///   `Ctrl-C`, or with `q` outside the search input.
/// * **Command Line**: Delegating to the commander while it is active.
/// * **Search Input**: Editing and submitting the draft query.
/// * **Results**: Moving through the result table and opening the selected
///   book.
///
/// # Errors
///
/// Returns an error if an event cannot be delivered to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::SearchInput => SearchBar::new(&mut app.search.draft).process_event(event, &app.event_tx),
        Focus::Results => {
            if app.commander.handle_event(&event, &app.event_tx) {
                return Ok(());
            }

            process_results_key_event(app, key, &event)
        }
    }
}

fn process_results_key_event(app: &mut App, key: KeyEvent, event: &Event) -> Result<()> {
    let action = app
        .book_table
        .as_widget(&app.search.results().books, &app.config)
        .process_event(event);

    if let Some(BookTableAction::Open(target)) = action {
        app.event_tx.send(AppEvent::Open(target))?;
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') | KeyCode::Tab => {
            app.event_tx.send(AppEvent::SetFocus(Focus::SearchInput))?
        }
        _ => {}
    }

    Ok(())
}
