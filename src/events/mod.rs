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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (search outcomes), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and hands fetch requests to the task worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::{Result, anyhow};
use crossterm::event::{Event, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, components::OpenTarget, model::search::SearchAction, render::draw,
    tasks::fetcher::FetchDelegate,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    SearchInput,
    Results,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    SetFocus(Focus),

    /// Commit the draft query.
    Submit,
    /// Replace the draft with a title and commit it.
    FindTitle(String),
    SetPage(u32),

    FetchSettled(SearchAction),

    Open(OpenTarget),

    Tick,

    ExitApplication,

    Error(String),
    FatalError(String),
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::SetFocus(focus) => handle_set_focus(app, focus),
            AppEvent::Submit => handle_submit(app)?,
            AppEvent::FindTitle(title) => handle_find_title(app, title)?,
            AppEvent::SetPage(page) => handle_set_page(app, page)?,
            AppEvent::FetchSettled(outcome) => handle_fetch_settled(app, outcome),
            AppEvent::Open(target) => handle_open(app, target),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => return Err(anyhow!(message)),
            AppEvent::Tick | AppEvent::ExitApplication => {}
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

impl FetchDelegate for Sender<AppEvent> {
    fn on_fetch_settled(&self, outcome: SearchAction) {
        // The receiver only goes away once the UI has shut down
        let _ = self.send(AppEvent::FetchSettled(outcome));
    }
}
