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

//! Command-line input logic and state management.
//!
//! This module implements the logic for the command-line component: `:`
//! activates it, keystrokes are collected by a text input component, and on
//! `Enter` the buffer is parsed and the corresponding application event is
//! dispatched.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{components::OpenTarget, events::AppEvent};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Find(String),
    Page(u32),
    Open(OpenTarget),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),
}

/// Parses a command-line buffer, returning `None` for an empty buffer.
pub(crate) fn parse_command(buffer: &str) -> Result<Option<Command>, CommandError> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let command = match parts.as_slice() {
        [] => return Ok(None),

        ["q"] | ["quit"] => Command::Quit,

        ["find" | "f"] => return Err(CommandError::Usage("find <title>")),
        ["find" | "f", title_parts @ ..] => Command::Find(title_parts.join(" ")),

        ["page" | "p", page] => match page.parse::<u32>() {
            Ok(page) if page > 0 => Command::Page(page),
            _ => return Err(CommandError::InvalidPage(page.to_string())),
        },
        ["page" | "p", ..] => return Err(CommandError::Usage("page <number>")),

        ["open"] => Command::Open(OpenTarget::Work),
        ["cover"] => Command::Open(OpenTarget::Cover),

        [cmd, ..] => return Err(CommandError::Unknown(cmd.to_string())),
    };

    Ok(Some(command))
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning whether the commander consumed it.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.input.reset();
                self.active = false;
            }

            KeyCode::Enter => {
                let sent = match parse_command(self.input.value()) {
                    Ok(Some(command)) => event_tx.send(command.into()),
                    Ok(None) => Ok(()),
                    Err(e) => event_tx.send(AppEvent::Error(e.to_string())),
                };

                if sent.is_err() {
                    tracing::debug!("event loop gone, dropping command");
                }

                self.input.reset();
                self.active = false;
            }

            // Delegate all other key events to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

impl From<Command> for AppEvent {
    fn from(command: Command) -> Self {
        match command {
            Command::Quit => AppEvent::ExitApplication,
            Command::Find(title) => AppEvent::FindTitle(title),
            Command::Page(page) => AppEvent::SetPage(page),
            Command::Open(target) => AppEvent::Open(target),
        }
    }
}
