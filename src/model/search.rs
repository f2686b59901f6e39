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

//! Search state and its transitions.
//!
//! All search related state lives in [`SearchState`] and is only changed
//! through [`SearchState::apply`]. Every fetch is tagged with a generation
//! number; a completion is applied only if its generation is still the
//! current one, so a superseded request can never overwrite newer state.

use tui_input::Input;

use crate::model::SearchResults;

const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// A request for the fetch orchestrator to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FetchRequest {
    pub(crate) generation: u64,
    pub(crate) term: String,
    pub(crate) page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchAction {
    /// Commit the draft query as the active search term.
    Submit,

    /// Move to another page of the active search term.
    SetPage(u32),

    FetchSucceeded {
        generation: u64,
        results: SearchResults,
    },

    FetchFailed {
        generation: u64,
        message: String,
    },

    FetchCancelled {
        generation: u64,
    },

    /// Discard whatever request is in flight, e.g. on exit.
    Teardown,
}

impl SearchAction {
    /// The request generation a fetch outcome belongs to.
    pub(crate) fn generation(&self) -> Option<u64> {
        match self {
            SearchAction::FetchSucceeded { generation, .. }
            | SearchAction::FetchFailed { generation, .. }
            | SearchAction::FetchCancelled { generation } => Some(*generation),
            _ => None,
        }
    }
}

pub(crate) struct SearchState {
    pub(crate) draft: Input,
    term: String,
    page: u32,
    results: SearchResults,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self {
            draft: Input::default(),
            term: String::new(),
            page: 1,
            results: SearchResults::default(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    pub(crate) fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = Input::new(text.into());
    }

    pub(crate) fn term(&self) -> &str {
        &self.term
    }

    pub(crate) fn page(&self) -> u32 {
        self.page
    }

    pub(crate) fn results(&self) -> &SearchResults {
        &self.results
    }

    pub(crate) fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn has_committed_term(&self) -> bool {
        !self.term.is_empty()
    }

    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Applies a single transition, returning the fetch to start, if any.
    pub(crate) fn apply(&mut self, action: SearchAction) -> Option<FetchRequest> {
        match action {
            SearchAction::Submit => self.submit(),
            SearchAction::SetPage(page) => self.set_page(page),
            SearchAction::FetchSucceeded {
                generation,
                results,
            } => {
                if self.is_current(generation) {
                    self.results = results;
                    self.loading = false;
                }
                None
            }
            SearchAction::FetchFailed {
                generation,
                message,
            } => {
                if self.is_current(generation) {
                    let message = message.trim();
                    self.error = Some(if message.is_empty() {
                        UNKNOWN_ERROR.to_string()
                    } else {
                        message.to_string()
                    });
                    self.results = SearchResults::default();
                    self.loading = false;
                }
                None
            }
            SearchAction::FetchCancelled { .. } => None,
            SearchAction::Teardown => {
                self.generation += 1;
                None
            }
        }
    }

    fn submit(&mut self) -> Option<FetchRequest> {
        let term = self.draft.value().trim();
        if term.is_empty() {
            return None;
        }

        let changed = term != self.term || self.page != 1;
        self.term = term.to_string();
        self.page = 1;

        // Resubmitting the same term is how a failed search gets retried
        (changed || self.error.is_some()).then(|| self.start_fetch())
    }

    fn set_page(&mut self, page: u32) -> Option<FetchRequest> {
        if page == 0 {
            return None;
        }

        let changed = page != self.page;
        self.page = page;

        if self.term.is_empty() || !(changed || self.error.is_some()) {
            return None;
        }

        Some(self.start_fetch())
    }

    fn start_fetch(&mut self) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;

        FetchRequest {
            generation: self.generation,
            term: self.term.clone(),
            page: self.page,
        }
    }

    /// The line summarising the current result set.
    pub(crate) fn summary_line(&self) -> String {
        if self.results.num_found > 0 {
            format!(
                "Showing {} of {} results (page {})",
                self.results.books.len(),
                crate::util::format::group_thousands(self.results.num_found),
                self.page
            )
        } else if self.has_committed_term() {
            "No results found".to_string()
        } else {
            "Type a title and press Enter".to_string()
        }
    }

    /// The explicit empty-result message, shown only once a search for a
    /// committed term has completed without error and found nothing.
    pub(crate) fn no_results_message(&self) -> Option<String> {
        let settled_empty = !self.loading
            && self.error.is_none()
            && self.results.books.is_empty()
            && self.has_committed_term();

        settled_empty.then(|| format!("No books found for '{}'", self.term))
    }
}
