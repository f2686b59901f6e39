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
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    App, components::SearchBar, events::Focus, render::commander::draw_commander, theme::Theme,
};

const LOADING: &str = "Loading results...";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into the header, search bar, summary
///   and message lines, the result table and the status bar.
/// * **State Mapping**: Showing exactly one of the error, empty-result or
///   loading messages, while keeping the previous result list on screen
///   during loading.
/// * **Styling**: Applying colors and borders defined in the application theme.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().bg(app.theme.background_colour), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], &app.theme);

    let loading = app.search.is_loading();
    let focused = app.focus == Focus::SearchInput && !app.commander.active();
    SearchBar::new(&mut app.search.draft).draw(f, outer[1], loading, focused, &app.theme);

    f.render_widget(
        Paragraph::new(app.search.summary_line()).style(Style::default().fg(app.theme.muted_colour)),
        padded(outer[2]),
    );

    draw_message(f, padded(outer[3]), app);

    app.book_table
        .as_widget(&app.search.results().books, &app.config)
        .draw(f, padded(outer[4]), &app.theme);

    f.render_widget(
        Paragraph::new(Line::from("Data from Open Library").centered())
            .style(Style::default().fg(app.theme.muted_colour)),
        outer[5],
    );

    draw_commander(f, outer[6], app);
}

fn padded(area: Rect) -> Rect {
    Layout::default()
        .constraints([Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area)[0]
}

fn draw_header(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            " Book Finder ",
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Search books by title (Open Library)",
            Style::default().fg(theme.muted_colour),
        ),
    ]);

    f.render_widget(Paragraph::new(title), area);
}

fn draw_message(f: &mut Frame, area: Rect, app: &App) {
    let search = &app.search;

    let message = if let Some(error) = search.error() {
        Some(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(app.theme.error_colour).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(no_results) = search.no_results_message() {
        Some(Span::raw(no_results))
    } else if search.is_loading() {
        Some(Span::styled(LOADING, Style::default().fg(app.theme.accent_colour)))
    } else {
        None
    };

    if let Some(message) = message {
        f.render_widget(Paragraph::new(Line::from(message)), area);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        config::AppConfig,
        model::{BookRecord, SearchResults, search::SearchAction},
    };

    fn app() -> App {
        let (task_tx, _task_rx) = mpsc::channel();
        App::new(AppConfig::default(), task_tx)
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(240, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    fn submit(app: &mut App, term: &str) -> u64 {
        app.search.set_draft(term);
        app.search.apply(SearchAction::Submit).unwrap().generation
    }

    fn settle(app: &mut App, outcome: SearchAction) {
        let fresh = matches!(outcome, SearchAction::FetchSucceeded { .. });
        app.search.apply(outcome);
        if fresh {
            app.book_table.reset_selection(app.search.results().books.len());
        }
    }

    fn dune_page() -> SearchResults {
        let books = (0..10)
            .map(|i| BookRecord {
                key: Some(format!("/works/OL{}W", i)),
                title: format!("Dune {}", i),
                authors: vec![
                    "Frank Herbert".to_string(),
                    "Brian Herbert".to_string(),
                    "Kevin J. Anderson".to_string(),
                    "Byron Merritt".to_string(),
                ],
                first_publish_year: (i != 3).then_some(1965),
                cover_id: (i != 0).then_some(1000 + i as i64),
                edition_count: 10,
            })
            .collect();

        SearchResults {
            books,
            num_found: 250,
        }
    }

    #[test]
    fn prompts_before_first_search() {
        let screen = render(&mut app());

        assert!(screen.contains("Type a title and press Enter"));
        assert!(screen.contains("Enter book title, e.g. Harry Potter"));
        assert!(!screen.contains("No books found"));
    }

    #[test]
    fn renders_result_page() {
        let mut app = app();
        let generation = submit(&mut app, "dune");
        settle(&mut app, SearchAction::FetchSucceeded {
            generation,
            results: dune_page(),
        });

        let screen = render(&mut app);

        assert!(screen.contains("Showing 10 of 250 results (page 1)"));
        assert!(screen.contains("Frank Herbert, Brian Herbert, Kevin J. Anderson"));
        assert!(!screen.contains("Byron Merritt"));
        assert!(screen.contains("No cover"));
        assert!(screen.contains("https://covers.openlibrary.org/b/id/1001-M.jpg"));
        assert!(screen.contains("—"));
        assert!(screen.contains("Editions: 10"));
        assert!(!screen.contains(LOADING));
    }

    #[test]
    fn loading_keeps_previous_list() {
        let mut app = app();
        let generation = submit(&mut app, "dune");
        settle(&mut app, SearchAction::FetchSucceeded {
            generation,
            results: dune_page(),
        });
        app.search.apply(SearchAction::SetPage(2));

        let screen = render(&mut app);

        assert!(screen.contains(LOADING));
        assert!(screen.contains("Searching..."));
        assert!(screen.contains("Dune 0"));
    }

    #[test]
    fn renders_no_results() {
        let mut app = app();
        let generation = submit(&mut app, "zzzzxxxx");
        settle(&mut app, SearchAction::FetchSucceeded {
            generation,
            results: SearchResults::default(),
        });

        let screen = render(&mut app);

        assert!(screen.contains("No books found for 'zzzzxxxx'"));
        assert!(screen.contains("No results found"));
        assert!(!screen.contains("Error:"));
    }

    #[test]
    fn renders_error_with_empty_list() {
        let mut app = app();
        let generation = submit(&mut app, "dune");
        settle(&mut app, SearchAction::FetchSucceeded {
            generation,
            results: dune_page(),
        });

        let generation = app.search.apply(SearchAction::SetPage(2)).unwrap().generation;
        settle(&mut app, SearchAction::FetchFailed {
            generation,
            message: "Network response was not ok: 502".to_string(),
        });

        let screen = render(&mut app);

        assert!(screen.contains("Error: Network response was not ok: 502"));
        assert!(!screen.contains("Dune 0"));
        assert!(!screen.contains("No books found"));
        assert!(!screen.contains(LOADING));
        assert_eq!(app.search.results().num_found, 0);
    }
}
