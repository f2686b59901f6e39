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

//! Render the search input.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBar, theme::Theme};

const PLACEHOLDER: &str = "Enter book title, e.g. Harry Potter";

impl SearchBar<'_> {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, loading: bool, focused: bool, theme: &Theme) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(14)])
            .split(inner_area);

        let draft = self.draft.value();
        let text = if draft.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(theme.muted_colour)))
        } else {
            Line::from(draft)
        };

        let scroll = self.draft.visual_scroll(chunks[0].width as usize);
        f.render_widget(Paragraph::new(text).scroll((0, scroll as u16)), chunks[0]);

        let button = if loading { "Searching..." } else { "Search" };
        f.render_widget(
            Paragraph::new(Line::from(button).right_aligned())
                .style(Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
            chunks[1],
        );

        if focused {
            let cursor = self.draft.visual_cursor().saturating_sub(scroll);
            f.set_cursor_position((chunks[0].x + cursor as u16, chunks[0].y));
        }
    }
}
