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
use tracing::{info, warn};

use crate::{
    App,
    components::OpenTarget,
    events::Focus,
    model::search::SearchAction,
    tasks::AppTask,
};

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) {
    app.focus = focus;
}

pub(super) fn handle_submit(app: &mut App) -> Result<()> {
    dispatch(app, SearchAction::Submit)
}

pub(super) fn handle_find_title(app: &mut App, title: String) -> Result<()> {
    app.search.set_draft(title);
    dispatch(app, SearchAction::Submit)
}

pub(super) fn handle_set_page(app: &mut App, page: u32) -> Result<()> {
    dispatch(app, SearchAction::SetPage(page))
}

fn dispatch(app: &mut App, action: SearchAction) -> Result<()> {
    if let Some(request) = app.search.apply(action) {
        app.status = None;
        app.task_tx.send(AppTask::Fetch(request))?;
    }

    Ok(())
}

pub(super) fn handle_fetch_settled(app: &mut App, outcome: SearchAction) {
    let fresh_results = matches!(outcome, SearchAction::FetchSucceeded { .. })
        && outcome.generation().is_some_and(|g| app.search.is_current(g));

    app.search.apply(outcome);

    if fresh_results {
        let count = app.search.results().books.len();
        app.book_table.reset_selection(count);
    }
}

pub(super) fn handle_open(app: &mut App, target: OpenTarget) {
    let Some(book) = app
        .book_table
        .selected()
        .and_then(|i| app.search.results().books.get(i))
    else {
        app.status = Some("No book selected".to_string());
        return;
    };

    let url = match target {
        OpenTarget::Work => book.work_url(&app.config.site_url),
        OpenTarget::Cover => book.cover_url(&app.config.covers_endpoint, app.config.cover_size),
    };

    let Some(url) = url else {
        app.status = Some(match target {
            OpenTarget::Work => format!("'{}' has no catalog page", book.title),
            OpenTarget::Cover => format!("'{}' has no cover", book.title),
        });
        return;
    };

    match open::that_detached(&url) {
        Ok(()) => {
            info!(%url, "opened in browser");
            app.status = Some(format!("Opened {}", url));
        }
        Err(e) => {
            warn!(%url, error = %e, "could not open browser");
            app.status = Some(format!("Could not open {}: {}", url, e));
        }
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "reported error");
    app.status = Some(message);
}
