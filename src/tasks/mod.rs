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

//! Asynchronous application task processing.
//!
//! This module offloads network requests from the main UI thread. It provides
//! a dedicated worker loop that translates [`AppTask`] requests into catalog
//! searches and broadcasts the results back to the application via
//! [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to events.

pub(crate) mod fetcher;

use anyhow::{Context, Result};
use std::{
    sync::mpsc::{Receiver, Sender},
    thread::{self, JoinHandle},
};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{
    catalog::CatalogClient,
    events::AppEvent,
    model::search::FetchRequest,
    tasks::fetcher::Fetcher,
};

#[derive(Debug)]
pub(crate) enum AppTask {
    Fetch(FetchRequest),

    Shutdown,
}

/// Spawns a background thread to process application tasks.
///
/// The worker owns a tokio runtime on which requests run, and enters a
/// blocking loop listening for incoming [`AppTask`]s. The loop ends on
/// [`AppTask::Shutdown`] or when every task sender has been dropped; either
/// way the request in flight is cancelled.
///
/// # Arguments
///
/// * `client` - The catalog client used for searches.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
///
/// # Errors
///
/// Returns an error if the async runtime or the worker thread cannot be
/// created.
pub(crate) fn spawn_task_worker(
    client: CatalogClient,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> Result<JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("bookfinder-fetch")
        .enable_all()
        .build()
        .context("Failed to create async runtime")?;

    thread::Builder::new()
        .name("bookfinder-tasks".to_string())
        .spawn(move || run_worker(runtime, client, task_rx, event_tx))
        .context("Failed to spawn task worker")
}

fn run_worker(
    runtime: Runtime,
    client: CatalogClient,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let mut ctx = TaskContext {
        fetcher: Fetcher::new(client, runtime.handle().clone(), event_tx),
    };

    while let Ok(task) = task_rx.recv() {
        if !handle_task(task, &mut ctx) {
            break;
        }
    }

    ctx.fetcher.cancel_in_flight();
    debug!("task worker stopped");
}

/// Bundles the resources task handlers operate on.
struct TaskContext {
    fetcher: Fetcher<Sender<AppEvent>>,
}

/// Orchestrates the execution of a single task, returning whether the worker
/// should keep running.
fn handle_task(task: AppTask, ctx: &mut TaskContext) -> bool {
    match task {
        AppTask::Fetch(request) => {
            ctx.fetcher.dispatch(request);
            true
        }

        AppTask::Shutdown => false,
    }
}
