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

//! Diagnostic logging.
//!
//! The terminal belongs to the UI, so log output goes to a daily rolling file
//! under the user's data directory instead of stdout. The filter is taken
//! from `RUST_LOG` and defaults to `info`.

use std::{fs, path::PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "bookfinder.log";

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("bookfinder").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Installs the global subscriber.
///
/// The returned guard flushes buffered log lines when dropped, so it must be
/// held for the lifetime of the application.
pub(crate) fn init() -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("Failed to create log directory {}: {}", dir.display(), e);
    }

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_env_filter(env_filter)
        .try_init();

    if let Err(e) = installed {
        eprintln!("Failed to initialise logging: {}", e);
    }

    guard
}
