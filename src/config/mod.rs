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

//! Application configuration.
//!
//! This module manages the application configuration file. Missing or
//! unreadable configuration falls back to the public Open Library endpoints.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::CoverSize;

const CONFIG_NAME: &str = "bookfinder";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) search_endpoint: String,
    pub(crate) covers_endpoint: String,
    pub(crate) site_url: String,
    pub(crate) cover_size: CoverSize,
    pub(crate) user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            search_endpoint: "https://openlibrary.org/search.json".to_string(),
            covers_endpoint: "https://covers.openlibrary.org/b/id".to_string(),
            site_url: "https://openlibrary.org".to_string(),
            cover_size: CoverSize::M,
            user_agent: format!("{}/{}", CONFIG_NAME, env!("CARGO_PKG_VERSION")),
        }
    }
}

pub(crate) fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_else(|e| {
        warn!(error = %e, "could not load configuration, using defaults");
        AppConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{ "cover_size": "L" }"#).unwrap();

        assert_eq!(config.cover_size, CoverSize::L);
        assert_eq!(config.search_endpoint, AppConfig::default().search_endpoint);
    }
}
