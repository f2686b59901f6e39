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

//! Open Library search client.
//!
//! This module issues title searches against the catalog's search endpoint
//! and normalises the response into [`SearchResults`].
//!
//! # Sub-modules
//!
//! * [`query`]: Transport encoding of the search term.
//! * [`doc`]: Raw response shapes and the document normaliser.

pub(crate) mod doc;
pub(crate) mod query;

use thiserror::Error;
use tracing::debug;

use crate::{catalog::doc::SearchResponse, config::AppConfig, model::SearchResults};

#[derive(Debug, Error)]
pub(crate) enum FetchError {
    #[error("Network response was not ok: {0}")]
    Status(u16),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Clone)]
pub(crate) struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// Creates a client for the search endpoint named in the configuration.
    pub(crate) fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http,
            endpoint: config.search_endpoint.clone(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches one page of books whose title matches `term`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for a non-2xx response,
    /// [`FetchError::Transport`] if the request could not be completed, and
    /// [`FetchError::Decode`] if the body is not a valid search response.
    pub(crate) async fn search(&self, term: &str, page: u32) -> Result<SearchResults, FetchError> {
        let url = query::search_url(&self.endpoint, term, page);
        debug!(%url, "requesting search page");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        Ok(parsed.into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    use super::*;

    fn client_for(server: &MockServer) -> CatalogClient {
        CatalogClient::with_endpoint(format!("{}/search.json", server.uri()))
    }

    #[tokio::test]
    async fn search_sends_encoded_title_and_page() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("title", "harry+potter+"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "numFound": 1,
                "docs": [{ "title": "Harry Potter and the Goblet of Fire" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = client_for(&server)
            .search("Harry Potter!", 3)
            .await
            .unwrap();

        assert_eq!(results.num_found, 1);
        assert_eq!(results.books[0].title, "Harry Potter and the Goblet of Fire");
    }

    #[tokio::test]
    async fn search_normalizes_documents() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "numFound": 2,
                "docs": [
                    { "key": "/works/OL1W", "title": "Dune", "author_name": ["Frank Herbert"], "cover_i": 7, "edition_count": 3 },
                    { "title": "Dune Notes" }
                ]
            })))
            .mount(&server)
            .await;

        let results = client_for(&server).search("dune", 1).await.unwrap();

        assert_eq!(results.books.len(), 2);
        assert_eq!(results.books[0].cover_id, Some(7));
        assert!(results.books[1].authors.is_empty());
        assert_eq!(results.books[1].edition_count, 0);
        assert_eq!(results.books[1].key, None);
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).search("dune", 1).await.unwrap_err();

        assert!(matches!(err, FetchError::Status(503)));
        assert_eq!(err.to_string(), "Network response was not ok: 503");
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).search("dune", 1).await.unwrap_err();

        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        // Nothing listens on the discard port
        let client = CatalogClient::with_endpoint("http://127.0.0.1:9/search.json");

        let err = client.search("dune", 1).await.unwrap_err();

        assert!(matches!(err, FetchError::Transport(_)));
    }
}
