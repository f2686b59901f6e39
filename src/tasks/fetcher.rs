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

//! Fetch orchestration.
//!
//! At most one search request is live at a time. Dispatching a new request
//! aborts the one in flight, which drops its future and abandons the HTTP
//! call. Outcomes are reported through a [`FetchDelegate`] tagged with the
//! request generation, and the search state discards any that are stale.

use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    catalog::CatalogClient,
    model::search::{FetchRequest, SearchAction},
};

/// Receives the outcome of each dispatched request.
pub(crate) trait FetchDelegate: Clone + Send + Sync + 'static {
    fn on_fetch_settled(&self, outcome: SearchAction);
}

struct InFlight {
    generation: u64,
    handle: JoinHandle<()>,
}

pub(crate) struct Fetcher<D: FetchDelegate> {
    client: CatalogClient,
    runtime: Handle,
    delegate: D,
    in_flight: Option<InFlight>,
}

impl<D: FetchDelegate> Fetcher<D> {
    pub(crate) fn new(client: CatalogClient, runtime: Handle, delegate: D) -> Self {
        Self {
            client,
            runtime,
            delegate,
            in_flight: None,
        }
    }

    /// Starts `request`, superseding any request still in flight.
    pub(crate) fn dispatch(&mut self, request: FetchRequest) {
        self.cancel_in_flight();

        let generation = request.generation;
        let client = self.client.clone();
        let delegate = self.delegate.clone();

        info!(generation, term = %request.term, page = request.page, "search started");

        let handle = self.runtime.spawn(async move {
            let outcome = match client.search(&request.term, request.page).await {
                Ok(results) => {
                    info!(generation, books = results.books.len(), num_found = results.num_found, "search finished");
                    SearchAction::FetchSucceeded { generation, results }
                }
                Err(e) => {
                    warn!(generation, error = %e, "search failed");
                    SearchAction::FetchFailed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };

            delegate.on_fetch_settled(outcome);
        });

        self.in_flight = Some(InFlight { generation, handle });
    }

    /// Aborts the request in flight, if it has not already settled.
    pub(crate) fn cancel_in_flight(&mut self) {
        let Some(in_flight) = self.in_flight.take() else {
            return;
        };

        if in_flight.handle.is_finished() {
            return;
        }

        in_flight.handle.abort();
        debug!(generation = in_flight.generation, "search cancelled");

        self.delegate.on_fetch_settled(SearchAction::FetchCancelled {
            generation: in_flight.generation,
        });
    }
}

impl<D: FetchDelegate> Drop for Fetcher<D> {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, query_param},
    };

    use super::*;
    use crate::model::search::SearchState;

    impl FetchDelegate for UnboundedSender<SearchAction> {
        fn on_fetch_settled(&self, outcome: SearchAction) {
            let _ = self.send(outcome);
        }
    }

    fn fetcher_for(server: &MockServer) -> (Fetcher<UnboundedSender<SearchAction>>, UnboundedReceiver<SearchAction>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = CatalogClient::with_endpoint(format!("{}/search.json", server.uri()));
        (Fetcher::new(client, Handle::current(), tx), rx)
    }

    fn dune_docs(count: usize) -> serde_json::Value {
        let docs: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                let mut doc = json!({
                    "key": format!("/works/OL{}W", i),
                    "title": format!("Dune {}", i),
                    "author_name": ["Frank Herbert", "Brian Herbert", "Kevin J. Anderson", "Byron Merritt"],
                    "first_publish_year": 1965,
                    "edition_count": 10 + i,
                });
                if i % 2 == 0 {
                    doc["cover_i"] = json!(1000 + i);
                }
                doc
            })
            .collect();

        json!({ "numFound": 250, "docs": docs })
    }

    async fn next_outcome(rx: &mut UnboundedReceiver<SearchAction>) -> SearchAction {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for fetch outcome")
            .expect("delegate channel closed")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_reports_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("title", "dune"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(dune_docs(10)))
            .mount(&server)
            .await;

        let (mut fetcher, mut rx) = fetcher_for(&server);
        let mut state = SearchState::new();
        state.set_draft("dune");
        let request = state.apply(SearchAction::Submit).unwrap();

        fetcher.dispatch(request);
        let outcome = next_outcome(&mut rx).await;
        state.apply(outcome);

        assert!(!state.is_loading());
        assert_eq!(state.summary_line(), "Showing 10 of 250 results (page 1)");
        assert_eq!(state.results().books[1].cover_id, None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatch_reports_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (mut fetcher, mut rx) = fetcher_for(&server);
        let mut state = SearchState::new();
        state.set_draft("dune");
        fetcher.dispatch(state.apply(SearchAction::Submit).unwrap());

        state.apply(next_outcome(&mut rx).await);

        assert_eq!(state.error(), Some("Network response was not ok: 500"));
        assert!(state.results().books.is_empty());
        assert_eq!(state.results().num_found, 0);
        assert!(!state.is_loading());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn newer_request_supersedes_slow_one() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("title", "slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "numFound": 1, "docs": [{ "title": "Slow" }] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("title", "fast"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "numFound": 1, "docs": [{ "title": "Fast" }] })),
            )
            .mount(&server)
            .await;

        let (mut fetcher, mut rx) = fetcher_for(&server);
        let mut state = SearchState::new();

        state.set_draft("slow");
        let first = state.apply(SearchAction::Submit).unwrap();
        fetcher.dispatch(first.clone());

        state.set_draft("fast");
        let second = state.apply(SearchAction::Submit).unwrap();
        fetcher.dispatch(second.clone());

        let cancelled = next_outcome(&mut rx).await;
        assert_eq!(
            cancelled,
            SearchAction::FetchCancelled {
                generation: first.generation
            }
        );
        state.apply(cancelled);
        assert!(state.is_loading());

        let settled = next_outcome(&mut rx).await;
        assert_eq!(settled.generation(), Some(second.generation));
        state.apply(settled);

        // Give the aborted request time to have answered, had it survived
        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(state.results().books[0].title, "Fast");
        assert_eq!(state.error(), None);
        assert!(!state.is_loading());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dropping_fetcher_cancels_in_flight_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "numFound": 0, "docs": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let (mut fetcher, mut rx) = fetcher_for(&server);
        fetcher.dispatch(FetchRequest {
            generation: 1,
            term: "dune".to_string(),
            page: 1,
        });
        drop(fetcher);

        assert_eq!(
            next_outcome(&mut rx).await,
            SearchAction::FetchCancelled { generation: 1 }
        );

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(rx.try_recv().is_err());
    }
}
