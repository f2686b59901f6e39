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

//! Raw catalog response shapes and their normalisation.
//!
//! Every field of a catalog document is optional. [`normalize`] maps a raw
//! document onto a [`BookRecord`], defaulting the author list to empty and
//! the edition count to zero while leaving the other absent fields absent.

use serde::Deserialize;

use crate::model::{BookRecord, SearchResults};

#[derive(Deserialize, Debug, Default)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) docs: Option<Vec<CatalogDoc>>,

    #[serde(default, rename = "numFound")]
    pub(crate) num_found: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub(crate) struct CatalogDoc {
    #[serde(default)]
    pub(crate) key: Option<String>,

    #[serde(default)]
    pub(crate) title: Option<String>,

    #[serde(default)]
    pub(crate) author_name: Option<Vec<String>>,

    #[serde(default)]
    pub(crate) first_publish_year: Option<i32>,

    #[serde(default)]
    pub(crate) cover_i: Option<i64>,

    #[serde(default)]
    pub(crate) edition_count: Option<u32>,
}

pub(crate) fn normalize(doc: CatalogDoc) -> BookRecord {
    BookRecord {
        key: doc.key,
        title: doc.title.unwrap_or_default(),
        authors: doc.author_name.unwrap_or_default(),
        first_publish_year: doc.first_publish_year,
        cover_id: doc.cover_i,
        edition_count: doc.edition_count.unwrap_or(0),
    }
}

impl From<CatalogDoc> for BookRecord {
    fn from(doc: CatalogDoc) -> Self {
        normalize(doc)
    }
}

impl From<SearchResponse> for SearchResults {
    fn from(response: SearchResponse) -> Self {
        Self {
            books: response
                .docs
                .unwrap_or_default()
                .into_iter()
                .map(normalize)
                .collect(),
            num_found: response.num_found.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> SearchResults {
        let response: SearchResponse = serde_json::from_value(value).unwrap();
        response.into()
    }

    #[test]
    fn full_document_is_copied() {
        let results = parse(json!({
            "numFound": 1,
            "docs": [{
                "key": "/works/OL893415W",
                "title": "Dune",
                "author_name": ["Frank Herbert"],
                "first_publish_year": 1965,
                "cover_i": 11481354,
                "edition_count": 312,
                "language": ["eng"]
            }]
        }));

        assert_eq!(
            results.books,
            vec![BookRecord {
                key: Some("/works/OL893415W".to_string()),
                title: "Dune".to_string(),
                authors: vec!["Frank Herbert".to_string()],
                first_publish_year: Some(1965),
                cover_id: Some(11481354),
                edition_count: 312,
            }]
        );
        assert_eq!(results.num_found, 1);
    }

    #[test]
    fn missing_fields_take_defaults_or_stay_absent() {
        let book = normalize(CatalogDoc {
            title: Some("Untitled Draft".to_string()),
            ..Default::default()
        });

        assert!(book.authors.is_empty());
        assert_eq!(book.edition_count, 0);
        assert_eq!(book.key, None);
        assert_eq!(book.first_publish_year, None);
        assert_eq!(book.cover_id, None);
    }

    #[test]
    fn null_fields_are_treated_as_missing() {
        let results = parse(json!({
            "docs": [{ "title": "Emma", "author_name": null, "cover_i": null }]
        }));

        assert!(results.books[0].authors.is_empty());
        assert_eq!(results.books[0].cover_id, None);
    }

    #[test]
    fn missing_docs_and_count_default_to_empty() {
        let results = parse(json!({}));
        assert!(results.books.is_empty());
        assert_eq!(results.num_found, 0);
    }

    #[test]
    fn document_order_is_preserved() {
        let results = parse(json!({
            "numFound": 3,
            "docs": [{ "title": "C" }, { "title": "A" }, { "title": "B" }]
        }));

        let titles: Vec<&str> = results.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["C", "A", "B"]);
    }
}
