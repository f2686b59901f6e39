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

//! Transport encoding of search terms.
//!
//! The catalog expects the title parameter lowercased, with every run of
//! characters other than `a-z` and `0-9` collapsed into a single `+`. The
//! collapsed form is then percent-encoded as a URI component, so the `+`
//! separators travel as `%2B`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left unescaped by a URI component encoder.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const SEPARATOR: char = '+';

/// Lowercases a term and collapses each run of non `[a-z0-9]` characters
/// into one separator.
pub(crate) fn collapse_term(term: &str) -> String {
    let mut collapsed = String::with_capacity(term.len());
    let mut in_run = false;

    for c in term.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            collapsed.push(c);
            in_run = false;
        } else if !in_run {
            collapsed.push(SEPARATOR);
            in_run = true;
        }
    }

    collapsed
}

/// The term as it is sent in the `title` query parameter.
pub(crate) fn transport_term(term: &str) -> String {
    utf8_percent_encode(&collapse_term(term), URI_COMPONENT).to_string()
}

/// Builds the search URL for a term and 1-based page number.
pub(crate) fn search_url(endpoint: &str, term: &str, page: u32) -> String {
    format!("{}?title={}&page={}", endpoint, transport_term(term), page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_spaces() {
        assert_eq!(collapse_term("Harry Potter!"), "harry+potter+");
        assert_eq!(collapse_term("The  Lord -- of the Rings"), "the+lord+of+the+rings");
        assert_eq!(collapse_term("1984"), "1984");
    }

    #[test]
    fn leading_run_becomes_one_separator() {
        assert_eq!(collapse_term("  ...dune"), "+dune");
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(collapse_term("Les Misérables"), "les+mis+rables");
    }

    #[test]
    fn transport_term_encodes_separators() {
        assert_eq!(transport_term("Harry Potter!"), "harry%2Bpotter%2B");
        assert_eq!(transport_term("dune"), "dune");
    }

    #[test]
    fn search_url_has_title_and_page() {
        assert_eq!(
            search_url("https://openlibrary.org/search.json", "The Hobbit", 2),
            "https://openlibrary.org/search.json?title=the%2Bhobbit&page=2"
        );
    }
}
