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

//! Formatting helpers for the result list.

const MAX_AUTHORS: usize = 3;

const UNKNOWN_AUTHOR: &str = "Unknown author";

const NO_YEAR: &str = "—";

/// Formats a count with comma thousands separators.
///
/// # Examples
///
/// ```
/// assert_eq!(group_thousands(250), "250");
/// assert_eq!(group_thousands(1234567), "1,234,567");
/// ```
pub(crate) fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Joins up to the first three author names, or a placeholder if there are
/// none.
pub(crate) fn author_line(authors: &[String]) -> String {
    if authors.is_empty() {
        return UNKNOWN_AUTHOR.to_string();
    }

    authors
        .iter()
        .take(MAX_AUTHORS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn year_label(year: Option<i32>) -> String {
    year.map_or_else(|| NO_YEAR.to_string(), |y| y.to_string())
}

pub(crate) fn editions_label(edition_count: u32) -> String {
    format!("Editions: {}", edition_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(250_000), "250,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn author_line_caps_at_three() {
        let authors: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        assert_eq!(author_line(&authors), "A, B, C");
        assert_eq!(author_line(&authors[..2]), "A, B");
    }

    #[test]
    fn author_line_placeholder() {
        assert_eq!(author_line(&[]), "Unknown author");
    }

    #[test]
    fn year_placeholder() {
        assert_eq!(year_label(Some(1965)), "1965");
        assert_eq!(year_label(None), "—");
    }
}
