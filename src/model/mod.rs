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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—movie records
//! obtained from the remote catalog search—and the normalization logic that
//! maps the raw external schema onto them.

pub(crate) mod nominations;
pub(crate) mod notify;
pub(crate) mod search;

use serde::{Deserialize, Serialize};

use crate::omdb::RawMovie;

/// The kind of catalog entry a search can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum MovieKind {
    Movie,
    Series,
    Episode,
    #[serde(other)]
    Other,
}

impl MovieKind {
    fn from_label(label: &str) -> Self {
        match label {
            "movie" => MovieKind::Movie,
            "series" => MovieKind::Series,
            "episode" => MovieKind::Episode,
            _ => MovieKind::Other,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            MovieKind::Movie => "movie",
            MovieKind::Series => "series",
            MovieKind::Episode => "episode",
            MovieKind::Other => "other",
        }
    }
}

/// A single catalog entry. Identity is the `id` field; everything else is
/// display metadata carried through from the external source unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct MovieRecord {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) year: String,
    pub(crate) kind: MovieKind,
    pub(crate) poster_url: Option<String>,
}

impl MovieRecord {
    /// Maps a raw search entry from the external catalog to a [`MovieRecord`].
    ///
    /// The external schema marks an absent poster with the literal `"N/A"`;
    /// that and a missing field both map to `None`. No other fields are
    /// validated or repaired, a malformed title or id is carried through
    /// as-is.
    pub(crate) fn from_raw(raw: RawMovie) -> Self {
        let poster_url = match raw.poster {
            Some(url) if !url.is_empty() && url != "N/A" => Some(url),
            _ => None,
        };

        Self {
            id: raw.imdb_id,
            title: raw.title,
            year: raw.year,
            kind: MovieKind::from_label(&raw.kind),
            poster_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, title: &str, kind: &str, poster: Option<&str>) -> RawMovie {
        RawMovie {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "1977".to_string(),
            kind: kind.to_string(),
            poster: poster.map(str::to_string),
        }
    }

    #[test]
    fn normalizes_a_plain_movie_entry() {
        let record = MovieRecord::from_raw(raw(
            "tt0076759",
            "Star Wars",
            "movie",
            Some("https://m.media-amazon.com/images/sw.jpg"),
        ));

        assert_eq!(record.id, "tt0076759");
        assert_eq!(record.title, "Star Wars");
        assert_eq!(record.kind, MovieKind::Movie);
        assert_eq!(
            record.poster_url.as_deref(),
            Some("https://m.media-amazon.com/images/sw.jpg")
        );
    }

    #[test]
    fn missing_or_placeholder_poster_maps_to_none() {
        assert_eq!(
            MovieRecord::from_raw(raw("tt1", "A", "movie", None)).poster_url,
            None
        );
        assert_eq!(
            MovieRecord::from_raw(raw("tt2", "B", "movie", Some("N/A"))).poster_url,
            None
        );
        assert_eq!(
            MovieRecord::from_raw(raw("tt3", "C", "movie", Some(""))).poster_url,
            None
        );
    }

    #[test]
    fn unknown_kind_labels_fall_back_to_other() {
        assert_eq!(
            MovieRecord::from_raw(raw("tt4", "D", "game", None)).kind,
            MovieKind::Other
        );
        assert_eq!(
            MovieRecord::from_raw(raw("tt5", "E", "series", None)).kind,
            MovieKind::Series
        );
    }

    #[test]
    fn malformed_entries_pass_through_untouched() {
        let record = MovieRecord::from_raw(raw("", "", "movie", None));
        assert_eq!(record.id, "");
        assert_eq!(record.title, "");
    }
}
