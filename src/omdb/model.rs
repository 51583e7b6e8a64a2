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

//! Wire schema for the catalog search API.
//!
//! These structs mirror the JSON the OMDb search endpoint actually returns.
//! Every string field defaults to empty when absent so a sparse or malformed
//! entry still decodes; repairing the data is explicitly not this layer's
//! job.

use serde::Deserialize;

/// The envelope of a search response.
///
/// On a miss the API answers `{"Response": "False", "Error": "..."}` with no
/// `Search` array at all, hence the `Option`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(rename = "Search")]
    pub(crate) search: Option<Vec<RawMovie>>,
}

/// One entry of the `Search` array, as received.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMovie {
    #[serde(rename = "imdbID", default)]
    pub(crate) imdb_id: String,
    #[serde(rename = "Title", default)]
    pub(crate) title: String,
    #[serde(rename = "Year", default)]
    pub(crate) year: String,
    #[serde(rename = "Type", default)]
    pub(crate) kind: String,
    #[serde(rename = "Poster")]
    pub(crate) poster: Option<String>,
}
